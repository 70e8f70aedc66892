use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Percentage adjustments for one factor, keyed by level name.
///
/// `50.0` means +50% yield at that level, `-50.0` means -50%.
pub type LevelTable = BTreeMap<String, f64>;

/// Per-factor sensitivity of a crop: factor name -> level table.
///
/// Factor and level names are open-ended strings; `sun`/`rain`/`wind` and
/// `low`/`medium`/`high` are conventions, not a closed set. Iteration is in
/// lexicographic factor order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactorTable(BTreeMap<String, LevelTable>);

impl FactorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_factor<I, L>(mut self, factor: impl Into<String>, levels: I) -> Self
    where
        I: IntoIterator<Item = (L, f64)>,
        L: Into<String>,
    {
        self.insert(factor, levels);
        self
    }

    /// Declare (or replace) the level table for `factor`.
    pub fn insert<I, L>(&mut self, factor: impl Into<String>, levels: I) -> Option<LevelTable>
    where
        I: IntoIterator<Item = (L, f64)>,
        L: Into<String>,
    {
        let table = levels.into_iter().map(|(l, p)| (l.into(), p)).collect();
        self.0.insert(factor.into(), table)
    }

    /// Level table declared for `factor`, if any.
    pub fn levels(&self, factor: &str) -> Option<&LevelTable> {
        self.0.get(factor)
    }

    /// Percentage declared for `factor` at `level`, if both are declared.
    pub fn percentage(&self, factor: &str, level: &str) -> Option<f64> {
        self.0.get(factor)?.get(level).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LevelTable)> {
        self.0.iter().map(|(f, t)| (f.as_str(), t))
    }
}

impl FromIterator<(String, LevelTable)> for FactorTable {
    fn from_iter<T: IntoIterator<Item = (String, LevelTable)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A crop (plant) definition: base yield, unit prices and environmental
/// sensitivity.
///
/// `price` and `sale_price` are optional. Economics that need a missing
/// price fail with [`EconomicsError`](crate::economics::EconomicsError)
/// instead of defaulting to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropDefinition {
    pub name: String,
    /// Yield of a single planted unit before environment adjustments.
    #[serde(rename = "yield")]
    pub base_yield: f64,
    /// Cost of planting one unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Sale price of one unit of yield.
    #[serde(default, alias = "salePrice", skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    #[serde(default, skip_serializing_if = "FactorTable::is_empty")]
    pub factors: FactorTable,
}

impl CropDefinition {
    pub fn new(name: impl Into<String>, base_yield: f64) -> Self {
        Self {
            name: name.into(),
            base_yield,
            price: None,
            sale_price: None,
            factors: FactorTable::default(),
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_sale_price(mut self, sale_price: f64) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    pub fn with_factor<I, L>(mut self, factor: impl Into<String>, levels: I) -> Self
    where
        I: IntoIterator<Item = (L, f64)>,
        L: Into<String>,
    {
        self.factors.insert(factor, levels);
        self
    }
}
