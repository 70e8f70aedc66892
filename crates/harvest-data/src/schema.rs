//! Serde structs for the on-disk farm files.
//!
//! `crops.*` and `plantings.*` hold lists; TOML keeps them under a top-level
//! `crops` / `plantings` key. `environment.*` is a plain factor -> level map
//! and `model.*` selects the factor combination.

use serde::Deserialize;
use std::collections::BTreeMap;

use harvest_core::{CropDefinition, FactorCombination, FactorTable, YieldModel};

// ===========================================================================
// Crops
// ===========================================================================

/// A crop definition in a data file.
#[derive(Debug, Clone, Deserialize)]
pub struct CropData {
    pub name: String,
    #[serde(rename = "yield")]
    pub base_yield: f64,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, alias = "salePrice")]
    pub sale_price: Option<f64>,
    /// factor -> level -> percentage
    #[serde(default)]
    pub factors: BTreeMap<String, BTreeMap<String, f64>>,
}

impl CropData {
    pub fn into_definition(self) -> CropDefinition {
        CropDefinition {
            name: self.name,
            base_yield: self.base_yield,
            price: self.price,
            sale_price: self.sale_price,
            factors: self.factors.into_iter().collect::<FactorTable>(),
        }
    }
}

// ===========================================================================
// Plantings
// ===========================================================================

/// A planting entry referencing a crop by name.
#[derive(Debug, Clone, Deserialize)]
pub struct PlantingData {
    pub crop: String,
    #[serde(alias = "numCrops")]
    pub num_crops: u32,
}

// ===========================================================================
// Environment / model
// ===========================================================================

/// Active level per factor.
pub type EnvironmentData = BTreeMap<String, String>;

/// Calculation model settings.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ModelData {
    #[serde(default)]
    pub combination: CombinationData,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinationData {
    #[default]
    Compounded,
    Additive,
}

impl From<ModelData> for YieldModel {
    fn from(data: ModelData) -> Self {
        let combination = match data.combination {
            CombinationData::Compounded => FactorCombination::Compounded,
            CombinationData::Additive => FactorCombination::Additive,
        };
        YieldModel::new(combination)
    }
}
