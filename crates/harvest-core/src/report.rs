//! One-pass breakdown of a planting collection: yield, cost, revenue and
//! profit per entry, plus totals.

use serde::Serialize;

use crate::economics::{EconomicsError, compute_crop_cost};
use crate::environment::EnvironmentFactors;
use crate::planting::CropEntry;
use crate::yield_model::YieldModel;

/// Figures for a single planting entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropReport {
    pub name: String,
    pub num_crops: u32,
    #[serde(rename = "yield")]
    pub crop_yield: f64,
    pub cost: f64,
    pub revenue: f64,
    pub profit: f64,
}

/// Per-entry figures in input order, plus totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FarmReport {
    pub crops: Vec<CropReport>,
    pub total_yield: f64,
    pub total_cost: f64,
    pub total_revenue: f64,
    pub total_profit: f64,
}

impl FarmReport {
    /// Report with the default [`YieldModel`].
    pub fn compute(
        entries: &[CropEntry],
        env: Option<&EnvironmentFactors>,
    ) -> Result<Self, EconomicsError> {
        YieldModel::default().report(entries, env)
    }

    /// The entry with the highest profit. Ties keep the earliest entry.
    pub fn most_profitable(&self) -> Option<&CropReport> {
        self.crops.iter().reduce(|best, c| if c.profit > best.profit { c } else { best })
    }

    /// Entries that lose money.
    pub fn losses(&self) -> impl Iterator<Item = &CropReport> {
        self.crops.iter().filter(|c| c.profit < 0.0)
    }
}

impl YieldModel {
    pub fn report(
        &self,
        entries: &[CropEntry],
        env: Option<&EnvironmentFactors>,
    ) -> Result<FarmReport, EconomicsError> {
        let mut report = FarmReport {
            crops: Vec::with_capacity(entries.len()),
            ..FarmReport::default()
        };

        for entry in entries {
            let crop_yield = self.crop_yield(entry, env);
            let revenue = self.crop_revenue(entry, env)?;
            let cost = compute_crop_cost(entry)?;
            let profit = revenue - cost;

            report.total_yield += crop_yield;
            report.total_cost += cost;
            report.total_revenue += revenue;
            report.total_profit += profit;
            report.crops.push(CropReport {
                name: entry.crop.name.clone(),
                num_crops: entry.num_crops,
                crop_yield,
                cost,
                revenue,
                profit,
            });
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crop::CropDefinition;
    use crate::economics::compute_total_profit;
    use crate::planting::compute_total_yield;
    use crate::test_utils::*;
    use crate::yield_model::FactorCombination;

    #[test]
    fn report_matches_individual_operations() {
        let crops = corn_and_pumpkin();
        let report = FarmReport::compute(&crops, None).unwrap();

        assert_eq!(report.crops.len(), 2);
        assert_eq!(report.crops[0].name, "corn");
        assert_eq!(report.crops[0].crop_yield, 15.0);
        assert_eq!(report.crops[0].cost, 10.0);
        assert_eq!(report.crops[0].revenue, 45.0);
        assert_eq!(report.crops[0].profit, 35.0);
        assert_eq!(report.total_yield, compute_total_yield(&crops, None));
        assert_eq!(report.total_profit, compute_total_profit(&crops, None).unwrap());
        assert_eq!(report.total_cost, 16.0);
        assert_eq!(report.total_revenue, 85.0);
    }

    #[test]
    fn empty_report() {
        let report = FarmReport::compute(&[], None).unwrap();
        assert_eq!(report, FarmReport::default());
        assert!(report.most_profitable().is_none());
    }

    #[test]
    fn most_profitable_and_losses() {
        let dud = CropDefinition::new("dud", 1.0)
            .with_price(10.0)
            .with_sale_price(1.0);
        let crops = vec![entry(corn(), 5), entry(pumpkin(), 2), entry(dud, 1)];
        let report = FarmReport::compute(&crops, None).unwrap();

        assert_eq!(report.most_profitable().map(|c| c.name.as_str()), Some("corn"));
        let losses: Vec<&str> = report.losses().map(|c| c.name.as_str()).collect();
        assert_eq!(losses, vec!["dud"]);
    }

    #[test]
    fn report_uses_model_combination() {
        let corn = corn()
            .with_factor("sun", halving_doubling())
            .with_factor("rain", halving_doubling());
        let crops = vec![entry(corn, 5)];
        let env = EnvironmentFactors::new().with("sun", "low").with("rain", "high");

        let additive = YieldModel::new(FactorCombination::Additive)
            .report(&crops, Some(&env))
            .unwrap();
        let compounded = YieldModel::default().report(&crops, Some(&env)).unwrap();

        assert_eq!(additive.total_yield, 15.0);
        assert_eq!(compounded.total_yield, 11.25);
    }

    #[test]
    fn report_fails_on_missing_price() {
        let crops = vec![entry(CropDefinition::new("corn", 3.0).with_sale_price(3.0), 5)];
        assert!(matches!(
            FarmReport::compute(&crops, None),
            Err(EconomicsError::MissingPrice { .. })
        ));
    }

    #[test]
    fn report_serializes_yield_field() {
        let report = FarmReport::compute(&corn_and_pumpkin(), None).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["crops"][1]["yield"], 8.0);
        assert_eq!(json["total_profit"], 69.0);
    }
}
