//! Environment-adjusted yield of a single plant.
//!
//! Each factor that is both active in the [`EnvironmentFactors`] and declared
//! by the crop at the active level contributes a signed percentage. The
//! percentages are folded into one multiplier on the base yield, in
//! lexicographic factor order:
//!
//! - [`FactorCombination::Compounded`]: `Π (1 + pct / 100)`
//! - [`FactorCombination::Additive`]: `1 + Σ pct / 100`
//!
//! With a single matching factor both give the same result.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::crop::CropDefinition;
use crate::environment::EnvironmentFactors;

/// How several matching factor percentages combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorCombination {
    /// Each factor multiplies the running yield: sun -50% then rain +50%
    /// gives `0.5 * 1.5 = 0.75`.
    #[default]
    Compounded,
    /// Percentages are summed first: sun -50% and rain +50% cancel out.
    Additive,
}

/// The calculation model shared by every yield and economics operation.
///
/// The free functions in this crate use `YieldModel::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldModel {
    #[serde(default)]
    pub combination: FactorCombination,
}

impl YieldModel {
    pub const fn new(combination: FactorCombination) -> Self {
        Self { combination }
    }

    /// The factor the base yield is multiplied by. `1.0` when nothing
    /// matches.
    pub fn adjustment_multiplier(
        &self,
        crop: &CropDefinition,
        env: Option<&EnvironmentFactors>,
    ) -> f64 {
        let Some(env) = env else {
            return 1.0;
        };
        if env.is_empty() || crop.factors.is_empty() {
            return 1.0;
        }

        let mut product = 1.0;
        let mut total_pct = 0.0;

        for (factor, level) in env.iter() {
            // Factors the crop does not declare are not sensitive to the environment.
            let Some(levels) = crop.factors.levels(factor) else {
                continue;
            };
            let Some(&pct) = levels.get(level) else {
                warn!(crop = %crop.name, factor, level, "level not declared for factor, skipped");
                continue;
            };
            debug!(crop = %crop.name, factor, level, pct, "applying factor adjustment");
            product *= 1.0 + pct / 100.0;
            total_pct += pct;
        }

        match self.combination {
            FactorCombination::Compounded => product,
            FactorCombination::Additive => 1.0 + total_pct / 100.0,
        }
    }

    /// Yield of one planted unit of `crop` under `env`. No rounding.
    pub fn resolve_plant_yield(
        &self,
        crop: &CropDefinition,
        env: Option<&EnvironmentFactors>,
    ) -> f64 {
        crop.base_yield * self.adjustment_multiplier(crop, env)
    }
}

/// Yield of one planted unit of `crop` under `env`, with the default model.
pub fn resolve_plant_yield(crop: &CropDefinition, env: Option<&EnvironmentFactors>) -> f64 {
    YieldModel::default().resolve_plant_yield(crop, env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    const ADDITIVE: YieldModel = YieldModel::new(FactorCombination::Additive);

    fn corn_30() -> CropDefinition {
        CropDefinition::new("corn", 30.0)
    }

    #[test]
    fn no_environment_returns_base_yield() {
        let corn = corn_30().with_factor("sun", low_medium_high(-50.0, 0.0, 50.0));
        assert_eq!(resolve_plant_yield(&corn, None), 30.0);
    }

    #[test]
    fn no_factors_returns_base_yield() {
        let env = EnvironmentFactors::new().with("sun", "high");
        assert_eq!(resolve_plant_yield(&corn_30(), Some(&env)), 30.0);
    }

    #[test]
    fn empty_environment_returns_base_yield() {
        let corn = corn_30().with_factor("sun", low_medium_high(-50.0, 0.0, 50.0));
        assert_eq!(resolve_plant_yield(&corn, Some(&EnvironmentFactors::new())), 30.0);
    }

    #[test]
    fn sun_high() {
        let corn = corn_30().with_factor("sun", low_medium_high(-50.0, 0.0, 50.0));
        let env = EnvironmentFactors::new().with("sun", "high");
        assert_eq!(resolve_plant_yield(&corn, Some(&env)), 45.0);
    }

    #[test]
    fn rain_medium() {
        let corn = corn_30().with_factor("rain", low_medium_high(-50.0, 0.0, 50.0));
        let env = EnvironmentFactors::new().with("rain", "medium");
        assert_eq!(resolve_plant_yield(&corn, Some(&env)), 30.0);
    }

    #[test]
    fn wind_low() {
        let corn = corn_30().with_factor("wind", low_medium_high(-50.0, 0.0, 50.0));
        let env = EnvironmentFactors::new().with("wind", "low");
        assert_eq!(resolve_plant_yield(&corn, Some(&env)), 15.0);
    }

    #[test]
    fn three_factors_compound() {
        let corn = corn_30()
            .with_factor("sun", low_medium_high(-50.0, 0.0, 50.0))
            .with_factor("rain", low_medium_high(-50.0, 0.0, 50.0))
            .with_factor("wind", low_medium_high(-50.0, 0.0, 50.0));
        let env = sun_rain_wind("low", "high", "medium");

        assert_eq!(resolve_plant_yield(&corn, Some(&env)), 22.5);
    }

    #[test]
    fn three_factors_additive() {
        let corn = corn_30()
            .with_factor("sun", low_medium_high(-50.0, 0.0, 50.0))
            .with_factor("rain", low_medium_high(-50.0, 0.0, 50.0))
            .with_factor("wind", low_medium_high(-50.0, 0.0, 50.0));
        let env = sun_rain_wind("low", "high", "medium");

        assert_eq!(ADDITIVE.resolve_plant_yield(&corn, Some(&env)), 30.0);
    }

    #[test]
    fn opposite_factors_cancel_when_additive() {
        let corn = corn_30()
            .with_factor("sun", [("high", 50.0)])
            .with_factor("wind", [("strong", -50.0)]);
        let env = EnvironmentFactors::new().with("sun", "high").with("wind", "strong");

        assert_eq!(ADDITIVE.resolve_plant_yield(&corn, Some(&env)), 30.0);
        assert_eq!(resolve_plant_yield(&corn, Some(&env)), 22.5);
    }

    #[test]
    fn environment_factor_missing_from_crop_is_skipped() {
        let corn = corn_30().with_factor("sun", low_medium_high(-50.0, 0.0, 50.0));
        let env = sun_rain_wind("low", "medium", "low");

        assert_eq!(resolve_plant_yield(&corn, Some(&env)), 15.0);
        assert_eq!(ADDITIVE.resolve_plant_yield(&corn, Some(&env)), 15.0);
    }

    #[test]
    fn undeclared_level_contributes_nothing() {
        let corn = corn_30().with_factor("sun", [("high", 50.0)]);
        let env = EnvironmentFactors::new().with("sun", "scorching");
        assert_eq!(resolve_plant_yield(&corn, Some(&env)), 30.0);
    }

    #[test]
    fn open_ended_factor_names() {
        let corn = corn_30().with_factor("frost", [("hard", -80.0)]);
        let env = EnvironmentFactors::new().with("frost", "hard");
        assert_approx(resolve_plant_yield(&corn, Some(&env)), 6.0);
    }

    #[test]
    fn fractional_yield_is_not_rounded() {
        let corn = CropDefinition::new("corn", 3.0).with_factor("sun", [("low", -50.0)]);
        let env = EnvironmentFactors::new().with("sun", "low");
        assert_eq!(resolve_plant_yield(&corn, Some(&env)), 1.5);
    }

    #[test]
    fn multiplier_defaults_to_one() {
        let model = YieldModel::default();
        assert_eq!(model.adjustment_multiplier(&corn_30(), None), 1.0);
        assert_eq!(model.combination, FactorCombination::Compounded);
    }

    #[test]
    fn combination_serde_names() {
        let json = serde_json::to_string(&FactorCombination::Additive).unwrap();
        assert_eq!(json, r#""additive""#);
        let model: YieldModel = serde_json::from_str("{}").unwrap();
        assert_eq!(model, YieldModel::default());
    }
}
