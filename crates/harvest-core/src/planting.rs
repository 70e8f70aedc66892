use serde::{Deserialize, Serialize};

use crate::crop::CropDefinition;
use crate::environment::EnvironmentFactors;
use crate::yield_model::YieldModel;

/// A crop definition paired with the number of units planted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropEntry {
    pub crop: CropDefinition,
    #[serde(alias = "numCrops")]
    pub num_crops: u32,
}

impl CropEntry {
    pub fn new(crop: CropDefinition, num_crops: u32) -> Self {
        Self { crop, num_crops }
    }

    pub fn is_planted(&self) -> bool {
        self.num_crops > 0
    }

    pub(crate) fn quantity(&self) -> f64 {
        f64::from(self.num_crops)
    }
}

impl YieldModel {
    /// Adjusted per-plant yield times the planted quantity. An unplanted
    /// entry yields exactly 0.
    pub fn crop_yield(&self, entry: &CropEntry, env: Option<&EnvironmentFactors>) -> f64 {
        if !entry.is_planted() {
            return 0.0;
        }
        self.resolve_plant_yield(&entry.crop, env) * entry.quantity()
    }

    /// Sum of [`crop_yield`](Self::crop_yield) over `entries`. 0 when empty.
    pub fn total_yield(&self, entries: &[CropEntry], env: Option<&EnvironmentFactors>) -> f64 {
        entries.iter().map(|e| self.crop_yield(e, env)).sum()
    }
}

pub fn compute_crop_yield(entry: &CropEntry, env: Option<&EnvironmentFactors>) -> f64 {
    YieldModel::default().crop_yield(entry, env)
}

pub fn compute_total_yield(entries: &[CropEntry], env: Option<&EnvironmentFactors>) -> f64 {
    YieldModel::default().total_yield(entries, env)
}
