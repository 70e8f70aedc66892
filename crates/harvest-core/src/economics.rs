//! Cost, revenue and profit per planting entry and across a collection.
//!
//! Cost ignores the environment. Revenue and profit see it through the
//! adjusted yield. A planted entry whose crop lacks the price an operation
//! needs fails with [`EconomicsError`]; an unplanted entry always
//! contributes exactly 0.

use crate::environment::EnvironmentFactors;
use crate::planting::CropEntry;
use crate::yield_model::YieldModel;

/// A crop definition lacks a price needed for the calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EconomicsError {
    #[error("crop '{crop}' has no price")]
    MissingPrice { crop: String },
    #[error("crop '{crop}' has no sale price")]
    MissingSalePrice { crop: String },
}

impl EconomicsError {
    /// Name of the crop the error refers to.
    pub fn crop(&self) -> &str {
        match self {
            Self::MissingPrice { crop } | Self::MissingSalePrice { crop } => crop,
        }
    }
}

/// Planting cost of an entry: `price * num_crops`.
pub fn compute_crop_cost(entry: &CropEntry) -> Result<f64, EconomicsError> {
    if !entry.is_planted() {
        return Ok(0.0);
    }
    let price = entry.crop.price.ok_or_else(|| EconomicsError::MissingPrice {
        crop: entry.crop.name.clone(),
    })?;
    Ok(price * entry.quantity())
}

/// Sum of [`compute_crop_cost`] over `entries`.
pub fn compute_total_cost(entries: &[CropEntry]) -> Result<f64, EconomicsError> {
    entries
        .iter()
        .try_fold(0.0, |acc, e| Ok(acc + compute_crop_cost(e)?))
}

impl YieldModel {
    /// Adjusted crop yield times the sale price.
    pub fn crop_revenue(
        &self,
        entry: &CropEntry,
        env: Option<&EnvironmentFactors>,
    ) -> Result<f64, EconomicsError> {
        if !entry.is_planted() {
            return Ok(0.0);
        }
        let sale_price = entry
            .crop
            .sale_price
            .ok_or_else(|| EconomicsError::MissingSalePrice {
                crop: entry.crop.name.clone(),
            })?;
        Ok(self.crop_yield(entry, env) * sale_price)
    }

    /// Revenue minus cost. Negative when the crop loses money.
    pub fn crop_profit(
        &self,
        entry: &CropEntry,
        env: Option<&EnvironmentFactors>,
    ) -> Result<f64, EconomicsError> {
        let revenue = self.crop_revenue(entry, env)?;
        let cost = compute_crop_cost(entry)?;
        Ok(revenue - cost)
    }

    pub fn total_revenue(
        &self,
        entries: &[CropEntry],
        env: Option<&EnvironmentFactors>,
    ) -> Result<f64, EconomicsError> {
        entries
            .iter()
            .try_fold(0.0, |acc, e| Ok(acc + self.crop_revenue(e, env)?))
    }

    /// Sum of [`crop_profit`](Self::crop_profit) over `entries`. Stops at the
    /// first entry that cannot be priced.
    pub fn total_profit(
        &self,
        entries: &[CropEntry],
        env: Option<&EnvironmentFactors>,
    ) -> Result<f64, EconomicsError> {
        entries
            .iter()
            .try_fold(0.0, |acc, e| Ok(acc + self.crop_profit(e, env)?))
    }
}

pub fn compute_crop_revenue(
    entry: &CropEntry,
    env: Option<&EnvironmentFactors>,
) -> Result<f64, EconomicsError> {
    YieldModel::default().crop_revenue(entry, env)
}

pub fn compute_crop_profit(
    entry: &CropEntry,
    env: Option<&EnvironmentFactors>,
) -> Result<f64, EconomicsError> {
    YieldModel::default().crop_profit(entry, env)
}

pub fn compute_total_revenue(
    entries: &[CropEntry],
    env: Option<&EnvironmentFactors>,
) -> Result<f64, EconomicsError> {
    YieldModel::default().total_revenue(entries, env)
}

pub fn compute_total_profit(
    entries: &[CropEntry],
    env: Option<&EnvironmentFactors>,
) -> Result<f64, EconomicsError> {
    YieldModel::default().total_profit(entries, env)
}
