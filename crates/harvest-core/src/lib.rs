//! Harvest Core -- crop yield and farm economics.
//!
//! Pure, deterministic calculations over plain data: no I/O, no shared state.
//! Every operation borrows its inputs and returns a number (or an
//! [`EconomicsError`] when a price it needs is missing).
//!
//! # Operation chain
//!
//! 1. [`resolve_plant_yield`] -- one plant's yield, adjusted by the active
//!    [`EnvironmentFactors`].
//! 2. [`compute_crop_yield`] / [`compute_total_yield`] -- times the planted
//!    quantity, summed over a collection.
//! 3. [`compute_crop_cost`] -- price times quantity, environment-independent.
//! 4. [`compute_crop_revenue`] -- adjusted yield times sale price.
//! 5. [`compute_crop_profit`] -- revenue minus cost.
//! 6. [`compute_total_profit`] -- profit summed over a collection.
//!
//! The free functions use the default [`YieldModel`], which compounds
//! multiple factor adjustments. Build a `YieldModel` with
//! [`FactorCombination::Additive`] to sum percentages instead.
//!
//! ```rust
//! use harvest_core::{CropDefinition, CropEntry, EnvironmentFactors, compute_total_profit};
//!
//! let corn = CropDefinition::new("corn", 3.0)
//!     .with_price(2.0)
//!     .with_sale_price(3.0)
//!     .with_factor("sun", [("low", -50.0), ("medium", 0.0), ("high", 50.0)]);
//! let crops = vec![CropEntry::new(corn, 5)];
//! let env = EnvironmentFactors::new().with("sun", "low");
//!
//! assert_eq!(compute_total_profit(&crops, Some(&env)).unwrap(), 12.5);
//! ```

pub mod crop;
pub mod economics;
pub mod environment;
pub mod planting;
pub mod report;
pub mod yield_model;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use crop::{CropDefinition, FactorTable, LevelTable};
pub use economics::{
    EconomicsError, compute_crop_cost, compute_crop_profit, compute_crop_revenue,
    compute_total_cost, compute_total_profit, compute_total_revenue,
};
pub use environment::EnvironmentFactors;
pub use planting::{CropEntry, compute_crop_yield, compute_total_yield};
pub use report::{CropReport, FarmReport};
pub use yield_model::{FactorCombination, YieldModel, resolve_plant_yield};
