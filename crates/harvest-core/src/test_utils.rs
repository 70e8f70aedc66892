//! Shared test fixtures for unit tests, integration tests, and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]`.

use crate::crop::CropDefinition;
use crate::environment::EnvironmentFactors;
use crate::planting::CropEntry;

// ===========================================================================
// Float helper
// ===========================================================================

pub const TOLERANCE: f64 = 1e-9;

#[track_caller]
pub fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

// ===========================================================================
// Factor tables
// ===========================================================================

/// `[("low", low), ("medium", medium), ("high", high)]`.
pub fn low_medium_high(low: f64, medium: f64, high: f64) -> [(&'static str, f64); 3] {
    [("low", low), ("medium", medium), ("high", high)]
}

/// The usual sun/rain sensitivity: -50% / 0 / +50%.
pub fn halving_doubling() -> [(&'static str, f64); 3] {
    low_medium_high(-50.0, 0.0, 50.0)
}

/// The usual wind sensitivity: +30% / 0 / -15%.
pub fn wind_sensitivity() -> [(&'static str, f64); 3] {
    low_medium_high(30.0, 0.0, -15.0)
}

pub fn sun_rain_wind(sun: &str, rain: &str, wind: &str) -> EnvironmentFactors {
    EnvironmentFactors::new()
        .with("sun", sun)
        .with("rain", rain)
        .with("wind", wind)
}

// ===========================================================================
// Crops
// ===========================================================================

/// Corn: yield 3, price 2, sale price 3.
pub fn corn() -> CropDefinition {
    CropDefinition::new("corn", 3.0)
        .with_price(2.0)
        .with_sale_price(3.0)
}

/// Pumpkin: yield 4, price 3, sale price 5.
pub fn pumpkin() -> CropDefinition {
    CropDefinition::new("pumpkin", 4.0)
        .with_price(3.0)
        .with_sale_price(5.0)
}

pub fn entry(crop: CropDefinition, num_crops: u32) -> CropEntry {
    CropEntry::new(crop, num_crops)
}

/// Corn x5 and pumpkin x2.
pub fn corn_and_pumpkin() -> Vec<CropEntry> {
    vec![entry(corn(), 5), entry(pumpkin(), 2)]
}
