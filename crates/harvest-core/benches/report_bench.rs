//! Criterion benchmarks for the yield and economics operations.
//!
//! Two benchmark groups:
//! - `resolve_plant_yield`: a crop with three factors under a full environment
//! - `farm_report`: 1000 planting entries, compounded vs additive

use criterion::{Criterion, criterion_group, criterion_main};
use harvest_core::test_utils::*;
use harvest_core::*;
use std::hint::black_box;

fn sensitive_corn() -> CropDefinition {
    corn()
        .with_factor("sun", halving_doubling())
        .with_factor("rain", halving_doubling())
        .with_factor("wind", wind_sensitivity())
}

/// 1000 entries alternating corn and pumpkin with varying quantities.
fn build_farm() -> Vec<CropEntry> {
    let pumpkin = pumpkin().with_factor("sun", halving_doubling());
    (0..1000u32)
        .map(|i| {
            let crop = if i % 2 == 0 { sensitive_corn() } else { pumpkin.clone() };
            CropEntry::new(crop, i % 37)
        })
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let crop = sensitive_corn();
    let env = sun_rain_wind("low", "high", "medium");

    c.bench_function("resolve_plant_yield", |b| {
        b.iter(|| resolve_plant_yield(black_box(&crop), black_box(Some(&env))))
    });
}

fn bench_report(c: &mut Criterion) {
    let farm = build_farm();
    let env = sun_rain_wind("low", "medium", "low");
    let mut group = c.benchmark_group("farm_report");

    for (label, model) in [
        ("compounded", YieldModel::default()),
        ("additive", YieldModel::new(FactorCombination::Additive)),
    ] {
        group.bench_function(label, |b| {
            b.iter(|| model.report(black_box(&farm), black_box(Some(&env))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_report);
criterion_main!(benches);
