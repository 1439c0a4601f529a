//! Benchmark closures for dot product variants.

use std::hint::black_box;

use super::code::available_variants;
use crate::inputs::InputSource;
use crate::utils::bench::{elapsed, now};
use crate::utils::timer::{measure_variants, TimingConfig, Variant, VariantResult};

/// One timed closure per available variant, borrowing the inputs.
pub fn variant_closures<'a>(x: &'a [f32], y: &'a [f32]) -> Vec<Variant<'a>> {
    available_variants()
        .into_iter()
        .map(|v| {
            let func = v.function;
            Variant {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let start = now();
                    let result = black_box(func(black_box(x), black_box(y)));
                    let time = elapsed(start);
                    (time, result.ok().map(f64::from))
                }),
            }
        })
        .collect()
}

/// Time all available variants on the given inputs.
pub fn run_all_benchmarks(
    x: &[f32],
    y: &[f32],
    config: &TimingConfig,
    schedule_rng: &mut InputSource,
) -> Vec<VariantResult> {
    measure_variants(variant_closures(x, y), config, schedule_rng)
}
