//! Timing system for variant comparison.
//!
//! - Warmup of every variant before measuring
//! - Randomized execution order to avoid ordering bias
//! - Statistics over the raw samples of each variant

use std::hint::black_box;
use std::time::Duration;

use tracing::debug;

use super::bench::{compute_stats, to_nanos, Measurement};
use crate::inputs::InputSource;

/// Configuration for timing measurements
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 30)
    pub runs_per_variant: usize,
    /// Number of warmup calls before measurement (default: 10)
    pub warmup_iterations: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
        }
    }
}

/// A variant to be measured
pub struct Variant<'a> {
    /// Unique name of the variant
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Runs one call and returns (measurement, result value).
    /// Timing happens inside the closure to eliminate Fn trait overhead.
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

/// Result from measuring a single variant
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    /// Precise average in nanoseconds
    pub avg_nanos: f64,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    /// Standard deviation in nanoseconds
    pub std_dev_nanos: f64,
    /// Number of timed samples
    pub runs: usize,
    /// Last result value returned by the variant
    pub result_sample: Option<f64>,
}

impl VariantResult {
    /// Coefficient of variation of the timings.
    pub fn cv(&self) -> f64 {
        if self.avg_nanos > 0.0 {
            self.std_dev_nanos / self.avg_nanos
        } else {
            0.0
        }
    }
}

/// Measure multiple variants with randomized execution order.
///
/// 1. Warms up all variants
/// 2. Shuffles a schedule of `(variant, sample)` tasks with `schedule_rng`
/// 3. Runs each task once
/// 4. Returns results in the order the variants were given
pub fn measure_variants(
    mut variants: Vec<Variant>,
    config: &TimingConfig,
    schedule_rng: &mut InputSource,
) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    let mut tasks: Vec<(usize, usize)> = (0..variants.len())
        .flat_map(|v| (0..samples).map(move |s| (v, s)))
        .collect();
    schedule_rng.shuffle(&mut tasks);
    debug!(
        variants = variants.len(),
        tasks = tasks.len(),
        seed = schedule_rng.seed(),
        "measuring variants"
    );

    let mut measurements: Vec<Vec<Measurement>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    for (variant_idx, _) in tasks {
        let (elapsed, result) = (variants[variant_idx].run)();
        measurements[variant_idx].push(elapsed);
        result_samples[variant_idx] = result;
    }

    variants
        .into_iter()
        .enumerate()
        .map(|(idx, variant)| {
            let times = std::mem::take(&mut measurements[idx]);
            compute_variant_result(variant.name, variant.description, &times, result_samples[idx])
        })
        .collect()
}

fn compute_variant_result(
    name: &'static str,
    description: &'static str,
    measurements: &[Measurement],
    result_sample: Option<f64>,
) -> VariantResult {
    let nanos: Vec<u64> = measurements.iter().map(|m| to_nanos(*m)).collect();
    let stats = compute_stats(&nanos);

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_nanos: stats.mean,
        median_time: Duration::from_nanos(stats.median),
        min_time: Duration::from_nanos(stats.min),
        max_time: Duration::from_nanos(stats.max),
        std_dev_nanos: stats.std_dev,
        runs: measurements.len(),
        result_sample: if measurements.is_empty() {
            None
        } else {
            result_sample
        },
    }
}
