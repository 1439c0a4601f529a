//! Shared benchmark utilities.
//!
//! Measurements use wall-clock time via [`std::time::Instant`].

use std::time::{Duration, Instant};

/// Raw measurement of one timed call.
pub type Measurement = Duration;

/// Read the current instant.
#[inline(always)]
pub fn now() -> Instant {
    Instant::now()
}

/// Measurement elapsed since `start`.
#[inline(always)]
pub fn elapsed(start: Instant) -> Measurement {
    start.elapsed()
}

/// Convert measurement to nanoseconds for display and statistics.
pub fn to_nanos(m: Measurement) -> u64 {
    m.as_nanos() as u64
}

/// Time a single expression, returning `(elapsed, value)`.
///
/// The value goes through [`std::hint::black_box`] so the computation is not
/// optimized away.
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        let start = $crate::utils::bench::now();
        let value = ::std::hint::black_box($e);
        let elapsed = $crate::utils::bench::elapsed(start);
        (elapsed, value)
    }};
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Summary statistics over a set of nanosecond samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Stats {
    pub mean: f64,
    pub median: u64,
    pub min: u64,
    pub max: u64,
    /// Sample standard deviation (n - 1 denominator).
    pub std_dev: f64,
}

/// Compute timing statistics from nanosecond samples.
pub fn compute_stats(nanos: &[u64]) -> Stats {
    if nanos.is_empty() {
        return Stats::default();
    }

    let mut sorted = nanos.to_vec();
    sorted.sort_unstable();

    let sum: u64 = nanos.iter().sum();
    let mean = sum as f64 / nanos.len() as f64;

    let variance = if nanos.len() < 2 {
        0.0
    } else {
        nanos
            .iter()
            .map(|&n| {
                let diff = n as f64 - mean;
                diff * diff
            })
            .sum::<f64>()
            / (nanos.len() - 1) as f64
    };

    Stats {
        mean,
        median: sorted[sorted.len() / 2],
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        std_dev: variance.sqrt(),
    }
}

/// Format a nanosecond value with an adaptive unit.
pub fn format_nanos(nanos: f64) -> String {
    if nanos >= 1_000_000.0 {
        format!("{:.2} ms", nanos / 1_000_000.0)
    } else if nanos >= 1_000.0 {
        format!("{:.2} µs", nanos / 1_000.0)
    } else {
        format!("{:.0} ns", nanos)
    }
}
