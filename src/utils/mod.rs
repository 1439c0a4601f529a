//! Utility modules for benchmarking and execution.

pub mod bench;
pub mod export;
pub mod timer;
pub mod tui;

pub use bench::{compute_stats, time_seed, to_nanos};
pub use timer::{measure_variants, TimingConfig, Variant, VariantResult};

/// C compiler name detected at build time
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");

/// Information about an implementation variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "naive", "c-naive")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}
