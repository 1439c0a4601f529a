//! Result line printed after each run.

/// Probe test name for dot product results.
pub const PROBE_TEST: &str = "dotprod_test";

/// Format the naive result with seven decimal digits.
///
/// The line ends with a single space before the caller's newline.
pub fn format_naive_result(value: f32) -> String {
    format!("Naive dotprod = {:.7} ", value)
}
