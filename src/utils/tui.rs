//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use terminal_size::{terminal_size, Width};

use super::bench::format_nanos;
use super::timer::VariantResult;
use super::VariantInfo;
use crate::math::dot_product::{DotProductFn, REFERENCE_VARIANT};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Sorting key: reference first, then Rust variants, then C variants.
fn variant_sort_key(result: &VariantResult) -> (u8, String) {
    let name = result.name.to_lowercase();
    if name == REFERENCE_VARIANT {
        (0, String::new())
    } else if name.starts_with("c-") {
        (2, name)
    } else {
        (1, name)
    }
}

/// Sort variants: reference first, then grouped by language
pub fn sort_variants(results: &mut [VariantResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Relative difference of `value` against `baseline`; absolute when the
/// baseline is zero.
pub fn relative_error(value: f64, baseline: f64) -> f64 {
    let diff = (value - baseline).abs();
    if baseline.abs() > 1e-9 {
        diff / baseline.abs()
    } else {
        diff
    }
}

fn display_name(name: &str) -> String {
    if name.starts_with("c-") {
        match crate::utils::C_COMPILER_NAME {
            Some(c) => format!("{} ({})", name, c),
            None => name.to_string(),
        }
    } else {
        name.to_string()
    }
}

// 11+11+11+9+8+16+11 columns + 7 separators + 2 indent
const FIXED_COLUMNS_WIDTH: usize = 86;

/// Width of the variant column: the space the terminal leaves, but never
/// narrower than the longest display name.
fn variant_column_width(results: &[VariantResult], term_width: usize) -> usize {
    let longest = results
        .iter()
        .map(|r| display_name(&r.name).chars().count())
        .max()
        .unwrap_or(0);
    term_width
        .saturating_sub(FIXED_COLUMNS_WIDTH)
        .max(12)
        .max(longest)
}

/// Print the results table for one input size.
///
/// The first row is the baseline for speedup and relative error, so call
/// [`sort_variants`] first.
pub fn print_results_table(results: &[VariantResult], size: usize) {
    if results.is_empty() {
        return;
    }

    let variant_col_width = variant_column_width(results, get_term_width());
    let table_width = variant_col_width + FIXED_COLUMNS_WIDTH - 2;

    let baseline = &results[0];
    let runs = baseline.runs;

    println!("  Size: {} ({} runs)", size, runs);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>11} {:>11} {:>11} {:>9} {:>8} {:>16} {:>11}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Result",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let speedup = if result.avg_nanos > 0.0 {
            baseline.avg_nanos / result.avg_nanos
        } else {
            0.0
        };

        let (value_str, rel_str) = match (result.result_sample, baseline.result_sample) {
            (Some(value), Some(base)) => (
                format!("{:.7}", value),
                format!("{:.2e}", relative_error(value, base)),
            ),
            (Some(value), None) => (format!("{:.7}", value), "-".to_string()),
            _ => ("-".to_string(), "-".to_string()),
        };

        println!(
            "  {:<v_width$} {:>11} {:>11} {:>11} {:>8.2}x {:>7.2}% {:>16} {:>11}",
            truncate(&display_name(&result.name), variant_col_width),
            format_nanos(result.avg_nanos),
            format_nanos(result.min_time.as_nanos() as f64),
            format_nanos(result.max_time.as_nanos() as f64),
            speedup,
            result.cv() * 100.0,
            value_str,
            rel_str,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Naive Dot Product Benchmark ";
    let padding = term_width.saturating_sub(title.len()) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the list of available variants
pub fn print_available_variants(variants: &[VariantInfo<DotProductFn>]) {
    println!("Available variants:");
    println!();
    for variant in variants {
        println!(
            "  {:<20} - {}",
            display_name(variant.name),
            variant.description
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn result(name: &str) -> VariantResult {
        VariantResult {
            name: name.to_string(),
            description: String::new(),
            avg_nanos: 1.0,
            median_time: Duration::ZERO,
            min_time: Duration::ZERO,
            max_time: Duration::ZERO,
            std_dev_nanos: 0.0,
            runs: 1,
            result_sample: None,
        }
    }

    #[test]
    fn test_sort_reference_first() {
        let mut results = vec![result("c-naive"), result("iter-fold"), result("naive")];
        sort_variants(&mut results);
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["naive", "iter-fold", "c-naive"]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("naive", 10), "naive");
        assert_eq!(truncate("a-very-long-variant", 8), "a-ver...");
    }

    #[test]
    fn test_variant_column_fits_longest_name() {
        let results = vec![result("naive"), result("a-variant-with-a-long-name")];
        // Narrow or non-terminal output: never truncate a name.
        assert_eq!(variant_column_width(&results, 80), 26);

        let compiled = vec![result("c-naive")];
        let name = display_name("c-naive");
        let width = variant_column_width(&compiled, 40);
        assert!(width >= name.chars().count());
        assert_eq!(truncate(&name, width), name);

        // Wide terminals give the column the spare room.
        assert_eq!(variant_column_width(&results, 200), 200 - FIXED_COLUMNS_WIDTH);
    }

    #[test]
    fn test_relative_error() {
        assert_eq!(relative_error(32.0, 32.0), 0.0);
        assert!((relative_error(33.0, 32.0) - 1.0 / 32.0).abs() < 1e-12);
        assert_eq!(relative_error(0.5, 0.0), 0.5);
    }
}
