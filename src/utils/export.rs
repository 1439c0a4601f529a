//! CSV export of benchmark timings.

use std::io::Write;
use std::path::Path;

use super::timer::VariantResult;

/// Write one row per variant: `variant,compiler,input_size,avg_time_ns,result`.
pub fn write_csv<W: Write>(mut out: W, input_size: usize, results: &[VariantResult]) -> std::io::Result<()> {
    writeln!(out, "variant,compiler,input_size,avg_time_ns,result")?;

    for entry in results {
        let compiler = if entry.name.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };

        writeln!(
            out,
            "{},{},{},{:.1},{}",
            entry.name,
            compiler,
            input_size,
            entry.avg_nanos,
            entry.result_sample.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    out.flush()
}

/// Export timing data to a CSV file
pub fn export_csv(path: &Path, input_size: usize, results: &[VariantResult]) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(std::io::BufWriter::new(file), input_size, results)
}
