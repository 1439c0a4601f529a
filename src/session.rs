//! One benchmark run, from input generation to probe dump.

use std::fs::File;
use std::io::{BufWriter, Write};

use tracing::{debug, info, warn};

use crate::config::{ProbeOutput, RunConfig};
use crate::error::{Error, Result};
use crate::inputs::InputSource;
use crate::math::dot_product::{self, bench, naive_dot_product, REFERENCE_VARIANT};
use crate::probe::Probes;
use crate::report::{format_naive_result, PROBE_TEST};
use crate::utils::{export, tui, VariantResult};

/// What a run produced.
#[derive(Debug)]
pub struct RunSummary {
    /// The naive dot product of the seeded inputs
    pub naive: f32,
    /// Timing results, when the run was asked to benchmark
    pub bench: Vec<VariantResult>,
    /// Probes left undumped (none when a probe output was configured)
    pub probes: Probes,
}

/// Execute a run, writing the report line (and a stdout probe dump) to `out`.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<RunSummary> {
    let mut inputs = InputSource::seeded(config.seed);
    let (x, y) = inputs.vector_pair(config.size)?;
    // Anything random from here on is unrelated to the inputs.
    let mut schedule_rng = InputSource::from_time();

    let mut probes = Probes::new();

    let naive = naive_dot_product(&x, &y, config.size)?;
    writeln!(out, "{}", format_naive_result(naive))?;
    probes.record(PROBE_TEST, REFERENCE_VARIANT, naive)?;
    info!(size = config.size, seed = config.seed, naive, "naive dot product computed");

    let mut bench_results = Vec::new();
    if config.bench {
        dot_product::verify(&x, &y).map_err(Error::Verification)?;

        for variant in dot_product::evaluate_variants(&x, &y)? {
            if variant.name != REFERENCE_VARIANT {
                probes.record(PROBE_TEST, variant.name, variant.value)?;
            }
        }

        bench_results = bench::run_all_benchmarks(&x, &y, &config.timing, &mut schedule_rng);
        tui::sort_variants(&mut bench_results);
        tui::print_results_table(&bench_results, config.size);

        if let Some(path) = &config.csv_path {
            match export::export_csv(path, config.size, &bench_results) {
                Ok(()) => info!(path = %path.display(), "raw timings exported"),
                Err(e) => warn!(path = %path.display(), error = %e, "failed to export CSV"),
            }
        }
    }

    match &config.probes {
        Some(ProbeOutput::Stdout) => {
            probes.dump(&mut *out)?;
        }
        Some(ProbeOutput::File(path)) => {
            let count = probes.dump(BufWriter::new(File::create(path)?))?;
            info!(path = %path.display(), count, "probes written");
        }
        None => {
            if !probes.is_empty() {
                debug!(count = probes.len(), "probes recorded but not dumped");
            }
        }
    }

    Ok(RunSummary {
        naive,
        bench: bench_results,
        probes,
    })
}
