//! Run configuration and command-line parsing.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::inputs::{DEFAULT_SEED, DEFAULT_SIZE};
use crate::logging::DEFAULT_FILTER;
use crate::utils::TimingConfig;

/// Largest vector length whose allocation fits in `isize::MAX` bytes.
pub const MAX_SIZE: usize = isize::MAX as usize / std::mem::size_of::<f32>();

/// Where to write the probe dump.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeOutput {
    Stdout,
    File(PathBuf),
}

/// Settings for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Vector length
    pub size: usize,
    /// Seed for input generation
    pub seed: u64,
    /// Probe dump destination; probes are not dumped when `None`
    pub probes: Option<ProbeOutput>,
    /// Time every variant after the naive run
    pub bench: bool,
    pub timing: TimingConfig,
    /// Export bench timings as CSV
    pub csv_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: DEFAULT_SEED,
            probes: None,
            bench: false,
            timing: TimingConfig::default(),
            csv_path: None,
        }
    }
}

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Run(RunConfig),
    List,
    Help,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = RunConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--list" | "-l" => return Ok(Command::List),
            "--bench" => config.bench = true,
            "--size" | "-n" => {
                let size: usize = parse_value(&mut args, "--size")?;
                if size > MAX_SIZE {
                    return Err(ConfigError::InvalidValue {
                        flag: "--size",
                        value: size.to_string(),
                    });
                }
                config.size = size;
            }
            "--seed" => config.seed = parse_value(&mut args, "--seed")?,
            "--runs" => {
                let runs: usize = parse_value(&mut args, "--runs")?;
                if runs == 0 {
                    return Err(ConfigError::InvalidValue {
                        flag: "--runs",
                        value: runs.to_string(),
                    });
                }
                config.timing.runs_per_variant = runs;
            }
            "--warmup" => config.timing.warmup_iterations = parse_value(&mut args, "--warmup")?,
            "--probes" => {
                let target = next_value(&mut args, "--probes")?;
                config.probes = Some(if target == "-" {
                    ProbeOutput::Stdout
                } else {
                    ProbeOutput::File(PathBuf::from(target))
                });
            }
            "--csv" => config.csv_path = Some(PathBuf::from(next_value(&mut args, "--csv")?)),
            other => return Err(ConfigError::UnknownFlag(other.to_string())),
        }
    }

    Ok(Command::Run(config))
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, ConfigError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(ConfigError::MissingValue(flag))
}

fn parse_value<I, T>(args: &mut I, flag: &'static str) -> Result<T, ConfigError>
where
    I: Iterator<Item = String>,
    T: std::str::FromStr,
{
    let value = next_value(args, flag)?;
    match value.trim().parse() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(ConfigError::InvalidValue { flag, value }),
    }
}

/// Usage text printed by `--help`.
pub fn help_text() -> String {
    format!(
        "Usage: dotprod [OPTIONS]

Options:
  --size N, -n N   Vector length (default: {size})
  --seed S         Seed for input generation (default: {seed})
  --probes PATH    Dump probes as CSV to PATH ('-' for stdout)
  --bench          Time every variant and print a results table
  --runs R         Timed samples per variant (default: 30)
  --warmup W       Warmup calls per variant (default: 10)
  --csv PATH       Export bench timings to CSV
  --list, -l       List available variants
  --help, -h       Show this help message

Environment:
  RUST_LOG         Log filter (default: {filter})

Examples:
  dotprod                        # Naive dot product of two 4096-element vectors
  dotprod --probes -             # Also dump probes to stdout
  dotprod --bench --runs 100     # Compare variants
  dotprod --bench --csv out.csv  # Export raw timings to CSV",
        size = DEFAULT_SIZE,
        seed = DEFAULT_SEED,
        filter = DEFAULT_FILTER,
    )
}

/// Print the help message
pub fn print_help() {
    println!("{}", help_text());
}
