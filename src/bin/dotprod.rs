//! Naive dot product benchmark.
//!
//! Usage:
//!   dotprod                    # Naive dot product of two seeded 4096-element vectors
//!   dotprod --probes out.csv   # Also dump probes
//!   dotprod --bench            # Verify and time every variant
//!   dotprod --list             # List available variants
//!   dotprod --help             # Show help

use std::env;
use std::io;
use std::process::ExitCode;

use naive_dotprod::config::{self, Command};
use naive_dotprod::logging::init_logging;
use naive_dotprod::math::dot_product::available_variants;
use naive_dotprod::utils::tui;
use tracing::error;

fn main() -> ExitCode {
    init_logging();

    let command = match config::parse_args(env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run with --help for usage.");
            return ExitCode::FAILURE;
        }
    };

    let config = match command {
        Command::Help => {
            config::print_help();
            return ExitCode::SUCCESS;
        }
        Command::List => {
            tui::print_available_variants(&available_variants());
            return ExitCode::SUCCESS;
        }
        Command::Run(config) => config,
    };

    if config.bench {
        tui::print_header();
    }

    let stdout = io::stdout();
    match naive_dotprod::run(&config, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "run failed");
            ExitCode::FAILURE
        }
    }
}
