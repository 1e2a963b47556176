//! tabjobs - Tableau extract-refresh job automation.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute the collect / cancel / refresh workflows via the shared client
//!   library.
//!
//! Does NOT handle:
//! - REST API calls or response parsing (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` runs BEFORE CLI parsing so `.env` can provide values.
//! - Errors exit with structured codes so wrapping scripts can react.

mod args;
mod commands;
mod error;

use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use tabjobs_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    let loader = ConfigLoader::new();
    if let Err(e) = loader.load_dotenv() {
        eprintln!("Failed to load environment: {e}");
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match loader.from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = match commands::run(cli.command, config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{e:#}");
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
