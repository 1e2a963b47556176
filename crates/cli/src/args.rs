//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse dates and paths for the three subcommands.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not load configuration (see `tabjobs-config`).

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tabjobs_config::constants::DEFAULT_JOBS_FILE;

#[derive(Parser)]
#[command(name = "tabjobs")]
#[command(about = "Tableau extract-refresh job automation", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  tabjobs collect --since 2024-03-01\n  tabjobs collect --days-ago 7 --output march_jobs.json\n  tabjobs cancel 6e3f4a21-... 9b2c1d80-...\n  tabjobs cancel --ids-file cancel_ids.txt\n  tabjobs refresh --input march_jobs.json\n"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collect extract-refresh background jobs into a JSON file
    Collect {
        /// Only include jobs created on or after this date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE", value_parser = parse_date, conflicts_with = "days_ago")]
        since: Option<NaiveDate>,

        /// Only include jobs created in the last N days
        #[arg(long, value_name = "N")]
        days_ago: Option<u32>,

        /// File to write the collected jobs to
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_JOBS_FILE)]
        output: PathBuf,
    },

    /// Cancel background jobs by id
    Cancel {
        /// Job ids to cancel
        #[arg(value_name = "JOB_ID", required_unless_present = "ids_file")]
        ids: Vec<String>,

        /// Read job ids from a file, one per line
        #[arg(long, value_name = "FILE", conflicts_with = "ids")]
        ids_file: Option<PathBuf>,
    },

    /// Re-trigger extract refreshes for every datasource in a collected jobs file
    Refresh {
        /// Jobs file to read datasource ids from
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_JOBS_FILE)]
        input: PathBuf,
    },
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("'{value}' is not a date in YYYY-MM-DD form"))
}
