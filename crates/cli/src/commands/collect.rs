//! Collect command implementation.
//!
//! Responsibilities:
//! - Sign in, collect the enriched job listing for the window, and write it
//!   to disk as a pretty-printed JSON array.
//!
//! Does NOT handle:
//! - Pagination or enrichment details (see the client crate).
//!
//! Invariants:
//! - Collection is fail-fast: on any listing or enrichment error nothing is
//!   written and the existing output file is left untouched.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use tabjobs_config::Config;

use super::{build_client, sign_out_best_effort};

/// Run the collect command.
pub async fn run(config: Config, since: Option<NaiveDate>, output: &Path) -> Result<()> {
    let started = Instant::now();

    let mut client = build_client(&config)?;
    client.sign_in().await.context("signing in")?;

    let result = client.collect_jobs(since).await;
    sign_out_best_effort(&mut client).await;
    let records = result.context("collecting jobs")?;

    let json = serde_json::to_string_pretty(&records)?;
    std::fs::write(output, json)
        .with_context(|| format!("writing {}", output.display()))?;

    info!(
        count = records.len(),
        elapsed_secs = started.elapsed().as_secs_f64(),
        "Collection finished"
    );
    println!(
        "Collected {} jobs into {}",
        records.len(),
        output.display()
    );
    Ok(())
}
