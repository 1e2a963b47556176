//! Cancel command implementation.
//!
//! Responsibilities:
//! - Cancel a caller-supplied list of background jobs.
//!
//! Invariants:
//! - Best-effort per-id policy: each failure is reported and the remaining
//!   ids are still attempted. The command fails only after the whole list
//!   has been walked.
//! - Job ids come from arguments or a file, never from anywhere else.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use tabjobs_config::Config;

use super::{build_client, sign_out_best_effort};

/// Resolve the job id list from arguments or an ids file.
///
/// File format: one id per line; blank lines and `#` comments are skipped.
pub fn resolve_ids(ids: Vec<String>, ids_file: Option<&Path>) -> Result<Vec<String>> {
    let Some(path) = ids_file else {
        return Ok(ids);
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let ids: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();
    if ids.is_empty() {
        bail!("{} contains no job ids", path.display());
    }
    Ok(ids)
}

/// Run the cancel command.
pub async fn run(config: Config, ids: &[String]) -> Result<()> {
    let mut client = build_client(&config)?;
    client.sign_in().await.context("signing in")?;

    let mut failures = 0usize;
    for id in ids {
        match client.cancel_job(id).await {
            Ok(()) => println!("Cancelled job {id}"),
            Err(e) => {
                failures += 1;
                eprintln!("Failed to cancel job {id}: {e}");
            }
        }
    }

    sign_out_best_effort(&mut client).await;
    info!(
        attempted = ids.len(),
        failed = failures,
        "Cancellation finished"
    );

    if failures > 0 {
        bail!("{failures} of {} cancellations failed", ids.len());
    }
    Ok(())
}
