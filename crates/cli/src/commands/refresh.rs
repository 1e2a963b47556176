//! Refresh command implementation.
//!
//! Responsibilities:
//! - Read a collected jobs file, gather the distinct datasource ids, and
//!   trigger a fresh extract refresh for each one.
//!
//! Invariants:
//! - Best-effort per-id policy: a datasource that cannot be looked up or
//!   refreshed is reported and the rest are still attempted.
//! - The ids spawned by the server are printed at the end so the new jobs
//!   can be tracked (or cancelled) by a later invocation.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use tabjobs_client::{JobRecord, datasource_ids};
use tabjobs_config::Config;

use super::{build_client, sign_out_best_effort};

/// Run the refresh command.
pub async fn run(config: Config, input: &Path) -> Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let records: Vec<JobRecord> = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", input.display()))?;

    let ids = datasource_ids(&records);
    if ids.is_empty() {
        println!(
            "No datasources to refresh: {} has no datasource ids",
            input.display()
        );
        return Ok(());
    }
    info!(datasources = ids.len(), "Triggering refreshes");

    let mut client = build_client(&config)?;
    client.sign_in().await.context("signing in")?;

    let mut spawned: Vec<(String, String)> = Vec::new();
    let mut failures = 0usize;
    for id in &ids {
        match refresh_one(&client, id).await {
            Ok(job_id) => spawned.push((id.clone(), job_id)),
            Err(e) => {
                failures += 1;
                eprintln!("Failed to refresh datasource {id}: {e:#}");
            }
        }
    }

    sign_out_best_effort(&mut client).await;

    println!("Triggered {} refresh jobs:", spawned.len());
    for (datasource_id, job_id) in &spawned {
        println!("  {datasource_id} -> job {job_id}");
    }

    if failures > 0 {
        bail!("{failures} of {} refreshes failed", ids.len());
    }
    Ok(())
}

async fn refresh_one(client: &tabjobs_client::TableauClient, id: &str) -> Result<String> {
    let datasource = client.datasource(id).await.context("looking up datasource")?;
    info!(
        datasource_id = %datasource.id,
        name = datasource.name.as_deref().unwrap_or("<unnamed>"),
        project = datasource.project.as_deref().unwrap_or("<no project>"),
        "Refreshing datasource"
    );
    let job_id = client
        .refresh_datasource(id)
        .await
        .context("triggering refresh")?;
    Ok(job_id)
}
