//! CLI command implementations.

pub mod cancel;
pub mod collect;
pub mod refresh;

use anyhow::Result;
use chrono::{Days, NaiveDate, Utc};
use tabjobs_client::TableauClient;
use tabjobs_config::Config;

use crate::args::Commands;

/// Dispatch a parsed subcommand.
pub async fn run(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Collect {
            since,
            days_ago,
            output,
        } => {
            let since = resolve_since(since, days_ago);
            collect::run(config, since, &output).await
        }
        Commands::Cancel { ids, ids_file } => {
            let ids = cancel::resolve_ids(ids, ids_file.as_deref())?;
            cancel::run(config, &ids).await
        }
        Commands::Refresh { input } => refresh::run(config, &input).await,
    }
}

pub fn build_client(config: &Config) -> Result<TableauClient> {
    Ok(TableauClient::builder().from_config(config).build()?)
}

/// Turn the two mutually exclusive date flags into one window start.
fn resolve_since(since: Option<NaiveDate>, days_ago: Option<u32>) -> Option<NaiveDate> {
    since.or_else(|| days_ago.map(|days| Utc::now().date_naive() - Days::new(u64::from(days))))
}

/// Sign out without failing the command; the work is already done and the
/// server expires abandoned sessions on its own.
async fn sign_out_best_effort(client: &mut TableauClient) {
    if let Err(e) = client.sign_out().await {
        tracing::warn!("Sign-out failed: {e}");
    }
}
