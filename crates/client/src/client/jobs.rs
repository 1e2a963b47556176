//! Job collection and cancellation methods for [`TableauClient`].
//!
//! # What this module handles:
//! - De-paginated listing of extract-refresh background jobs
//! - Per-job enrichment with datasource/workbook/notes
//! - The collect orchestration merging the two
//! - Cancelling a job by id
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls and pagination arithmetic (in
//!   [`crate::endpoints::jobs`])
//! - Best-effort iteration over many ids (a caller policy; see the CLI)
//!
//! # Invariants
//! - Collection is fail-fast: the first listing or enrichment error aborts
//!   the whole batch and no partial result is returned.
//! - Output order matches server-reported listing order, one record per
//!   listed job.

use chrono::NaiveDate;
use tracing::debug;

use crate::client::TableauClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{BackgroundJob, JobEnrichment, JobRecord};

impl TableauClient {
    /// List extract-refresh background jobs, optionally restricted to jobs
    /// created on or after `since` (start of day, UTC).
    pub async fn list_jobs(&self, since: Option<NaiveDate>) -> Result<Vec<BackgroundJob>> {
        endpoints::list_jobs(
            &self.http,
            &self.base_url,
            &self.api_version,
            self.session()?,
            since,
            self.page_size,
        )
        .await
    }

    /// Resolve the datasource/workbook/notes enrichment for a single job.
    pub async fn enrich_job(&self, job_id: &str) -> Result<JobEnrichment> {
        endpoints::get_job_detail(
            &self.http,
            &self.base_url,
            &self.api_version,
            self.session()?,
            job_id,
        )
        .await
    }

    /// Collect the complete, enriched job listing for the window.
    ///
    /// Lists all matching jobs, then enriches each one in listing order.
    /// Fail-fast: a single unresolvable job id aborts the whole batch.
    pub async fn collect_jobs(&self, since: Option<NaiveDate>) -> Result<Vec<JobRecord>> {
        let raw_jobs = self.list_jobs(since).await?;

        let mut records = Vec::with_capacity(raw_jobs.len());
        for job in raw_jobs {
            debug!(job_id = %job.id, "Enriching job");
            let enrichment = self.enrich_job(&job.id).await?;
            records.push(JobRecord::from_parts(job, enrichment));
        }
        Ok(records)
    }

    /// Cancel a background job by id.
    pub async fn cancel_job(&self, job_id: &str) -> Result<()> {
        endpoints::cancel_job(
            &self.http,
            &self.base_url,
            &self.api_version,
            self.session()?,
            job_id,
        )
        .await
    }
}
