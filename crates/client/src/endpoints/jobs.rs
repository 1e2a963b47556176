//! Job endpoints: paginated listing, per-job detail, cancellation.

use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use tracing::{debug, info};

use crate::auth::Session;
use crate::endpoints::auth::AUTH_HEADER;
use crate::endpoints::send_request;
use crate::error::Result;
use crate::models::jobs::{parse_job_detail, parse_job_page};
use crate::models::{BackgroundJob, JobEnrichment};

/// List extract-refresh background jobs, de-paginated.
///
/// `GET /api/{version}/sites/{site}/jobs` with a fixed
/// `jobType:eq:refresh_extracts` filter, optionally narrowed to jobs
/// created on or after `since` (start of day, UTC). Page 1 reports the
/// total; the remaining pages are fetched sequentially in ascending order
/// and the elements accumulated in server order. Overlapping results caused
/// by server-side mutation during paging pass through undeduplicated.
///
/// # Errors
///
/// Any page fetch that does not return 200 fails the whole listing; no
/// partial results are returned.
pub async fn list_jobs(
    client: &Client,
    base_url: &str,
    api_version: &str,
    session: &Session,
    since: Option<NaiveDate>,
    page_size: usize,
) -> Result<Vec<BackgroundJob>> {
    let mut url = format!(
        "{}/api/{}/sites/{}/jobs?filter=jobType:eq:refresh_extracts",
        base_url, api_version, session.site_id
    );
    if let Some(date) = since {
        url.push_str(&format!(",createdAt:gte:{}T00:00:00z", date.format("%Y-%m-%d")));
    }

    let first = fetch_page(client, &url, session, page_size, 1).await?;
    let total_jobs = first.total_available;
    let max_page = total_jobs.div_ceil(page_size);
    info!(total_jobs, max_page, "Fetched first jobs page");

    let mut jobs = first.jobs;
    for page in 2..=max_page {
        debug!(page, "Fetching jobs page");
        jobs.extend(fetch_page(client, &url, session, page_size, page).await?.jobs);
    }

    Ok(jobs)
}

async fn fetch_page(
    client: &Client,
    filtered_url: &str,
    session: &Session,
    page_size: usize,
    page: usize,
) -> Result<crate::models::JobPage> {
    let paged_url = format!("{}&pageSize={}&pageNumber={}", filtered_url, page_size, page);
    let builder = client
        .get(&paged_url)
        .header(AUTH_HEADER, session.token.expose_secret());
    let response = send_request(builder, StatusCode::OK).await?;
    parse_job_page(&response.text().await?)
}

/// Fetch the single-job detail resource and extract the enrichment fields.
///
/// A detail payload with no job element fails with
/// [`crate::error::ClientError::JobNotFound`]; a job element without an
/// extract-refresh sub-element succeeds with all fields absent.
pub async fn get_job_detail(
    client: &Client,
    base_url: &str,
    api_version: &str,
    session: &Session,
    job_id: &str,
) -> Result<JobEnrichment> {
    let url = format!(
        "{}/api/{}/sites/{}/jobs/{}",
        base_url, api_version, session.site_id, job_id
    );
    let builder = client
        .get(&url)
        .header(AUTH_HEADER, session.token.expose_secret());
    let response = send_request(builder, StatusCode::OK).await?;
    parse_job_detail(&response.text().await?, job_id)
}

/// Cancel a background job.
///
/// `PUT /api/{version}/sites/{site}/jobs/{job_id}`, expected status 200.
pub async fn cancel_job(
    client: &Client,
    base_url: &str,
    api_version: &str,
    session: &Session,
    job_id: &str,
) -> Result<()> {
    debug!(job_id, "Cancelling job");

    let url = format!(
        "{}/api/{}/sites/{}/jobs/{}",
        base_url, api_version, session.site_id, job_id
    );
    let builder = client
        .put(&url)
        .header(AUTH_HEADER, session.token.expose_secret());
    send_request(builder, StatusCode::OK).await?;
    Ok(())
}
