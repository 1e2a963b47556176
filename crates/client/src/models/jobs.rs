//! Background-job models and XML response parsing.
//!
//! # What this module handles:
//! - Parsing the paginated jobs listing (`<backgroundJob>` elements plus
//!   `<pagination totalAvailable=..>`)
//! - Parsing the single-job detail payload into enrichment fields
//! - The flattened [`JobRecord`] shape persisted as the JSON hand-off
//!   artifact
//!
//! # What this module does NOT handle:
//! - Issuing HTTP requests (see [`crate::endpoints::jobs`])
//! - Pagination arithmetic (see the endpoint; this module parses one page)
//!
//! # Invariants
//! - Jobs are returned in document order; nothing here reorders or dedupes.
//! - A detail payload with no `<job>` element is a [`ClientError::JobNotFound`],
//!   while a `<job>` without an `<extractRefreshJob>` child is a success with
//!   all enrichment fields absent. The two cases must never be conflated.

use std::collections::BTreeSet;

use roxmltree::Document;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::xml;

/// One raw job element from the paginated listing.
///
/// All attribute values are server-reported strings passed through
/// verbatim; nothing is validated against a closed set. Only the id is
/// required; any other attribute the server omits stays `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundJob {
    pub id: String,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub started_at: Option<String>,
    pub ended_at: Option<String>,
    pub priority: Option<String>,
    pub job_type: Option<String>,
}

/// Enrichment fields resolved from the single-job detail payload.
///
/// Each field is independently optional: a refresh job may reference a
/// datasource, a workbook, neither, or both, and may or may not carry notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobEnrichment {
    pub datasource_id: Option<String>,
    pub workbook_id: Option<String>,
    pub notes: Option<String>,
}

/// One page of the jobs listing.
#[derive(Debug, Clone)]
pub struct JobPage {
    /// Total jobs available across all pages, from the pagination element.
    pub total_available: usize,
    /// Jobs on this page, in server-reported order.
    pub jobs: Vec<BackgroundJob>,
}

/// Flattened, enriched job record, the persisted JSON artifact shape.
///
/// Key names are stable: a separate process reads `datasource_rest_id`
/// values out of the serialized array to re-trigger refreshes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "job_rest_id")]
    pub job_id: String,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub started_at: Option<String>,
    pub ended_at: Option<String>,
    pub priority: Option<String>,
    pub job_type: Option<String>,
    #[serde(rename = "datasource_rest_id")]
    pub datasource_id: Option<String>,
    #[serde(rename = "workbook_rest_id")]
    pub workbook_id: Option<String>,
    pub notes: Option<String>,
}

impl JobRecord {
    /// Merge a raw listing job with its detail enrichment.
    pub fn from_parts(job: BackgroundJob, enrichment: JobEnrichment) -> Self {
        Self {
            job_id: job.id,
            status: job.status,
            created_at: job.created_at,
            started_at: job.started_at,
            ended_at: job.ended_at,
            priority: job.priority,
            job_type: job.job_type,
            datasource_id: enrichment.datasource_id,
            workbook_id: enrichment.workbook_id,
            notes: enrichment.notes,
        }
    }
}

/// Distinct non-null datasource ids across a set of records.
///
/// This is the id set the refresh action operates on.
pub fn datasource_ids(records: &[JobRecord]) -> BTreeSet<String> {
    records
        .iter()
        .filter_map(|r| r.datasource_id.clone())
        .collect()
}

/// Parse one page of the jobs listing response.
///
/// # Errors
///
/// Returns [`ClientError::InvalidResponse`] if the document does not parse,
/// lacks a pagination element, or contains a job element without an id.
pub fn parse_job_page(body: &str) -> Result<JobPage> {
    let doc = Document::parse(body)
        .map_err(|e| ClientError::InvalidResponse(format!("jobs listing is not XML: {e}")))?;
    let root = doc.root_element();

    let pagination = xml::find_descendant(root, "pagination").ok_or_else(|| {
        ClientError::InvalidResponse("jobs listing has no pagination element".to_string())
    })?;
    let total_available = pagination
        .attribute("totalAvailable")
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| {
            ClientError::InvalidResponse(
                "pagination element has no numeric totalAvailable".to_string(),
            )
        })?;

    let jobs = xml::find_descendants(root, "backgroundJob")
        .map(|node| {
            let id = xml::attr(node, "id").ok_or_else(|| {
                ClientError::InvalidResponse("backgroundJob element has no id".to_string())
            })?;
            Ok(BackgroundJob {
                id,
                status: xml::attr(node, "status"),
                created_at: xml::attr(node, "createdAt"),
                started_at: xml::attr(node, "startedAt"),
                ended_at: xml::attr(node, "endedAt"),
                priority: xml::attr(node, "priority"),
                job_type: xml::attr(node, "jobType"),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(JobPage {
        total_available,
        jobs,
    })
}

/// Parse the single-job detail response into enrichment fields.
///
/// A missing `<job>` element means the server has no record of this job id
/// and fails the call. A `<job>` without an `<extractRefreshJob>` child is
/// a non-refresh job: all three fields come back absent, which is success.
pub fn parse_job_detail(body: &str, job_id: &str) -> Result<JobEnrichment> {
    let doc = Document::parse(body)
        .map_err(|e| ClientError::InvalidResponse(format!("job detail is not XML: {e}")))?;

    let job = xml::find_descendant(doc.root_element(), "job").ok_or_else(|| {
        ClientError::JobNotFound {
            job_id: job_id.to_string(),
        }
    })?;

    let Some(refresh) = xml::find_descendant(job, "extractRefreshJob") else {
        return Ok(JobEnrichment::default());
    };

    Ok(JobEnrichment {
        datasource_id: xml::find_descendant(refresh, "datasource").and_then(|n| xml::attr(n, "id")),
        workbook_id: xml::find_descendant(refresh, "workbook").and_then(|n| xml::attr(n, "id")),
        notes: xml::find_descendant(job, "notes").and_then(xml::text),
    })
}

/// Extract the id of the job spawned by a datasource refresh request.
pub fn parse_refresh_job_id(body: &str) -> Result<String> {
    let doc = Document::parse(body)
        .map_err(|e| ClientError::InvalidResponse(format!("refresh response is not XML: {e}")))?;
    xml::find_descendant(doc.root_element(), "job")
        .and_then(|n| xml::attr(n, "id"))
        .ok_or_else(|| {
            ClientError::InvalidResponse("refresh response has no job element".to_string())
        })
}
