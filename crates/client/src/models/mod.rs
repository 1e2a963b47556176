//! Data models for Tableau REST API resources.

pub mod datasources;
pub mod jobs;

pub use datasources::Datasource;
pub use jobs::{BackgroundJob, JobEnrichment, JobPage, JobRecord, datasource_ids};
