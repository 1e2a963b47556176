//! REST API endpoint implementations.

mod auth;
mod datasources;
mod jobs;
mod request;

pub use auth::{sign_in, sign_out};
pub use datasources::{get_datasource, refresh_datasource};
pub use jobs::{cancel_job, get_job_detail, list_jobs};
pub use request::send_request;
