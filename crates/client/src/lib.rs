//! Tableau Server REST API client for the background-job subsystem.
//!
//! This crate provides a typed async client for collecting extract-refresh
//! background jobs from a Tableau server, enriching them with their
//! associated datasource/workbook identifiers, cancelling jobs, and
//! re-triggering datasource extract refreshes. Authentication uses personal
//! access tokens exchanged for a session token at sign-in.

mod auth;
pub mod client;
pub mod error;
pub mod models;
mod xml;

pub mod endpoints;

pub use auth::{Credentials, Session};
pub use client::TableauClient;
pub use client::builder::TableauClientBuilder;
pub use error::{ClientError, Result};
pub use models::{BackgroundJob, Datasource, JobEnrichment, JobRecord, datasource_ids};
