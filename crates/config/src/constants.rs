//! Centralized constants for the tabjobs workspace.
//!
//! Values that are fixed across the workspace are collected here so that
//! every crate reads them from one place instead of redefining magic
//! numbers.

/// Tableau REST API version used for every endpoint path.
pub const API_VERSION: &str = "3.8";

/// Page size for the paginated jobs listing.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default path of the persisted job-listing artifact.
pub const DEFAULT_JOBS_FILE: &str = "jobs_data.json";
