//! Main Tableau REST API client and API methods.
//!
//! This module provides the primary [`TableauClient`] for interacting with
//! the Tableau Server REST API job subsystem.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Sign-in/sign-out methods (private module)
//! - `jobs`: Job listing, collection, and cancellation methods
//! - `datasources`: Datasource lookup and refresh methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Response parsing (delegated to [`crate::models`])
//!
//! # Invariants
//! - API version and page size are explicit fields set at construction;
//!   there is no ambient or module-level state.
//! - Every job/datasource method requires a signed-in session and fails
//!   with [`ClientError::NotSignedIn`] otherwise; there is no implicit
//!   re-authentication.

pub mod builder;
mod session;

// API method submodules
mod datasources;
mod jobs;

use crate::auth::{Credentials, Session};
use crate::error::{ClientError, Result};

/// Tableau Server REST API client.
///
/// # Creating a Client
///
/// Use [`TableauClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use tabjobs_client::TableauClient;
/// use secrecy::SecretString;
///
/// let mut client = TableauClient::builder()
///     .server_url("https://tableau.example.com".to_string())
///     .token("automation".to_string(), SecretString::new("secret".to_string().into()))
///     .site("analytics".to_string())
///     .build()?;
/// client.sign_in().await?;
/// ```
#[derive(Debug)]
pub struct TableauClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_version: String,
    pub(crate) page_size: usize,
    pub(crate) credentials: Credentials,
    pub(crate) session: Option<Session>,
}

impl TableauClient {
    /// Create a new client builder.
    pub fn builder() -> builder::TableauClientBuilder {
        builder::TableauClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether the client currently holds a session.
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// The current session, or [`ClientError::NotSignedIn`].
    pub(crate) fn session(&self) -> Result<&Session> {
        self.session.as_ref().ok_or(ClientError::NotSignedIn)
    }
}
