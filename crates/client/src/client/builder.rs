//! Client builder for constructing [`TableauClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (server URL, token credentials)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, TLS verification)
//!
//! # Invariants
//! - `server_url` and token credentials are required fields
//! - API version and page size default to the workspace constants and are
//!   carried as explicit client fields, never read from ambient state

use std::time::Duration;

use secrecy::SecretString;

use crate::auth::Credentials;
use crate::client::TableauClient;
use crate::error::{ClientError, Result};
use tabjobs_config::Config;
use tabjobs_config::constants::{
    API_VERSION, DEFAULT_MAX_REDIRECTS, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS,
};

/// Builder for creating a new [`TableauClient`].
pub struct TableauClientBuilder {
    server_url: Option<String>,
    token_name: Option<String>,
    token_secret: Option<SecretString>,
    site: String,
    skip_verify: bool,
    timeout: Duration,
    api_version: String,
    page_size: usize,
}

impl Default for TableauClientBuilder {
    fn default() -> Self {
        Self {
            server_url: None,
            token_name: None,
            token_secret: None,
            site: String::new(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            api_version: API_VERSION.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableauClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server base URL, e.g. `https://tableau.example.com`.
    /// Trailing slashes are removed.
    pub fn server_url(mut self, url: String) -> Self {
        self.server_url = Some(url);
        self
    }

    /// Set the personal access token credentials.
    pub fn token(mut self, name: String, secret: SecretString) -> Self {
        self.token_name = Some(name);
        self.token_secret = Some(secret);
        self
    }

    /// Set the site content URL. Defaults to the empty string, which signs
    /// in to the default site.
    pub fn site(mut self, site: String) -> Self {
        self.site = site;
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against servers with self-signed certificates in
    /// development environments.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the jobs listing page size. Default is 100.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Pre-configure the builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.server_url = Some(config.connection.server_url.clone());
        self.token_name = Some(config.auth.token_name.clone());
        self.token_secret = Some(config.auth.token_secret.clone());
        self.site = config.auth.site.clone();
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Build the [`TableauClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `server_url` was not provided,
    /// [`ClientError::AuthFailed`] if the token credentials are missing, and
    /// `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<TableauClient> {
        let base_url = self
            .server_url
            .ok_or_else(|| ClientError::InvalidUrl("server_url is required".to_string()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let (token_name, token_secret) = match (self.token_name, self.token_secret) {
            (Some(name), Some(secret)) => (name, secret),
            _ => {
                return Err(ClientError::AuthFailed(
                    "token name and secret are required".to_string(),
                ));
            }
        };

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                // skip_verify only affects TLS; plain HTTP has no certificate.
                tracing::warn!("skip_verify=true has no effect on HTTP URLs");
            }
        }

        let http = http_builder.build()?;

        Ok(TableauClient {
            http,
            base_url,
            api_version: self.api_version,
            page_size: self.page_size,
            credentials: Credentials {
                token_name,
                token_secret,
                site: self.site,
            },
            session: None,
        })
    }
}
