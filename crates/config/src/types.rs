//! Configuration types for the tabjobs workspace.
//!
//! Responsibilities:
//! - Define connection settings (server URL, TLS verification, timeout).
//! - Define authentication settings (personal access token name/secret, site).
//! - Combine both into the main `Config` structure.
//!
//! Does NOT handle:
//! - Loading from env/.env (see `loader`).
//! - Network connections (see the client crate).
//!
//! Invariants:
//! - The token secret is held in a `SecretString` and never appears in
//!   `Debug` output.
//! - `site` is the site content URL; the empty string addresses the default
//!   site, matching the REST API's sign-in contract.

use std::time::Duration;

use secrecy::SecretString;

use crate::constants::DEFAULT_TIMEOUT_SECS;

/// Connection configuration for a Tableau server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the server (e.g., `https://tableau.example.com`).
    pub server_url: String,
    /// Whether to skip TLS verification (for self-signed certificates).
    pub skip_verify: bool,
    /// HTTP request timeout.
    pub timeout: Duration,
}

/// Authentication configuration: a personal access token scoped to a site.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Name of the personal access token.
    pub token_name: String,
    /// Secret value of the personal access token.
    pub token_secret: SecretString,
    /// Site content URL. Empty string signs in to the default site.
    pub site: String,
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings.
    pub connection: ConnectionConfig,
    /// Authentication settings.
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config with the given server URL and token credentials,
    /// using default connection settings.
    pub fn with_token(
        server_url: String,
        token_name: String,
        token_secret: SecretString,
        site: String,
    ) -> Self {
        Self {
            connection: ConnectionConfig {
                server_url,
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            auth: AuthConfig {
                token_name,
                token_secret,
                site,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_token_defaults() {
        let config = Config::with_token(
            "https://tableau.example.com".to_string(),
            "automation".to_string(),
            SecretString::new("tok".to_string().into()),
            "analytics".to_string(),
        );
        assert_eq!(config.connection.server_url, "https://tableau.example.com");
        assert!(!config.connection.skip_verify);
        assert_eq!(config.connection.timeout, Duration::from_secs(30));
        assert_eq!(config.auth.site, "analytics");
    }

    /// The token secret must not leak through Debug formatting.
    #[test]
    fn test_config_debug_does_not_expose_secret() {
        let config = Config::with_token(
            "https://tableau.example.com".to_string(),
            "automation".to_string(),
            SecretString::new("super-secret-token-value".to_string().into()),
            String::new(),
        );

        let debug_output = format!("{:?}", config);
        assert!(
            !debug_output.contains("super-secret-token-value"),
            "Debug output should not contain the token secret"
        );
        // Non-sensitive data stays visible.
        assert!(debug_output.contains("automation"));
        assert!(debug_output.contains("https://tableau.example.com"));
    }
}
