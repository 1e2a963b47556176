//! Environment-based configuration loading.
//!
//! Responsibilities:
//! - Load a `.env` file (if present) before reading the environment.
//! - Read the variables the automation is driven by: `SERVER_URL`,
//!   `SITENAME`, `TOKEN_NAME`, `TOKEN_VALUE`.
//! - Treat empty or whitespace-only variables as unset and trim values.
//!
//! Does NOT handle:
//! - Profile files or keyrings; the configuration surface is exactly the
//!   four variables above plus two optional connection tunables.
//!
//! Invariants:
//! - `SERVER_URL` may be given with or without a scheme; a bare host gets
//!   `https://` prepended.
//! - Missing required variables produce `ConfigError::MissingVar` naming
//!   the variable, never a panic.

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::types::{AuthConfig, Config, ConnectionConfig};

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or blank.
    #[error("Missing required environment variable: {var}")]
    MissingVar { var: &'static str },

    /// An environment variable holds a value that cannot be parsed.
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: &'static str, message: String },

    /// A `.env` file exists but could not be read.
    #[error("Failed to load .env file: {0}")]
    DotenvError(#[from] dotenvy::Error),
}

/// Read an environment variable, returning `None` if unset, empty, or
/// whitespace-only. Returned values are trimmed.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Loader for building a [`Config`] from the process environment.
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a `.env` file from the current directory if one exists.
    ///
    /// A missing file is not an error; a malformed one is. Setting
    /// `DOTENV_DISABLED` to "true" or "1" skips the file entirely, which
    /// keeps integration tests hermetic.
    pub fn load_dotenv(&self) -> Result<(), ConfigError> {
        if matches!(
            env_var_or_none("DOTENV_DISABLED").as_deref(),
            Some("true") | Some("1")
        ) {
            return Ok(());
        }
        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!("Loaded environment from {}", path.display());
                Ok(())
            }
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(ConfigError::DotenvError(e)),
        }
    }

    /// Build a [`Config`] from environment variables.
    pub fn from_env(&self) -> Result<Config, ConfigError> {
        let server_url = required("SERVER_URL")?;
        let token_name = required("TOKEN_NAME")?;
        let token_secret = SecretString::new(required("TOKEN_VALUE")?.into());
        // SITENAME is optional; absence means the default site.
        let site = env_var_or_none("SITENAME").unwrap_or_default();

        let skip_verify = match env_var_or_none("TABLEAU_SKIP_VERIFY") {
            Some(v) => v.parse().map_err(|_| ConfigError::InvalidValue {
                var: "TABLEAU_SKIP_VERIFY",
                message: "must be true or false".to_string(),
            })?,
            None => false,
        };
        let timeout_secs: u64 = match env_var_or_none("TABLEAU_TIMEOUT") {
            Some(v) => v.parse().map_err(|_| ConfigError::InvalidValue {
                var: "TABLEAU_TIMEOUT",
                message: "must be a number of seconds".to_string(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            connection: ConnectionConfig {
                server_url: normalize_server_url(server_url),
                skip_verify,
                timeout: Duration::from_secs(timeout_secs),
            },
            auth: AuthConfig {
                token_name,
                token_secret,
                site,
            },
        })
    }
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    env_var_or_none(var).ok_or(ConfigError::MissingVar { var })
}

/// Prepend `https://` when the variable holds a bare host name.
///
/// `.env` files in the field hold both bare hosts and full URLs; accepting
/// both keeps them all working.
fn normalize_server_url(url: String) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url
    } else {
        format!("https://{}", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace() {
        let key = "_TABJOBS_TEST_VAR";
        assert!(env_var_or_none(key).is_none());

        temp_env::with_vars([(key, Some(""))], || {
            assert!(env_var_or_none(key).is_none());
        });
        temp_env::with_vars([(key, Some("   "))], || {
            assert!(env_var_or_none(key).is_none());
        });
        temp_env::with_vars([(key, Some(" tableau.example.com "))], || {
            assert_eq!(
                env_var_or_none(key),
                Some("tableau.example.com".to_string())
            );
        });
    }

    #[test]
    #[serial]
    fn test_from_env_full() {
        temp_env::with_vars(
            [
                ("SERVER_URL", Some("tableau.example.com")),
                ("SITENAME", Some("analytics")),
                ("TOKEN_NAME", Some("automation")),
                ("TOKEN_VALUE", Some("secret-value")),
                ("TABLEAU_SKIP_VERIFY", Some("true")),
                ("TABLEAU_TIMEOUT", Some("60")),
            ],
            || {
                let config = ConfigLoader::new().from_env().unwrap();
                assert_eq!(
                    config.connection.server_url,
                    "https://tableau.example.com"
                );
                assert!(config.connection.skip_verify);
                assert_eq!(config.connection.timeout, Duration::from_secs(60));
                assert_eq!(config.auth.token_name, "automation");
                assert_eq!(config.auth.site, "analytics");
            },
        );
    }

    #[test]
    #[serial]
    fn test_from_env_missing_server_url() {
        temp_env::with_vars(
            [
                ("SERVER_URL", None),
                ("TOKEN_NAME", Some("automation")),
                ("TOKEN_VALUE", Some("secret-value")),
            ],
            || {
                let err = ConfigLoader::new().from_env().unwrap_err();
                assert!(matches!(
                    err,
                    ConfigError::MissingVar { var: "SERVER_URL" }
                ));
            },
        );
    }

    #[test]
    #[serial]
    fn test_from_env_sitename_optional() {
        temp_env::with_vars(
            [
                ("SERVER_URL", Some("https://tableau.example.com")),
                ("SITENAME", None),
                ("TOKEN_NAME", Some("automation")),
                ("TOKEN_VALUE", Some("secret-value")),
                ("TABLEAU_SKIP_VERIFY", None),
                ("TABLEAU_TIMEOUT", None),
            ],
            || {
                let config = ConfigLoader::new().from_env().unwrap();
                // Empty site addresses the default site at sign-in.
                assert_eq!(config.auth.site, "");
                assert!(!config.connection.skip_verify);
            },
        );
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout() {
        temp_env::with_vars(
            [
                ("SERVER_URL", Some("tableau.example.com")),
                ("TOKEN_NAME", Some("automation")),
                ("TOKEN_VALUE", Some("secret-value")),
                ("TABLEAU_TIMEOUT", Some("soon")),
            ],
            || {
                let err = ConfigLoader::new().from_env().unwrap_err();
                assert!(matches!(
                    err,
                    ConfigError::InvalidValue {
                        var: "TABLEAU_TIMEOUT",
                        ..
                    }
                ));
            },
        );
    }

    #[test]
    fn test_normalize_server_url() {
        assert_eq!(
            normalize_server_url("tableau.example.com".to_string()),
            "https://tableau.example.com"
        );
        assert_eq!(
            normalize_server_url("https://tableau.example.com".to_string()),
            "https://tableau.example.com"
        );
        assert_eq!(
            normalize_server_url("http://localhost:8080".to_string()),
            "http://localhost:8080"
        );
    }
}
