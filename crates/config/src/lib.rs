//! Configuration management for the tabjobs workspace.
//!
//! This crate provides types and loaders for Tableau Server connection
//! configuration from environment variables and `.env` files, plus the
//! fixed workspace constants (REST API version, page size).

pub mod constants;
mod loader;
mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig};
