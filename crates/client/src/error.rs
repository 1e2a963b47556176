//! Error types for the Tableau client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Tableau client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Sign-in failed or the client was misconfigured for authentication.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a status other than the endpoint's expected
    /// success code. Code, summary, and detail are parsed best-effort from
    /// the structured XML error body; "unknown" sentinels are used when the
    /// body does not parse.
    #[error("API error ({status}) at {url}: {code}: {summary} - {detail}")]
    ApiError {
        status: u16,
        url: String,
        code: String,
        summary: String,
        detail: String,
    },

    /// The server has no job record for the given id. Distinct from a job
    /// whose detail payload merely lacks optional refresh fields.
    #[error("No job found on the server for job id '{job_id}'")]
    JobNotFound { job_id: String },

    /// An operation that requires a session was called before sign-in.
    #[error("Not signed in: call sign_in() before issuing API calls")]
    NotSignedIn,

    /// Response did not match the expected XML shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error indicates an authentication problem.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::AuthFailed(_) | Self::NotSignedIn | Self::ApiError { status: 401, .. }
        )
    }
}
