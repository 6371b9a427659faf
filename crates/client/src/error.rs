//! Error types for Splunk search operations.
//!
//! Errors fall into two tiers:
//! - [`ClientError::InvalidArgument`]: rejected before any backend interaction.
//! - Everything else: a failure reported by, or while talking to, the backend.
//!
//! Neither tier is retried internally; callers decide whether to rerun a search.

use splunk_search_config::ConfigError;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while running a search.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Invalid caller input or configuration.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from Splunk.
    #[error("API error ({status}) at {url}: {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        request_id: Option<String>,
    },

    /// Invalid response format from Splunk.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Not found.
    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl ClientError {
    /// Check if this error was raised before contacting the backend.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this error came from the backend or the transport.
    pub fn is_backend_error(&self) -> bool {
        !self.is_invalid_argument()
    }

    /// Check if this error indicates an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status == 401 || *status == 403)
    }
}

impl From<ConfigError> for ClientError {
    fn from(error: ConfigError) -> Self {
        Self::InvalidArgument(error.to_string())
    }
}
