//! Error handling

use thiserror::Error;

/// Portal client error
#[derive(Error, Debug)]
pub enum PortalError {
    /// Configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Durable session storage
    #[error("Session storage error: {0}")]
    Storage(String),

    /// Error
    #[error("Network error: {0}")]
    Network(String),

    /// Credential rejected by the server; the session has been cleared
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Non-auth API failure
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code returned by the server
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Portal result type
pub type Result<T> = std::result::Result<T, PortalError>;

impl PortalError {
    /// True when the server refused the presented credential.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, PortalError::Unauthorized(_))
    }

    /// Transient failures the caller may retry; never affects session state.
    pub fn is_retryable(&self) -> bool {
        match self {
            PortalError::Network(_) => true,
            PortalError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
