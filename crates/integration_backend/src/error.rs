//! Backend error types

use thiserror::Error;

/// Errors returned by the booking backend client
#[derive(Debug, Error)]
pub enum BackendError {
    /// Connection to the backend failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The token is missing, expired or revoked
    #[error("Unauthorized")]
    Unauthorized,

    /// The backend refused the request; the message is meant for the user
    #[error("Rejected: {0}")]
    Rejected(String),

    /// Unexpected HTTP status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be understood
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}
