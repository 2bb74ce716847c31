//! Application-level errors

use domain::{DomainError, FieldError};
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// None of these are fatal: every path ends with the client back in a state
/// the user can act on.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error other than field validation
    #[error(transparent)]
    Domain(DomainError),

    /// One or more form fields are invalid; nothing was sent
    #[error("Validation failed: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// The backend rejected the token (HTTP 401); the session is gone
    #[error("Session expired")]
    AuthExpired,

    /// The geocoding provider failed; suggestions degrade to empty
    #[error("Geocoding provider error: {0}")]
    Provider(String),

    /// The backend refused the request on business grounds
    #[error("Rejected: {0}")]
    SubmissionRejected(String),

    /// Network failure or unexpected server response
    #[error("Transport error: {0}")]
    Transport(String),

    /// A ride request is already being submitted
    #[error("A submission is already in progress")]
    SubmissionInFlight,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => Self::Validation(errors),
            other => Self::Domain(other),
        }
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApplicationError {
    /// Field errors, if this is a validation failure
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }

    /// Whether the backend reported the session as unauthorized
    pub const fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthExpired)
    }
}
