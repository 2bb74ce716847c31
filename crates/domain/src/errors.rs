//! Domain-level errors

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A validation failure scoped to a single form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Form field name (e.g. `pickupArea`, `email`)
    pub field: String,
    /// Human-readable message shown next to the field
    pub message: String,
}

impl FieldError {
    /// Create a field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid email address format
    #[error("Invalid email address: {0}")]
    InvalidEmailAddress(String),

    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Bearer token that is empty or blank
    #[error("Auth token must not be blank")]
    EmptyToken,

    /// Unknown account role
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// One or more form fields failed validation
    #[error("Validation failed: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),
}

impl DomainError {
    /// Create a validation error for a single field
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError::new(field, message)])
    }

    /// Field errors carried by this error, if it is a validation error
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convert `validator` output into field-scoped errors
///
/// Field names are taken from the struct field names; `field_name` lets the
/// caller map them to the names the form uses. Errors are sorted by field so
/// the result is deterministic.
pub fn field_errors_from(
    errors: &validator::ValidationErrors,
    field_name: impl Fn(&str) -> String,
) -> Vec<FieldError> {
    let mut result: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let name = field_name(field.as_ref());
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map_or_else(|| e.code.to_string(), ToString::to_string);
                FieldError::new(name.clone(), message)
            })
        })
        .collect();
    result.sort_by(|a, b| a.field.cmp(&b.field));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_creates_single_validation_error() {
        let err = DomainError::field("pickupArea", "Pickup location is required");
        assert_eq!(err.field_errors().len(), 1);
        assert_eq!(err.field_errors()[0].field, "pickupArea");
    }

    #[test]
    fn validation_error_message_lists_fields() {
        let err = DomainError::Validation(vec![
            FieldError::new("pickupArea", "Pickup location is required"),
            FieldError::new("destinationArea", "Destination location is required"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: pickupArea: Pickup location is required; \
             destinationArea: Destination location is required"
        );
    }

    #[test]
    fn non_validation_errors_have_no_field_errors() {
        let err = DomainError::InvalidRole("ADMIN".to_string());
        assert!(err.field_errors().is_empty());
        assert_eq!(err.to_string(), "Invalid role: ADMIN");
    }

    #[test]
    fn invalid_email_error_message() {
        let err = DomainError::InvalidEmailAddress("bad-email".to_string());
        assert_eq!(err.to_string(), "Invalid email address: bad-email");
    }
}
