//! Email address value object with validation
//!
//! Login identifiers are email addresses. They are trimmed and normalised to
//! lowercase so comparisons (for instance against the dispatcher account)
//! do not depend on how the user typed them.
//!
//! # Examples
//!
//! ```
//! use domain::EmailAddress;
//!
//! let email = EmailAddress::new("Ride@Fast.COM").unwrap();
//! assert_eq!(email.as_str(), "ride@fast.com");
//!
//! assert!(EmailAddress::new("invalid").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A validated email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct EmailAddress {
    #[validate(email)]
    value: String,
}

impl EmailAddress {
    /// Create a new email address, validating the format
    ///
    /// # Errors
    ///
    /// Returns an error if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, DomainError> {
        let value = email.into().trim().to_lowercase();

        let candidate = Self { value };
        candidate
            .validate()
            .map_err(|e| DomainError::InvalidEmailAddress(e.to_string()))?;

        Ok(candidate)
    }

    /// Get the email address as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Compare against a raw address, ignoring case and surrounding whitespace
    pub fn matches(&self, other: &str) -> bool {
        self.value == other.trim().to_lowercase()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_is_accepted() {
        let email = EmailAddress::new("rider@example.com").unwrap();
        assert_eq!(email.as_str(), "rider@example.com");
    }

    #[test]
    fn email_is_trimmed_and_lowercased() {
        let email = EmailAddress::new("  Rider@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "rider@example.com");
    }

    #[test]
    fn invalid_email_is_rejected() {
        assert!(EmailAddress::new("not-an-email").is_err());
        assert!(EmailAddress::new("@nodomain.com").is_err());
        assert!(EmailAddress::new("").is_err());
    }

    #[test]
    fn matches_ignores_case() {
        let email = EmailAddress::new("ride@fast.com").unwrap();
        assert!(email.matches("RIDE@fast.com "));
        assert!(!email.matches("rider@fast.com"));
    }
}
