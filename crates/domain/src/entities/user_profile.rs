//! Profile of the signed-in account

use serde::{Deserialize, Serialize};

/// The single account that operates the dispatcher (company) screen
///
/// A business rule tied to one hardcoded rider account, not a role.
pub const DISPATCHER_EMAIL: &str = "ride@fast.com";

/// Profile returned by the backend for the signed-in rider or driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Login email
    pub email: String,
    /// Display name
    #[serde(default, alias = "fullName", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Mobile number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

impl UserProfile {
    /// Create a profile with only an email
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            mobile: None,
        }
    }

    /// Whether this is the dispatcher account
    pub fn is_dispatcher(&self) -> bool {
        self.email.trim().eq_ignore_ascii_case(DISPATCHER_EMAIL)
    }
}
