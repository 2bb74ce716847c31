//! Authentication session

use serde::{Deserialize, Serialize};

use super::UserProfile;
use crate::value_objects::{AuthToken, Role};

/// Token and role of an authenticated session
///
/// Held together so a session can never carry a token without a role or
/// a role without a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Bearer token issued at login
    pub token: AuthToken,
    /// Role the user logged in as
    pub role: Role,
}

/// Process-wide authentication state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    credentials: Option<Credentials>,
    #[serde(default)]
    user: Option<UserProfile>,
}

impl Session {
    /// An unauthenticated session
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A freshly authenticated session whose profile is not yet known
    pub fn authenticated(token: AuthToken, role: Role) -> Self {
        Self {
            credentials: Some(Credentials { token, role }),
            user: None,
        }
    }

    /// Attach the user profile
    #[must_use]
    pub fn with_user(mut self, user: UserProfile) -> Self {
        self.user = Some(user);
        self
    }

    /// Whether token and role are present
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// Token and role, if authenticated
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Bearer token, if authenticated
    pub fn token(&self) -> Option<&AuthToken> {
        self.credentials.as_ref().map(|c| &c.token)
    }

    /// Role, if authenticated
    pub fn role(&self) -> Option<Role> {
        self.credentials.as_ref().map(|c| c.role)
    }

    /// Profile of the signed-in user, once fetched
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Email of the signed-in user, once the profile is known
    pub fn user_email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> AuthToken {
        AuthToken::new("jwt").unwrap()
    }

    #[test]
    fn anonymous_session_has_nothing() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
        assert!(session.role().is_none());
        assert!(session.user_email().is_none());
    }

    #[test]
    fn authenticated_session_carries_token_and_role() {
        let session = Session::authenticated(token(), Role::Driver)
            .with_user(UserProfile::new("driver@example.com"));
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Driver));
        assert_eq!(session.token().map(AuthToken::expose), Some("jwt"));
        assert_eq!(session.user_email(), Some("driver@example.com"));
    }

    #[test]
    fn persisted_form_keeps_wire_role_names() {
        let session = Session::authenticated(token(), Role::NormalUser);
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("NORMAL_USER"));
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn blank_persisted_token_is_rejected() {
        let json = r#"{"credentials":{"token":"","role":"NORMAL_USER"}}"#;
        assert!(serde_json::from_str::<Session>(json).is_err());
    }

    #[test]
    fn empty_record_deserializes_as_anonymous() {
        let restored: Session = serde_json::from_str("{}").unwrap();
        assert_eq!(restored, Session::anonymous());
    }
}
