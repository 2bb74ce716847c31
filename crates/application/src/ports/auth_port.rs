//! Authentication API port

use std::fmt;

use async_trait::async_trait;
use domain::{AuthToken, EmailAddress, Role, UserProfile};
#[cfg(test)]
use mockall::automock;
use secrecy::SecretString;

use crate::error::ApplicationError;

/// Credentials sent to the login endpoint
#[derive(Clone)]
pub struct LoginCredentials {
    /// Login email
    pub email: EmailAddress,
    /// Password, kept out of logs
    pub password: SecretString,
    /// Role the user is logging in as
    pub role: Role,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Successful login response
#[derive(Debug, Clone)]
pub struct LoginGrant {
    /// Issued bearer token
    pub token: AuthToken,
    /// Message to show the user, if the backend sent one
    pub message: Option<String>,
}

/// Port for the backend's authentication endpoints
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Exchange credentials for a token
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginGrant, ApplicationError>;

    /// Fetch the profile of the token's owner; the role selects the endpoint
    async fn fetch_profile(
        &self,
        token: &AuthToken,
        role: Role,
    ) -> Result<UserProfile, ApplicationError>;
}
