//! Login, landing and logout
//!
//! After any change of credentials the user is "landed": the profile for
//! their role is fetched and they are sent to their home screen.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use domain::{AppRoute, EmailAddress, FieldError, Role, field_errors_from};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, instrument, warn};
use validator::{Validate, ValidationError};

use super::{SessionStore, landing_route};
use crate::error::ApplicationError;
use crate::ports::{AuthPort, LoginCredentials, NavigatorPort, NotifierPort};

/// Toast shown when login fails for reasons other than bad credentials
pub const GENERIC_LOGIN_FAILURE: &str = "An error occurred while logging in";

/// Toast shown when the backend refuses the credentials without a message
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Values entered on the login screen
#[derive(Clone, Validate)]
pub struct LoginForm {
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    pub password: SecretString,
    pub role: Role,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

impl LoginForm {
    /// Form for riders, the screen's default role
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
            role: Role::NormalUser,
        }
    }

    /// Same form with a different role
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    fn credentials(&self) -> Result<LoginCredentials, ApplicationError> {
        let mut errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(e) => field_errors_from(&e, str::to_string),
        };
        // The secret is checked by hand; the derive cannot see through it.
        if self.password.expose_secret().is_empty() {
            errors.push(FieldError::new("password", "password is required"));
        }
        if !errors.is_empty() {
            return Err(ApplicationError::Validation(errors));
        }

        Ok(LoginCredentials {
            email: EmailAddress::new(self.email.as_str())?,
            password: self.password.clone(),
            role: self.role,
        })
    }
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed("email is required")));
    }
    if EmailAddress::new(email).is_err() {
        return Err(ValidationError::new("email").with_message(Cow::Borrowed("invalid email")));
    }
    Ok(())
}

/// Authentication flow on top of the session store
pub struct AuthService {
    session: Arc<SessionStore>,
    auth: Arc<dyn AuthPort>,
    navigator: Arc<dyn NavigatorPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthService")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl AuthService {
    pub fn new(
        session: Arc<SessionStore>,
        auth: Arc<dyn AuthPort>,
        navigator: Arc<dyn NavigatorPort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            session,
            auth,
            navigator,
            notifier,
        }
    }

    /// Log in and land on the role's home screen
    ///
    /// Invalid input is returned as `Validation` without contacting the
    /// backend. Backend refusals and transport failures are shown as toasts.
    #[instrument(skip(self, form), fields(email = %form.email, role = %form.role))]
    pub async fn login(&self, form: &LoginForm) -> Result<AppRoute, ApplicationError> {
        let credentials = form.credentials()?;

        match self.auth.login(&credentials).await {
            Ok(grant) => {
                self.session.login(grant.token, credentials.role);
                if let Some(message) = grant.message.filter(|m| !m.trim().is_empty()) {
                    self.notifier.success(&message);
                }
                self.land()
                    .await?
                    .ok_or_else(|| ApplicationError::Internal("session lost after login".to_string()))
            },
            Err(ApplicationError::SubmissionRejected(message)) => {
                info!(%message, "Login rejected");
                self.notifier.error(&message);
                Err(ApplicationError::SubmissionRejected(message))
            },
            Err(ApplicationError::AuthExpired) => {
                info!("Login refused with 401");
                self.notifier.error(INVALID_CREDENTIALS);
                Err(ApplicationError::SubmissionRejected(
                    INVALID_CREDENTIALS.to_string(),
                ))
            },
            Err(e) => {
                warn!(error = %e, "Login failed");
                self.notifier.error(GENERIC_LOGIN_FAILURE);
                Err(e)
            },
        }
    }

    /// Send a signed-in user to their home screen
    ///
    /// Fetches the profile for the session's role first. Returns `None`
    /// without navigating when nobody is signed in. A 401 expires the
    /// session and redirects to login; any other profile failure still
    /// lands the user by role.
    #[instrument(skip(self))]
    pub async fn land(&self) -> Result<Option<AppRoute>, ApplicationError> {
        let session = self.session.snapshot();
        let (Some(token), Some(role)) = (session.token(), session.role()) else {
            debug!("Nobody signed in; staying on login");
            return Ok(None);
        };

        let route = match self.auth.fetch_profile(token, role).await {
            Ok(profile) => {
                let route = landing_route(role, Some(&profile));
                self.session.refresh_user(profile);
                route
            },
            Err(ApplicationError::AuthExpired) => {
                self.session.expire();
                self.navigator.replace(&AppRoute::Login);
                return Err(ApplicationError::AuthExpired);
            },
            Err(e) => {
                warn!(error = %e, "Profile fetch failed; landing by role");
                landing_route(role, session.user())
            },
        };

        info!(%route, "Landing");
        self.navigator.replace(&route);
        Ok(Some(route))
    }

    /// Restore the persisted session and land on it
    pub async fn restore(&self) -> Result<Option<AppRoute>, ApplicationError> {
        self.session.restore();
        self.land().await
    }

    /// Sign out and return to the login screen
    pub fn logout(&self) {
        self.session.logout();
        self.navigator.replace(&AppRoute::Login);
    }
}
