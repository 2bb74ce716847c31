//! Backend adapter - Implements RidePort and AuthPort using integration_backend

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{AuthPort, LoginCredentials, LoginGrant, RideConfirmation, RidePort};
use async_trait::async_trait;
use domain::{AuthToken, RideId, RideRequest, Role, UserProfile};
use integration_backend::{BackendClient, BackendConfig, BackendError, RideBackendClient};
use tracing::{info, instrument, warn};

/// Adapter for the booking backend
pub struct BackendAdapter {
    client: Arc<dyn BackendClient>,
}

impl std::fmt::Debug for BackendAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendAdapter").finish_non_exhaustive()
    }
}

impl BackendAdapter {
    /// Wrap an existing client
    pub fn new(client: Arc<dyn BackendClient>) -> Self {
        Self { client }
    }

    /// Build an HTTP-backed adapter
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the HTTP client cannot be built.
    pub fn http(config: &BackendConfig) -> Result<Self, ApplicationError> {
        let client = RideBackendClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client)))
    }

    fn map_error(err: BackendError) -> ApplicationError {
        match err {
            BackendError::Unauthorized => ApplicationError::AuthExpired,
            BackendError::Rejected(message) => ApplicationError::SubmissionRejected(message),
            other => {
                warn!(error = %other, "Backend call failed");
                ApplicationError::Transport(other.to_string())
            },
        }
    }
}

#[async_trait]
impl RidePort for BackendAdapter {
    #[instrument(skip(self, token, request))]
    async fn request_ride(
        &self,
        token: &AuthToken,
        request: &RideRequest,
    ) -> Result<RideConfirmation, ApplicationError> {
        let booked = self
            .client
            .request_ride(token.expose(), request)
            .await
            .map_err(Self::map_error)?;

        info!(ride_id = %booked.id, "Ride request accepted");
        Ok(RideConfirmation {
            id: RideId::new(booked.id),
            message: booked.message,
        })
    }
}

#[async_trait]
impl AuthPort for BackendAdapter {
    #[instrument(skip(self, credentials), fields(email = %credentials.email, role = %credentials.role))]
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginGrant, ApplicationError> {
        let response = self
            .client
            .login(
                credentials.email.as_str(),
                &credentials.password,
                credentials.role,
            )
            .await
            .map_err(Self::map_error)?;

        let token = AuthToken::new(response.token).ok_or_else(|| {
            ApplicationError::Transport("login response carried an empty token".to_string())
        })?;
        Ok(LoginGrant {
            token,
            message: response.message,
        })
    }

    #[instrument(skip(self, token))]
    async fn fetch_profile(
        &self,
        token: &AuthToken,
        role: Role,
    ) -> Result<UserProfile, ApplicationError> {
        self.client
            .profile(token.expose(), role)
            .await
            .map_err(Self::map_error)
    }
}
