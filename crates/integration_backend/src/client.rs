//! Booking backend client

use std::time::Duration;

use async_trait::async_trait;
use domain::{RideRequest, Role, UserProfile};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::BackendConfig;
use crate::error::BackendError;
use crate::models::{Envelope, LoginRequest, LoginResponse, RideBooked};

/// Trait for booking backend clients
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Exchange credentials for a bearer token
    async fn login(
        &self,
        email: &str,
        password: &SecretString,
        role: Role,
    ) -> Result<LoginResponse, BackendError>;

    /// Profile of the token's owner; drivers and riders live at different paths
    async fn profile(&self, token: &str, role: Role) -> Result<UserProfile, BackendError>;

    /// Request a ride on behalf of the token's owner
    async fn request_ride(
        &self,
        token: &str,
        request: &RideRequest,
    ) -> Result<RideBooked, BackendError>;
}

/// reqwest-based client for the booking backend
#[derive(Debug)]
pub struct RideBackendClient {
    client: Client,
    config: BackendConfig,
}

impl RideBackendClient {
    /// Create a new backend client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("RideFast/0.1")
            .build()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    const fn profile_path(role: Role) -> &'static str {
        match role {
            Role::Driver => "drivers/profile",
            Role::NormalUser => "users/profile",
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, BackendError> {
        request.send().await.map_err(|e| {
            if e.is_timeout() {
                BackendError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                }
            } else {
                BackendError::ConnectionFailed(e.without_url().to_string())
            }
        })
    }

    /// Turn a response into `T`, classifying failures
    ///
    /// 401 wins over everything, then an `error: true` body, then the status.
    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(BackendError::Unauthorized);
        }

        let body = response
            .text()
            .await
            .map_err(|e| BackendError::ParseError(e.to_string()))?;
        Self::interpret(status, &body)
    }

    fn interpret<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, BackendError> {
        let envelope: Envelope = serde_json::from_str(body).unwrap_or_default();

        if envelope.code == Some(401) {
            return Err(BackendError::Unauthorized);
        }
        if envelope.error {
            let message = envelope
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "Request rejected".to_string());
            return Err(BackendError::Rejected(message));
        }
        if !status.is_success() {
            warn!(%status, "Backend request failed");
            return Err(BackendError::RequestFailed(format!("HTTP {status}")));
        }

        serde_json::from_str(body).map_err(|e| BackendError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl BackendClient for RideBackendClient {
    #[instrument(skip(self, password))]
    async fn login(
        &self,
        email: &str,
        password: &SecretString,
        role: Role,
    ) -> Result<LoginResponse, BackendError> {
        let body = LoginRequest {
            email,
            password: password.expose_secret(),
            role,
        };
        let request = self.client.post(self.config.endpoint("auth/login")).json(&body);

        let response = Self::read::<LoginResponse>(self.send(request).await?).await?;
        if response.token.trim().is_empty() {
            return Err(BackendError::ParseError("login response has no token".to_string()));
        }
        debug!("Login accepted");
        Ok(response)
    }

    #[instrument(skip(self, token))]
    async fn profile(&self, token: &str, role: Role) -> Result<UserProfile, BackendError> {
        let request = self
            .client
            .get(self.config.endpoint(Self::profile_path(role)))
            .bearer_auth(token);

        Self::read(self.send(request).await?).await
    }

    #[instrument(skip(self, token, request), fields(pickup = %request.pickup_area, destination = %request.destination_area))]
    async fn request_ride(
        &self,
        token: &str,
        request: &RideRequest,
    ) -> Result<RideBooked, BackendError> {
        let http = self
            .client
            .post(self.config.endpoint("rides"))
            .bearer_auth(token)
            .json(request);

        let booked: RideBooked = Self::read(self.send(http).await?).await?;
        debug!(ride_id = %booked.id, "Ride request accepted");
        Ok(booked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_path_depends_on_role() {
        assert_eq!(RideBackendClient::profile_path(Role::Driver), "drivers/profile");
        assert_eq!(RideBackendClient::profile_path(Role::NormalUser), "users/profile");
    }

    #[test]
    fn code_401_in_body_is_unauthorized() {
        let result: Result<RideBooked, _> = RideBackendClient::interpret(
            StatusCode::OK,
            r#"{"code": 401, "message": "jwt expired"}"#,
        );
        assert!(matches!(result, Err(BackendError::Unauthorized)));
    }

    #[test]
    fn error_flag_is_rejection_whatever_the_status() {
        let result: Result<RideBooked, _> = RideBackendClient::interpret(
            StatusCode::BAD_REQUEST,
            r#"{"error": true, "message": "No drivers available"}"#,
        );
        assert!(matches!(result, Err(BackendError::Rejected(m)) if m == "No drivers available"));
    }

    #[test]
    fn rejection_without_message_gets_default() {
        let result: Result<RideBooked, _> =
            RideBackendClient::interpret(StatusCode::OK, r#"{"error": true}"#);
        assert!(matches!(result, Err(BackendError::Rejected(m)) if m == "Request rejected"));
    }

    #[test]
    fn server_error_without_envelope_is_request_failure() {
        let result: Result<RideBooked, _> =
            RideBackendClient::interpret(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert!(matches!(result, Err(BackendError::RequestFailed(_))));
    }

    #[test]
    fn malformed_success_is_parse_error() {
        let result: Result<RideBooked, _> =
            RideBackendClient::interpret(StatusCode::OK, r#"{"message": "Ride Booked"}"#);
        assert!(matches!(result, Err(BackendError::ParseError(_))));
    }
}
