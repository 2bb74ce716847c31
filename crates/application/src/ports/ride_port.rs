//! Booking API port

use async_trait::async_trait;
use domain::{AuthToken, RideId, RideRequest};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Backend acknowledgement of a booked ride
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideConfirmation {
    /// Identifier of the new ride
    pub id: RideId,
    /// Message to show the user, if the backend sent one
    pub message: Option<String>,
}

/// Port for submitting ride requests
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RidePort: Send + Sync {
    /// Submit a validated ride request on behalf of the token's owner
    ///
    /// Adapters map HTTP 401 to `AuthExpired`, `{error: true}` bodies to
    /// `SubmissionRejected` and everything else that fails to `Transport`.
    async fn request_ride(
        &self,
        token: &AuthToken,
        request: &RideRequest,
    ) -> Result<RideConfirmation, ApplicationError>;
}
