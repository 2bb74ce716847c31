//! Geocoding service port
//!
//! Free-text place lookup used to fill the booking form's address fields.

use async_trait::async_trait;
use domain::Suggestion;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for address autocomplete
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Ranked place suggestions for a partial address, at most `limit` long
    ///
    /// Failures are reported as `ApplicationError::Provider`.
    async fn autocomplete(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Suggestion>, ApplicationError>;
}
