//! Geocoding adapter - Implements GeocodingPort using integration_geocoding

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::Suggestion;
use integration_geocoding::{GeocodingClient, GeocodingError, LocationIqClient, LocationIqConfig};
use tracing::{instrument, warn};

/// Adapter for address autocomplete
pub struct GeocodingAdapter {
    client: Arc<dyn GeocodingClient>,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter").finish_non_exhaustive()
    }
}

impl GeocodingAdapter {
    /// Wrap an existing client
    pub fn new(client: Arc<dyn GeocodingClient>) -> Self {
        Self { client }
    }

    /// Build a LocationIQ-backed adapter
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the API key is missing or the HTTP client
    /// cannot be built.
    pub fn location_iq(config: &LocationIqConfig) -> Result<Self, ApplicationError> {
        let client = LocationIqClient::new(config).map_err(|e| match e {
            GeocodingError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::Configuration(other.to_string()),
        })?;
        Ok(Self::new(Arc::new(client)))
    }

    fn map_error(err: GeocodingError) -> ApplicationError {
        ApplicationError::Provider(err.to_string())
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn autocomplete(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Suggestion>, ApplicationError> {
        self.client.autocomplete(query, limit).await.map_err(|e| {
            warn!(error = %e, "Autocomplete failed");
            Self::map_error(e)
        })
    }
}
