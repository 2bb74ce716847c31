//! LocationIQ autocomplete client
//!
//! Results are cached per normalised query, and an optional minimum spacing
//! between outbound requests keeps bursts inside the account's quota.

use std::time::Duration;

use async_trait::async_trait;
use domain::Suggestion;
use moka::future::Cache;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument, warn};

use crate::config::LocationIqConfig;
use crate::error::GeocodingError;
use crate::models::{RawError, RawPlace};

/// Trait for address autocomplete clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Ranked places matching a partial address, at most `limit` long
    ///
    /// An address the provider cannot place yields an empty list.
    async fn autocomplete(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Suggestion>, GeocodingError>;
}

/// LocationIQ-backed client with caching and request spacing
pub struct LocationIqClient {
    client: Client,
    config: LocationIqConfig,
    api_key: SecretString,
    cache: Option<Cache<String, Vec<Suggestion>>>,
    last_request: Mutex<Option<Instant>>,
}

impl std::fmt::Debug for LocationIqClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationIqClient")
            .field("config", &self.config)
            .field("cached", &self.cache.as_ref().map(Cache::entry_count))
            .finish_non_exhaustive()
    }
}

impl LocationIqClient {
    /// Create a new LocationIQ client
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &LocationIqConfig) -> Result<Self, GeocodingError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or_else(|| {
                GeocodingError::ConfigurationError("LocationIQ API key is not set".to_string())
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("RideFast/0.1")
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        let cache = (config.cache_ttl_minutes > 0).then(|| {
            Cache::builder()
                .max_capacity(500)
                .time_to_live(Duration::from_secs(config.cache_ttl_minutes * 60))
                .build()
        });

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
            cache,
            last_request: Mutex::new(None),
        })
    }

    /// Wait until the configured spacing since the previous request has passed
    async fn rate_limit(&self) {
        if self.config.min_request_interval_ms == 0 {
            return;
        }
        let interval = Duration::from_millis(self.config.min_request_interval_ms);
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < interval {
                let wait = interval.saturating_sub(elapsed);
                debug!(?wait, "Spacing geocoding request");
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }

    fn parse_places(body: &str) -> Result<Vec<Suggestion>, GeocodingError> {
        let places: Vec<RawPlace> =
            serde_json::from_str(body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;
        Ok(places.into_iter().map(Suggestion::from).collect())
    }
}

#[async_trait]
impl GeocodingClient for LocationIqClient {
    #[instrument(skip(self))]
    async fn autocomplete(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Suggestion>, GeocodingError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let limit = limit.clamp(1, self.config.max_results.max(1));

        let cache_key = format!("{}|{limit}", query.to_lowercase());
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&cache_key).await {
                debug!(%query, "Autocomplete cache hit");
                return Ok(hit);
            }
        }

        self.rate_limit().await;

        let url = format!("{}/autocomplete", self.config.base_url);
        let mut params = vec![
            ("key", self.api_key.expose_secret().to_string()),
            ("q", query.to_string()),
            ("limit", limit.to_string()),
            ("format", "json".to_string()),
        ];
        if let Some(countries) = &self.config.country_codes {
            params.push(("countrycodes", countries.clone()));
        }

        debug!(%query, limit, "Requesting autocomplete");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    GeocodingError::ConnectionFailed(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        if status == StatusCode::NOT_FOUND {
            // "Unable to geocode": nothing matches the text typed so far.
            debug!(%query, "No places found");
            return Ok(Vec::new());
        }

        if !status.is_success() {
            let detail = serde_json::from_str::<RawError>(&body)
                .map(|raw| format!("HTTP {status}: {}", raw.error))
                .unwrap_or_else(|_| format!("HTTP {status}"));
            warn!(%detail, "Autocomplete request failed");
            return Err(GeocodingError::RequestFailed(detail));
        }

        let mut places = Self::parse_places(&body)?;
        places.truncate(limit);

        if let Some(cache) = &self.cache {
            cache.insert(cache_key, places.clone()).await;
        }
        debug!(count = places.len(), "Autocomplete results");
        Ok(places)
    }
}
