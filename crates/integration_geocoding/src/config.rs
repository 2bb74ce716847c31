//! LocationIQ configuration

use std::fmt;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Configuration for the LocationIQ autocomplete API
#[derive(Clone, Serialize, Deserialize)]
pub struct LocationIqConfig {
    /// Base URL including the API version
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API access token (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Upper bound for the `limit` sent to the API
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Cache TTL in minutes (0 to disable caching)
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u64,

    /// Minimum spacing between outbound requests in milliseconds (0 for none)
    #[serde(default)]
    pub min_request_interval_ms: u64,

    /// Comma-separated ISO 3166-1 alpha-2 codes to restrict results to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_codes: Option<String>,
}

fn default_base_url() -> String {
    "https://api.locationiq.com/v1".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_max_results() -> usize {
    5
}

const fn default_cache_ttl_minutes() -> u64 {
    30
}

impl Default for LocationIqConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            max_results: default_max_results(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
            min_request_interval_ms: 0,
            country_codes: None,
        }
    }
}

impl fmt::Debug for LocationIqConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationIqConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("max_results", &self.max_results)
            .field("cache_ttl_minutes", &self.cache_ttl_minutes)
            .field("min_request_interval_ms", &self.min_request_interval_ms)
            .field("country_codes", &self.country_codes)
            .finish()
    }
}

impl LocationIqConfig {
    /// Default configuration with the given access token
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::from(api_key.into())),
            ..Self::default()
        }
    }
}
