//! Application configuration
//!
//! Split into focused sub-modules:
//! - `client`: booking form and session persistence settings
//! - `integrations`: backend and geocoding provider settings
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml` in the working directory, then `RIDEFAST_*` environment
//! variables with `__` between nested keys
//! (e.g. `RIDEFAST_GEOCODING__API_KEY`).

mod client;
mod integrations;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use application::ApplicationError;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use client::{BookingConfig, SessionConfig};
pub use integrations::{BackendConfig, LocationIqConfig, validate_base_url};

use crate::telemetry::LoggingConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "RIDEFAST";

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - plain HTTP backends allowed
    #[default]
    Development,
    /// Production environment - backends must use HTTPS
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Booking backend
    #[serde(default)]
    pub backend: BackendConfig,

    /// Address autocomplete provider
    #[serde(default)]
    pub geocoding: LocationIqConfig,

    /// Booking form behaviour
    #[serde(default)]
    pub booking: BookingConfig,

    /// Where the session is kept between runs
    #[serde(default)]
    pub session: SessionConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(None, None)
    }

    /// Load configuration from an explicit file, then the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(Some(path), None)
    }

    fn build(
        file: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            .set_default("environment", "development")?
            .set_default("booking.debounce_ms", 500)?
            .set_default("booking.max_suggestions", 5)?
            .add_source(file_source)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(environment = %config.environment, "Configuration loaded");
        Ok(config)
    }

    /// Check every section for values the client cannot work with
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` naming the first bad value.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        let require_https = self.environment == Environment::Production;
        integrations::validate_backend(&self.backend, require_https)?;
        integrations::validate_geocoding(&self.geocoding)?;
        self.booking.validate()?;
        Ok(())
    }
}
