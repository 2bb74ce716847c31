//! tracing-subscriber initialization

use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for log output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "ridefast=debug,reqwest=warn")
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit one JSON object per event instead of human-readable lines
    #[serde(default)]
    pub json: bool,

    /// Set by [`LoggingConfig::with_filter`]; the filter then beats `RUST_LOG`
    #[serde(skip)]
    explicit: bool,
}

fn default_log_filter() -> String {
    "warn,application=info,infrastructure=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
            explicit: false,
        }
    }
}

impl LoggingConfig {
    /// Same configuration with `filter` replacing the configured filter
    ///
    /// The explicit filter takes precedence over `RUST_LOG`.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self.explicit = true;
        self
    }

    /// Filter to install
    ///
    /// Precedence: a filter set with [`LoggingConfig::with_filter`], then
    /// `RUST_LOG`, then the configured filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen directive cannot be parsed.
    pub fn env_filter(&self) -> Result<EnvFilter, TelemetryError> {
        if !self.explicit {
            if let Ok(filter) = EnvFilter::try_from_default_env() {
                return Ok(filter);
            }
        }
        EnvFilter::try_new(&self.filter)
            .map_err(|e| TelemetryError::Filter(format!("{}: {e}", self.filter)))
    }
}

/// Install the global subscriber
///
/// Logs go to stderr so command output on stdout stays clean.
///
/// # Errors
///
/// Fails if the filter is invalid or a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let env_filter = config.env_filter()?;
    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if config.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    installed.map_err(|e| TelemetryError::Init(e.to_string()))?;

    debug!(json = config.json, "Logging initialized");
    Ok(())
}

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),

    /// Log filter directive could not be parsed
    #[error("Invalid log filter: {0}")]
    Filter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = LoggingConfig::default();
        assert!(!config.json);
        assert!(config.filter.contains("application=info"));
    }

    #[test]
    fn with_filter_overrides() {
        let config = LoggingConfig::default().with_filter("debug");
        assert_eq!(config.filter, "debug");
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: LoggingConfig = serde_json::from_str(r#"{"json": true}"#).unwrap();
        assert!(config.json);
        assert_eq!(config.filter, default_log_filter());
    }

    #[test]
    fn explicit_filter_is_used_even_with_rust_log() {
        // An explicit filter never consults RUST_LOG, so a bad directive
        // surfaces whatever the environment holds.
        let config = LoggingConfig::default().with_filter("application=[");
        assert!(matches!(config.env_filter(), Err(TelemetryError::Filter(_))));

        let config = LoggingConfig::default().with_filter("debug");
        assert_eq!(config.env_filter().unwrap().to_string(), "debug");
    }

    #[test]
    fn configured_filter_is_not_explicit() {
        let config: LoggingConfig =
            serde_json::from_str(r#"{"filter": "trace"}"#).unwrap();
        assert!(!config.explicit);
        assert!(LoggingConfig::default().with_filter("info").explicit);
    }
}
