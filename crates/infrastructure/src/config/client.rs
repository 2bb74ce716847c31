//! Client-side behaviour: booking form and session persistence.

use std::path::PathBuf;
use std::time::Duration;

use application::{ApplicationError, SuggestionConfig};
use domain::MAX_SUGGESTIONS;
use serde::{Deserialize, Serialize};

/// Booking form configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Quiet period after the last keystroke before suggestions are fetched
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Suggestions shown per field
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

const fn default_debounce_ms() -> u64 {
    500
}

const fn default_max_suggestions() -> usize {
    MAX_SUGGESTIONS
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

impl BookingConfig {
    /// Settings for the suggestion client
    #[must_use]
    pub const fn suggestion_config(&self) -> SuggestionConfig {
        SuggestionConfig {
            debounce: Duration::from_millis(self.debounce_ms),
            max_results: self.max_suggestions,
        }
    }

    pub(super) fn validate(&self) -> Result<(), ApplicationError> {
        if self.max_suggestions == 0 || self.max_suggestions > MAX_SUGGESTIONS {
            return Err(ApplicationError::Configuration(format!(
                "booking.max_suggestions must be between 1 and {MAX_SUGGESTIONS}"
            )));
        }
        if self.debounce_ms > 10_000 {
            return Err(ApplicationError::Configuration(
                "booking.debounce_ms must not exceed 10000".to_string(),
            ));
        }
        Ok(())
    }
}

/// Session persistence configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session file; defaults to `~/.ridefast/session.json`
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl SessionConfig {
    /// Session file to use
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map_or_else(|| PathBuf::from("."), PathBuf::from)
                .join(".ridefast")
                .join("session.json")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_defaults_match_form_behaviour() {
        let config = BookingConfig::default();
        let suggestion = config.suggestion_config();
        assert_eq!(suggestion.debounce, Duration::from_millis(500));
        assert_eq!(suggestion.max_results, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn too_many_suggestions_rejected() {
        let config = BookingConfig {
            max_suggestions: 6,
            ..BookingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_suggestions_rejected() {
        let config = BookingConfig {
            max_suggestions: 0,
            ..BookingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn explicit_session_path_wins() {
        let config = SessionConfig {
            path: Some(PathBuf::from("/tmp/s.json")),
        };
        assert_eq!(config.resolved_path(), PathBuf::from("/tmp/s.json"));
    }

    #[test]
    fn default_session_path_is_in_ridefast_dir() {
        let path = SessionConfig::default().resolved_path();
        assert!(path.ends_with(".ridefast/session.json"));
    }
}
