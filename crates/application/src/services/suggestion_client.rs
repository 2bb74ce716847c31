//! Debounced address suggestions
//!
//! Every call to [`SuggestionClient::lookup`] is tagged with a sequence
//! number. A call only reaches the provider if no newer call was issued
//! during the debounce window, and the caller applies a result only while
//! [`SuggestionClient::is_latest`] still holds for it.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use domain::{AddressField, MAX_SUGGESTIONS, SuggestionSet};
use parking_lot::Mutex;
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::GeocodingPort;

/// Tuning for [`SuggestionClient`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionConfig {
    /// Quiet period after the last keystroke before the provider is asked
    pub debounce: Duration,
    /// Suggestions requested per lookup, capped at [`MAX_SUGGESTIONS`]
    pub max_results: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
            max_results: MAX_SUGGESTIONS,
        }
    }
}

/// Result of one lookup
#[derive(Debug)]
pub enum LookupOutcome {
    /// A newer lookup was issued before this one left the debounce window
    Superseded,
    /// Suggestions for the query; empty when the text was blank
    Ready {
        seq: u64,
        suggestions: SuggestionSet,
    },
    /// The provider failed; callers show an empty set
    Failed { seq: u64, error: ApplicationError },
}

impl LookupOutcome {
    /// Sequence number of a lookup that reached a result
    pub const fn seq(&self) -> Option<u64> {
        match self {
            Self::Superseded => None,
            Self::Ready { seq, .. } | Self::Failed { seq, .. } => Some(*seq),
        }
    }
}

/// Trailing-edge debounced front for a [`GeocodingPort`]
pub struct SuggestionClient {
    geocoder: Arc<dyn GeocodingPort>,
    config: SuggestionConfig,
    issued: AtomicU64,
    latest: Mutex<[u64; 2]>,
}

impl fmt::Debug for SuggestionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionClient")
            .field("config", &self.config)
            .field("issued", &self.issued.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl SuggestionClient {
    /// Create a client in front of `geocoder`
    pub fn new(geocoder: Arc<dyn GeocodingPort>, config: SuggestionConfig) -> Self {
        Self {
            geocoder,
            config: SuggestionConfig {
                max_results: config.max_results.clamp(1, MAX_SUGGESTIONS),
                ..config
            },
            issued: AtomicU64::new(0),
            latest: Mutex::new([0; 2]),
        }
    }

    /// Active configuration
    pub const fn config(&self) -> SuggestionConfig {
        self.config
    }

    /// Look up suggestions for `text` typed into `field`
    ///
    /// Blank text resolves immediately to an empty set without contacting
    /// the provider, but still supersedes any pending lookup.
    #[instrument(skip(self))]
    pub async fn lookup(&self, field: AddressField, text: &str) -> LookupOutcome {
        let seq = self.issue(field);
        let query = text.trim();
        if query.is_empty() {
            return LookupOutcome::Ready {
                seq,
                suggestions: SuggestionSet::empty(),
            };
        }

        tokio::time::sleep(self.config.debounce).await;
        if self.issued.load(Ordering::SeqCst) != seq {
            debug!(seq, "Lookup superseded during debounce");
            return LookupOutcome::Superseded;
        }

        match self.geocoder.autocomplete(query, self.config.max_results).await {
            Ok(found) => {
                let suggestions: SuggestionSet = found.into_iter().collect();
                debug!(seq, count = suggestions.len(), "Suggestions received");
                LookupOutcome::Ready { seq, suggestions }
            },
            Err(error) => {
                warn!(seq, error = %error, "Suggestion lookup failed");
                LookupOutcome::Failed { seq, error }
            },
        }
    }

    /// Whether `seq` is the most recent lookup issued for `field`
    pub fn is_latest(&self, field: AddressField, seq: u64) -> bool {
        self.latest.lock()[field.index()] == seq
    }

    /// Make every outstanding lookup for `field` stale
    pub fn invalidate(&self, field: AddressField) {
        self.issue(field);
    }

    fn issue(&self, field: AddressField) -> u64 {
        let mut latest = self.latest.lock();
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        latest[field.index()] = seq;
        seq
    }
}
