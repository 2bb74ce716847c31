//! LocationIQ wire types

use domain::Suggestion;
use serde::Deserialize;

/// One entry of an autocomplete response
///
/// Coordinates arrive as decimal strings and are passed through untouched;
/// they are only parsed when the user picks the place.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawPlace {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

impl From<RawPlace> for Suggestion {
    fn from(raw: RawPlace) -> Self {
        Self::new(raw.display_name, raw.lat, raw.lon)
    }
}

/// Error body LocationIQ sends alongside non-2xx statuses
#[derive(Debug, Deserialize)]
pub(crate) struct RawError {
    pub error: String,
}
