//! Address suggestions returned by the geocoder

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::GeoLocation;

/// Upper bound on suggestions shown for one query
pub const MAX_SUGGESTIONS: usize = 5;

/// A single place suggestion
///
/// Coordinates are kept in the textual form the geocoder returns and only
/// parsed when the suggestion is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Full human-readable place name
    pub display_name: String,
    /// Latitude as returned by the provider
    pub latitude: String,
    /// Longitude as returned by the provider
    pub longitude: String,
}

impl Suggestion {
    /// Create a suggestion
    pub fn new(
        display_name: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// First component of the display name (the place itself)
    pub fn title(&self) -> &str {
        self.display_name
            .split_once(',')
            .map_or(self.display_name.as_str(), |(head, _)| head)
            .trim()
    }

    /// Remainder of the display name (the surrounding area)
    pub fn subtitle(&self) -> &str {
        self.display_name
            .split_once(',')
            .map_or("", |(_, tail)| tail)
            .trim()
    }

    /// Parse the coordinates
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if the provider sent values
    /// that are not valid coordinates.
    pub fn location(&self) -> Result<GeoLocation, DomainError> {
        GeoLocation::parse(&self.latitude, &self.longitude)
    }
}

/// Ordered suggestions for one query, at most [`MAX_SUGGESTIONS`] long
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionSet {
    items: Vec<Suggestion>,
}

impl SuggestionSet {
    /// An empty set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of suggestions
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set holds no suggestions
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Suggestion at `index`
    pub fn get(&self, index: usize) -> Option<&Suggestion> {
        self.items.get(index)
    }

    /// Iterate in rank order
    pub fn iter(&self) -> std::slice::Iter<'_, Suggestion> {
        self.items.iter()
    }
}

impl FromIterator<Suggestion> for SuggestionSet {
    fn from_iter<I: IntoIterator<Item = Suggestion>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().take(MAX_SUGGESTIONS).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SuggestionSet {
    type Item = &'a Suggestion;
    type IntoIter = std::slice::Iter<'a, Suggestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
