//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A geographic location with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates(format!(
                "{latitude}, {longitude}"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse a location from the textual latitude/longitude pair geocoders return
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if either value is not a
    /// number or the pair is out of range.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, DomainError> {
        let lat: f64 = latitude
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidCoordinates(format!("latitude {latitude:?}")))?;
        let lon: f64 = longitude
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidCoordinates(format!("longitude {longitude:?}")))?;
        Self::new(lat, lon)
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let loc = GeoLocation::new(51.5034, -0.1276).expect("valid coordinates");
        assert!((loc.latitude() - 51.5034).abs() < f64::EPSILON);
        assert!((loc.longitude() - -0.1276).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
        assert!(GeoLocation::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(GeoLocation::new(91.0, 0.0).is_err());
        assert!(GeoLocation::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(GeoLocation::new(0.0, 181.0).is_err());
        assert!(GeoLocation::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_parse_geocoder_strings() {
        let loc = GeoLocation::parse("51.5034", "-0.1276").expect("valid");
        assert!((loc.latitude() - 51.5034).abs() < f64::EPSILON);
        assert!((loc.longitude() + 0.1276).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(GeoLocation::parse("north", "-0.1276").is_err());
        assert!(GeoLocation::parse("51.5", "").is_err());
        assert!(GeoLocation::parse("100.0", "0.0").is_err());
    }

    #[test]
    fn test_display() {
        let loc = GeoLocation::new(52.52, 13.405).expect("valid");
        assert_eq!(loc.to_string(), "52.520000, 13.405000");
    }
}
