//! Validated ride request sent to the booking API

use serde::{Deserialize, Serialize};

/// Body of `POST /rides`
///
/// Only constructed from a draft that passed validation, so every coordinate
/// is a real number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideRequest {
    /// Pickup address as displayed
    pub pickup_area: String,
    /// Destination address as displayed
    pub destination_area: String,
    /// Pickup latitude
    pub pickup_latitude: f64,
    /// Pickup longitude
    pub pickup_longitude: f64,
    /// Destination latitude
    pub destination_latitude: f64,
    /// Destination longitude
    pub destination_longitude: f64,
}
