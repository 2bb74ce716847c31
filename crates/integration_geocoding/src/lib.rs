//! Address autocomplete for RideFast
//!
//! Turns partial, free-typed addresses into ranked place suggestions via the
//! [LocationIQ](https://locationiq.com) autocomplete API.
//!
//! # Architecture
//!
//! [`GeocodingClient`] is the interface the application adapter talks to;
//! [`LocationIqClient`] implements it with an in-memory result cache and an
//! optional minimum spacing between outbound requests.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodingClient, LocationIqClient, LocationIqConfig};
//!
//! let config = LocationIqConfig::with_api_key("pk.test");
//! let client = LocationIqClient::new(&config)?;
//!
//! let places = client.autocomplete("10 Downing", 5).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{GeocodingClient, LocationIqClient};
pub use config::LocationIqConfig;
pub use error::GeocodingError;
