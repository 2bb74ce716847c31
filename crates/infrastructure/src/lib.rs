//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the booking backend,
//! the geocoding provider and file-backed session persistence. Also owns
//! configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, BackendConfig, BookingConfig, Environment, LocationIqConfig, SessionConfig,
};
pub use telemetry::{LoggingConfig, TelemetryError, init_logging};
