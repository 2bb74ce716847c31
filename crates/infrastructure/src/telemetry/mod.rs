//! Logging setup
//!
//! Console output through `tracing-subscriber`, human-readable or JSON.

mod logging;

pub use logging::{LoggingConfig, TelemetryError, init_logging};
