//! Application layer - Use cases and orchestration
//!
//! Holds the session store, the route guard, the debounced suggestion client
//! and the booking workflow, plus the ports through which they reach the
//! backend, the geocoder, navigation and notifications.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
