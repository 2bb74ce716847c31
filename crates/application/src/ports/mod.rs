//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod auth_port;
mod geocoding_port;
mod navigator_port;
mod notifier_port;
mod ride_port;
mod session_persistence_port;

#[cfg(test)]
pub use auth_port::MockAuthPort;
pub use auth_port::{AuthPort, LoginCredentials, LoginGrant};
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use navigator_port::MockNavigatorPort;
pub use navigator_port::NavigatorPort;
#[cfg(test)]
pub use notifier_port::MockNotifierPort;
pub use notifier_port::NotifierPort;
#[cfg(test)]
pub use ride_port::MockRidePort;
pub use ride_port::{RideConfirmation, RidePort};
#[cfg(test)]
pub use session_persistence_port::MockSessionPersistencePort;
pub use session_persistence_port::SessionPersistencePort;
