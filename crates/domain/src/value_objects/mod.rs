//! Value Objects - Immutable, identity-less domain primitives

mod app_route;
mod auth_token;
mod email_address;
mod geo_location;
mod ride_id;
mod role;

pub use app_route::{AppRoute, DRIVER_AREA_PREFIX, is_driver_area};
pub use auth_token::AuthToken;
pub use email_address::EmailAddress;
pub use geo_location::GeoLocation;
pub use ride_id::RideId;
pub use role::Role;
