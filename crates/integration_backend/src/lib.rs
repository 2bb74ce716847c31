//! HTTP client for the RideFast booking backend
//!
//! Covers the three conversations the client has with the backend: logging
//! in, fetching the signed-in account's profile and requesting a ride.
//!
//! The backend reports failures in three ways, all folded into
//! [`BackendError`]: HTTP 401 (or a body carrying `"code": 401`) means the
//! token is no longer valid, a body with `"error": true` is a business
//! rejection whose `message` is meant for the user, and anything else that
//! is not a 2xx is a plain request failure.

mod client;
mod config;
mod error;
mod models;

pub use client::{BackendClient, RideBackendClient};
pub use config::BackendConfig;
pub use error::BackendError;
pub use models::{LoginResponse, RideBooked};
