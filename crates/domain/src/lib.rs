//! Domain layer for the RideFast client
//!
//! Contains the session model, the booking draft and its suggestions, and the
//! value objects the rest of the workspace speaks in. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::{DomainError, FieldError, field_errors_from};
pub use value_objects::*;
