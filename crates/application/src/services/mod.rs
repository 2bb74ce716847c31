//! Application services
//!
//! Each service owns one piece of client-side state or one workflow and
//! talks to the outside world only through ports.

mod auth_service;
mod booking_workflow;
mod route_guard;
mod session_store;
mod suggestion_client;
#[cfg(test)]
pub(crate) mod test_support;

pub use auth_service::{AuthService, GENERIC_LOGIN_FAILURE, INVALID_CREDENTIALS, LoginForm};
pub use booking_workflow::{
    BookingState, BookingWorkflow, GENERIC_BOOKING_FAILURE, RIDE_BOOKED_FALLBACK,
};
pub use route_guard::{RouteDecision, RouteGuard, decide_route, landing_route};
pub use session_store::SessionStore;
pub use suggestion_client::{LookupOutcome, SuggestionClient, SuggestionConfig};
