//! Domain entities - Objects with identity and lifecycle

mod booking_draft;
mod ride_request;
mod session;
mod suggestion;
mod user_profile;

pub use booking_draft::{AddressField, BookingDraft};
pub use ride_request::RideRequest;
pub use session::{Credentials, Session};
pub use suggestion::{MAX_SUGGESTIONS, Suggestion, SuggestionSet};
pub use user_profile::{DISPATCHER_EMAIL, UserProfile};
