//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod backend_adapter;
mod file_session_store;
mod geocoding_adapter;

pub use backend_adapter::BackendAdapter;
pub use file_session_store::FileSessionStore;
pub use geocoding_adapter::GeocodingAdapter;
