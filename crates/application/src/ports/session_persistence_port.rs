//! Session persistence port
//!
//! Keeps token, role and profile across restarts. The store behind it is
//! owned elsewhere; the session store only reads it on start-up and writes
//! it back on login and logout.

use domain::Session;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for persisting the session between runs
#[cfg_attr(test, automock)]
pub trait SessionPersistencePort: Send + Sync {
    /// Load the persisted session, `None` if nothing was stored
    fn load(&self) -> Result<Option<Session>, ApplicationError>;

    /// Persist the session
    fn save(&self, session: &Session) -> Result<(), ApplicationError>;

    /// Remove any persisted session
    fn clear(&self) -> Result<(), ApplicationError>;
}
