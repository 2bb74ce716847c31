//! Session store
//!
//! Single owner of the authentication state. Every transition replaces the
//! whole [`Session`] in one step, so readers never observe a half-written
//! session, and is broadcast on a watch channel so the route guard can
//! re-evaluate.

use std::fmt;
use std::sync::Arc;

use domain::{AuthToken, Role, Session, UserProfile};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::ports::SessionPersistencePort;

/// Process-wide authentication state with an explicit lifecycle
pub struct SessionStore {
    state: watch::Sender<Session>,
    persistence: Arc<dyn SessionPersistencePort>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create an unauthenticated store backed by `persistence`
    pub fn new(persistence: Arc<dyn SessionPersistencePort>) -> Self {
        let (state, _) = watch::channel(Session::anonymous());
        Self { state, persistence }
    }

    /// Load the persisted session, if any, and make it current
    ///
    /// A missing or unreadable record leaves the store unauthenticated.
    pub fn restore(&self) -> Session {
        let session = match self.persistence.load() {
            Ok(Some(session)) => session,
            Ok(None) => Session::anonymous(),
            Err(e) => {
                warn!(error = %e, "Failed to load persisted session");
                Session::anonymous()
            },
        };
        debug!(authenticated = session.is_authenticated(), "Session restored");
        self.state.send_replace(session.clone());
        session
    }

    /// Establish a new session after a successful login
    pub fn login(&self, token: AuthToken, role: Role) {
        let session = Session::authenticated(token, role);
        self.persist(&session);
        self.state.send_replace(session);
        info!(%role, "Session established");
    }

    /// Record the profile of the signed-in user
    ///
    /// Ignored when nobody is signed in, so a profile response that arrives
    /// after logout cannot resurrect the session.
    pub fn refresh_user(&self, user: UserProfile) {
        let mut updated = None;
        self.state.send_if_modified(|session| {
            if !session.is_authenticated() {
                return false;
            }
            *session = std::mem::take(session).with_user(user);
            updated = Some(session.clone());
            true
        });

        match updated {
            Some(session) => self.persist(&session),
            None => debug!("Ignoring profile for unauthenticated session"),
        }
    }

    /// End the session at the user's request
    pub fn logout(&self) {
        self.clear();
        info!("Logged out");
    }

    /// End the session because the backend rejected the token
    pub fn expire(&self) {
        self.clear();
        warn!("Session expired; backend rejected the token");
    }

    /// Copy of the current session
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Bearer token of the current session
    pub fn token(&self) -> Option<AuthToken> {
        self.state.borrow().token().cloned()
    }

    /// Whether a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Receiver notified on every session transition
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    fn clear(&self) {
        self.state.send_replace(Session::anonymous());
        if let Err(e) = self.persistence.clear() {
            warn!(error = %e, "Failed to clear persisted session");
        }
    }

    fn persist(&self, session: &Session) {
        if let Err(e) = self.persistence.save(session) {
            warn!(error = %e, "Failed to persist session");
        }
    }
}
