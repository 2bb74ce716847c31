//! Route guard
//!
//! Decides on every navigation whether the current session may see the
//! requested screen. The decision itself is the pure [`decide_route`]; the
//! [`RouteGuard`] wraps it with the navigation side effect and the
//! re-evaluation loop.

use std::fmt;
use std::sync::Arc;

use domain::{AppRoute, Role, Session, UserProfile, is_driver_area};
use tokio::sync::watch;
use tracing::{debug, instrument};

use super::SessionStore;
use crate::ports::NavigatorPort;

/// Outcome of evaluating a navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// The session may see the requested screen
    Admit,
    /// The session belongs somewhere else
    Redirect(AppRoute),
}

impl RouteDecision {
    /// Whether the guarded content may be rendered
    pub const fn is_admit(&self) -> bool {
        matches!(self, Self::Admit)
    }
}

/// Home screen for an authenticated role
///
/// Drivers land on their dashboard. Riders land on the booking screen,
/// except the dispatcher account which lands on the company screen.
pub fn landing_route(role: Role, user: Option<&UserProfile>) -> AppRoute {
    match role {
        Role::Driver => AppRoute::DriverDashboard,
        Role::NormalUser if user.is_some_and(UserProfile::is_dispatcher) => AppRoute::Company,
        Role::NormalUser => AppRoute::BookRide,
    }
}

/// Decide where a session requesting `path` belongs
///
/// - no token or role: login, whatever the path
/// - rider inside the driver area: company screen for the dispatcher,
///   booking screen for everyone else
/// - driver outside the driver area: driver dashboard
/// - otherwise: admit
pub fn decide_route(session: &Session, path: &str) -> RouteDecision {
    let Some(role) = session.role() else {
        return RouteDecision::Redirect(AppRoute::Login);
    };

    match (role, is_driver_area(path)) {
        (Role::NormalUser, true) | (Role::Driver, false) => {
            RouteDecision::Redirect(landing_route(role, session.user()))
        },
        (Role::NormalUser, false) | (Role::Driver, true) => RouteDecision::Admit,
    }
}

/// Applies [`decide_route`] to the live session and performs redirects
pub struct RouteGuard {
    session: Arc<SessionStore>,
    navigator: Arc<dyn NavigatorPort>,
}

impl fmt::Debug for RouteGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteGuard")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl RouteGuard {
    /// Create a guard over `session` that redirects through `navigator`
    pub fn new(session: Arc<SessionStore>, navigator: Arc<dyn NavigatorPort>) -> Self {
        Self { session, navigator }
    }

    /// Evaluate `path` against the current session
    ///
    /// Redirects replace the current history entry. No navigation is issued
    /// when the redirect target is the path already being shown.
    #[instrument(skip(self))]
    pub fn check(&self, path: &str) -> RouteDecision {
        let decision = decide_route(&self.session.snapshot(), path);
        match &decision {
            RouteDecision::Admit => debug!("Route admitted"),
            RouteDecision::Redirect(route) if route.path() == path => {
                debug!(%route, "Already on redirect target");
            },
            RouteDecision::Redirect(route) => {
                debug!(%route, "Redirecting");
                self.navigator.replace(route);
            },
        }
        decision
    }

    /// Render guarded content only once `path` has been admitted
    ///
    /// Returns `None`, without calling `render`, while a redirect is pending.
    pub fn render<T>(&self, path: &str, render: impl FnOnce() -> T) -> Option<T> {
        self.check(path).is_admit().then(render)
    }

    /// Re-evaluate whenever the session or the current path changes
    ///
    /// Runs until either the path sender or the session store goes away.
    pub async fn run(&self, mut path: watch::Receiver<String>) {
        let mut session = self.session.subscribe();
        loop {
            let current = path.borrow_and_update().clone();
            session.mark_unchanged();
            self.check(&current);

            tokio::select! {
                changed = session.changed() => if changed.is_err() { break },
                changed = path.changed() => if changed.is_err() { break },
            }
        }
        debug!("Route guard stopped");
    }
}
