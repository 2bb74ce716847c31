//! Recording fakes shared by service tests
//!
//! Hand-written rather than mockall where tests need to inspect the order
//! of calls after spawned tasks have run.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use domain::{AppRoute, Session, Suggestion};
use parking_lot::Mutex;

use crate::error::ApplicationError;
use crate::ports::{GeocodingPort, NavigatorPort, NotifierPort, SessionPersistencePort};

/// Navigation call as seen by the fake navigator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Push(AppRoute),
    Replace(AppRoute),
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    calls: Mutex<Vec<Navigation>>,
}

impl RecordingNavigator {
    pub fn calls(&self) -> Vec<Navigation> {
        self.calls.lock().clone()
    }
}

impl NavigatorPort for RecordingNavigator {
    fn push(&self, route: &AppRoute) {
        self.calls.lock().push(Navigation::Push(route.clone()));
    }

    fn replace(&self, route: &AppRoute) {
        self.calls.lock().push(Navigation::Replace(route.clone()));
    }
}

/// Toast as seen by the fake notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toast {
    Success(String),
    Error(String),
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }
}

impl NotifierPort for RecordingNotifier {
    fn success(&self, message: &str) {
        self.toasts.lock().push(Toast::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.toasts.lock().push(Toast::Error(message.to_string()));
    }
}

#[derive(Debug, Default)]
pub struct InMemorySessionPersistence {
    stored: Mutex<Option<Session>>,
}

impl InMemorySessionPersistence {
    pub fn with_session(session: Session) -> Self {
        Self {
            stored: Mutex::new(Some(session)),
        }
    }

    pub fn stored(&self) -> Option<Session> {
        self.stored.lock().clone()
    }
}

impl SessionPersistencePort for InMemorySessionPersistence {
    fn load(&self) -> Result<Option<Session>, ApplicationError> {
        Ok(self.stored.lock().clone())
    }

    fn save(&self, session: &Session) -> Result<(), ApplicationError> {
        *self.stored.lock() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), ApplicationError> {
        *self.stored.lock() = None;
        Ok(())
    }
}

/// Geocoder that records every query
///
/// Answers with up to two suggestions named after the query. A delay can be
/// configured per query to simulate slow responses.
#[derive(Debug, Default)]
pub struct RecordingGeocoder {
    queries: Mutex<Vec<String>>,
    delays: HashMap<String, Duration>,
    failing: bool,
}

impl RecordingGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl GeocodingPort for RecordingGeocoder {
    async fn autocomplete(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Suggestion>, ApplicationError> {
        self.queries.lock().push(query.to_string());
        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing {
            return Err(ApplicationError::Provider("HTTP 500".to_string()));
        }
        Ok((0..limit.min(2))
            .map(|i| Suggestion::new(format!("{query} {i}, Somewhere"), "48.8566", "2.3522"))
            .collect())
    }
}
