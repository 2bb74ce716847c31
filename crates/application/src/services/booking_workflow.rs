//! Booking workflow
//!
//! Drives a [`BookingDraft`] from the first keystroke to a submitted ride
//! request. All form state lives behind one lock and every event handler
//! applies its change in a single critical section, so observers never see
//! half an update.

use std::fmt;
use std::sync::Arc;

use domain::{AddressField, AppRoute, BookingDraft, FieldError, GeoLocation, RideId, Suggestion, SuggestionSet};
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use super::{LookupOutcome, SessionStore, SuggestionClient};
use crate::error::ApplicationError;
use crate::ports::{NavigatorPort, NotifierPort, RidePort};

/// Toast shown when a ride request fails for reasons other than validation,
/// rejection or an expired session
pub const GENERIC_BOOKING_FAILURE: &str = "An error occurred while Booking Ride";

/// Success toast used when the backend sends no message
pub const RIDE_BOOKED_FALLBACK: &str = "Ride Booked successfully";

/// Snapshot of the booking form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingState {
    /// Text and coordinates of both fields
    pub draft: BookingDraft,
    /// Field currently receiving suggestions
    pub active_field: Option<AddressField>,
    /// Suggestions for the active field
    pub suggestions: SuggestionSet,
    /// Errors from the last submit attempt, cleared per field on edit
    pub field_errors: Vec<FieldError>,
    /// Last suggestion lookup failure, if the latest lookup failed
    pub provider_error: Option<String>,
    /// A ride request is on its way to the backend
    pub submitting: bool,
    /// Fields the user has left at least once
    pub touched: [bool; 2],
}

impl BookingState {
    /// Error message for `field`, if any
    pub fn field_error(&self, field: AddressField) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|e| e.field == field.as_str())
            .map(|e| e.message.as_str())
    }

    /// Whether `field` has been blurred or submitted
    pub const fn is_touched(&self, field: AddressField) -> bool {
        self.touched[field.index()]
    }
}

struct Inner {
    state: Mutex<BookingState>,
    pending: Mutex<Option<JoinHandle<()>>>,
    suggestions: SuggestionClient,
    rides: Arc<dyn RidePort>,
    session: Arc<SessionStore>,
    navigator: Arc<dyn NavigatorPort>,
    notifier: Arc<dyn NotifierPort>,
}

/// Controller behind the booking screen
///
/// Cheap to clone; clones share the same form.
#[derive(Clone)]
pub struct BookingWorkflow {
    inner: Arc<Inner>,
}

impl fmt::Debug for BookingWorkflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingWorkflow")
            .field("state", &*self.inner.state.lock())
            .field("suggestions", &self.inner.suggestions)
            .finish_non_exhaustive()
    }
}

impl BookingWorkflow {
    /// Create a workflow with an empty form
    pub fn new(
        suggestions: SuggestionClient,
        rides: Arc<dyn RidePort>,
        session: Arc<SessionStore>,
        navigator: Arc<dyn NavigatorPort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(BookingState::default()),
                pending: Mutex::new(None),
                suggestions,
                rides,
                session,
                navigator,
                notifier,
            }),
        }
    }

    /// Copy of the current form state
    pub fn state(&self) -> BookingState {
        self.inner.state.lock().clone()
    }

    /// User typed into `field`
    ///
    /// Replaces the text, drops any coordinates the field had, makes the
    /// field active and schedules a debounced suggestion lookup. Must be
    /// called from within a Tokio runtime.
    pub fn on_field_change(&self, field: AddressField, text: &str) {
        {
            let mut state = self.inner.state.lock();
            state.draft.set_text(field, text);
            if state.active_field != Some(field) {
                state.suggestions = SuggestionSet::empty();
            }
            state.active_field = Some(field);
            state.field_errors.retain(|e| e.field != field.as_str());
        }

        let inner = Arc::clone(&self.inner);
        let text = text.to_string();
        let task = tokio::spawn(async move {
            let outcome = inner.suggestions.lookup(field, &text).await;
            inner.apply_lookup(field, outcome);
        });
        if let Some(previous) = self.inner.pending.lock().replace(task) {
            previous.abort();
        }
    }

    /// Field gained focus
    pub fn on_focus(&self, field: AddressField) {
        let mut state = self.inner.state.lock();
        if state.active_field != Some(field) {
            state.suggestions = SuggestionSet::empty();
            state.provider_error = None;
        }
        state.active_field = Some(field);
    }

    /// Field lost focus
    ///
    /// Suggestions stay up so a click on one of them still lands.
    pub fn on_blur(&self, field: AddressField) {
        self.inner.state.lock().touched[field.index()] = true;
    }

    /// User picked `suggestion` for the active field
    ///
    /// Returns the resolved coordinates, or `None` when no field is active
    /// or the suggestion's coordinates are unusable. In the latter case the
    /// text is still taken and the field reports an error.
    #[instrument(skip(self, suggestion), fields(display_name = %suggestion.display_name))]
    pub fn on_suggestion_select(&self, suggestion: &Suggestion) -> Option<GeoLocation> {
        self.cancel_pending();

        let mut state = self.inner.state.lock();
        let Some(field) = state.active_field.take() else {
            debug!("Suggestion selected with no active field");
            return None;
        };
        self.inner.suggestions.invalidate(field);
        state.suggestions = SuggestionSet::empty();
        state.provider_error = None;
        state.field_errors.retain(|e| e.field != field.as_str());

        match state.draft.resolve(field, suggestion) {
            Ok(location) => {
                debug!(%field, %location, "Address resolved");
                Some(location)
            },
            Err(e) => {
                warn!(%field, error = %e, "Suggestion carries unusable coordinates");
                state
                    .field_errors
                    .push(FieldError::new(field.as_str(), e.to_string()));
                None
            },
        }
    }

    /// Select the `index`-th suggestion currently on display
    pub fn select_suggestion(&self, index: usize) -> Option<GeoLocation> {
        let suggestion = self.inner.state.lock().suggestions.get(index).cloned()?;
        self.on_suggestion_select(&suggestion)
    }

    /// Wait for the scheduled suggestion lookup, if any, to finish
    pub async fn settle(&self) {
        let pending = self.inner.pending.lock().take();
        if let Some(task) = pending {
            // A cancelled lookup has nothing left to apply.
            let _ = task.await;
        }
    }

    /// Validate the form and request the ride
    ///
    /// On success the user is notified, the form is cleared and the ride
    /// detail screen is pushed. An expired session redirects to login with
    /// no toast. Rejections and transport failures are shown as toasts and
    /// leave the form as it was.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<RideId, ApplicationError> {
        let request = {
            let mut state = self.inner.state.lock();
            if state.submitting {
                return Err(ApplicationError::SubmissionInFlight);
            }
            state.touched = [true; 2];
            match state.draft.to_ride_request() {
                Ok(request) => {
                    state.field_errors.clear();
                    state.submitting = true;
                    request
                },
                Err(e) => {
                    let err = ApplicationError::from(e);
                    state.field_errors = err.field_errors().to_vec();
                    debug!(errors = state.field_errors.len(), "Booking form invalid");
                    return Err(err);
                },
            }
        };
        let _submitting = SubmittingGuard(&self.inner.state);

        let Some(token) = self.inner.session.token() else {
            warn!("Ride requested without a session");
            self.inner.navigator.replace(&AppRoute::Login);
            return Err(ApplicationError::AuthExpired);
        };

        match self.inner.rides.request_ride(&token, &request).await {
            Ok(confirmation) => {
                let message = confirmation
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| RIDE_BOOKED_FALLBACK.to_string());
                info!(ride_id = %confirmation.id, "Ride booked");
                self.clear_form();
                self.inner.notifier.success(&message);
                self.inner
                    .navigator
                    .push(&AppRoute::RideDetail(confirmation.id.clone()));
                Ok(confirmation.id)
            },
            Err(ApplicationError::AuthExpired) => {
                self.inner.session.expire();
                self.inner.navigator.replace(&AppRoute::Login);
                Err(ApplicationError::AuthExpired)
            },
            Err(ApplicationError::SubmissionRejected(message)) => {
                info!(%message, "Ride request rejected");
                self.inner.notifier.error(&message);
                Err(ApplicationError::SubmissionRejected(message))
            },
            Err(e) => {
                warn!(error = %e, "Ride request failed");
                self.inner.notifier.error(GENERIC_BOOKING_FAILURE);
                Err(e)
            },
        }
    }

    /// Discard the form, e.g. when the screen is left
    pub fn reset(&self) {
        self.cancel_pending();
        self.clear_form();
    }

    fn clear_form(&self) {
        let mut state = self.inner.state.lock();
        for field in AddressField::ALL {
            self.inner.suggestions.invalidate(field);
        }
        let submitting = state.submitting;
        *state = BookingState {
            submitting,
            ..BookingState::default()
        };
    }

    fn cancel_pending(&self) {
        if let Some(task) = self.inner.pending.lock().take() {
            task.abort();
        }
    }
}

impl Inner {
    fn apply_lookup(&self, field: AddressField, outcome: LookupOutcome) {
        let mut state = self.state.lock();
        let current = outcome
            .seq()
            .is_some_and(|seq| self.suggestions.is_latest(field, seq))
            && state.active_field == Some(field);
        if !current {
            debug!(%field, "Discarding stale suggestions");
            return;
        }

        match outcome {
            LookupOutcome::Ready { suggestions, .. } => {
                state.suggestions = suggestions;
                state.provider_error = None;
            },
            LookupOutcome::Failed { error, .. } => {
                state.suggestions = SuggestionSet::empty();
                state.provider_error = Some(error.to_string());
            },
            LookupOutcome::Superseded => {},
        }
    }
}

/// Clears the in-flight flag however the submission ends
struct SubmittingGuard<'a>(&'a Mutex<BookingState>);

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.lock().submitting = false;
    }
}
