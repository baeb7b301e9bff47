//! Submission workflow: the request lifecycle state machine.
//!
//! The [`Workflow`] owns the single [`WorkflowState`] value and is the only
//! writer of it. Callers drive it with [`Workflow::submit`] (or
//! [`Workflow::load`] for a stored itinerary) and observe it either through
//! the returned terminal state or by subscribing to every transition.
//!
//! ```text
//!   Idle ──┐
//!  Error ──┼── submit ──▶ Loading ── resolve ──▶ Success
//! Success ─┘                 │
//!                            └──── reject ────▶ Error
//! ```
//!
//! Submitting while Loading is refused with
//! [`RoamError::SubmissionInProgress`] and issues no request. Entering
//! Loading discards the previous result before the request is sent. There is
//! no cancel transition; a request whose future is dropped or whose service
//! panics ends in Error with [`INTERRUPTED_MESSAGE`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use roam_core::{ConfigBuilder, HttpItineraryClient, TripForm, Workflow};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigBuilder::new().with_env().build()?;
//! let workflow = Workflow::new(HttpItineraryClient::new(config));
//!
//! let form = TripForm {
//!     destination: "Paris".to_string(),
//!     start_date: Some("2025-06-01".to_string()),
//!     end_date: Some("2025-06-05".to_string()),
//!     budget: Some("100".to_string()),
//!     accommodation: Some("mid_range".to_string()),
//!     transportation: Some("public".to_string()),
//!     ..Default::default()
//! };
//!
//! let state = form.submit(&workflow).await?;
//! if let Some(itinerary) = state.itinerary() {
//!     println!("{}", itinerary.itinerary_response);
//! }
//! # Ok(())
//! # }
//! ```

mod state;


use log::{debug, info, warn};
use tokio::sync::watch;

pub use state::WorkflowState;

use crate::{
    client::{checked_itinerary_id, ItineraryService},
    error::{Result, RoamError},
    models::{Itinerary, ItineraryRequest, TripPreferences},
};

/// Error message left behind by a request that never completed.
pub const INTERRUPTED_MESSAGE: &str = "Itinerary request was interrupted";

/// State container for one itinerary request at a time.
pub struct Workflow<S> {
    service: S,
    state: watch::Sender<WorkflowState>,
}

impl<S> Workflow<S>
where
    S: ItineraryService,
{
    /// Creates a workflow in the Idle state.
    pub fn new(service: S) -> Self {
        let (state, _) = watch::channel(WorkflowState::Idle);
        Self { service, state }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> WorkflowState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Receiver notified on every transition.
    pub fn subscribe(&self) -> watch::Receiver<WorkflowState> {
        self.state.subscribe()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Serializes `preferences`, sends exactly one create request and returns
    /// the terminal state.
    ///
    /// Service failures end in [`WorkflowState::Error`] and are not returned
    /// as `Err`.
    ///
    /// # Errors
    ///
    /// Returns `RoamError::SubmissionInProgress` if a request is already in
    /// flight; the state is left untouched.
    pub async fn submit(&self, preferences: TripPreferences) -> Result<WorkflowState> {
        let in_flight = self.begin()?;

        let request = ItineraryRequest::from_preferences(&preferences);
        info!(
            "Requesting itinerary for {} ({} days)",
            preferences.destination,
            preferences.duration_days()
        );
        debug!("Itinerary query: {}", request.query);

        let outcome = self.service.create_itinerary(&request).await;
        Ok(finish(in_flight, outcome))
    }

    /// Fetches a stored itinerary through the same lifecycle as
    /// [`Workflow::submit`].
    ///
    /// # Errors
    ///
    /// Returns `RoamError::InvalidItineraryId` for a blank or dot-segment ID
    /// and `RoamError::SubmissionInProgress` if a request is already in
    /// flight. Neither touches the state.
    pub async fn load(&self, id: &str) -> Result<WorkflowState> {
        let id = checked_itinerary_id(id)?;
        let in_flight = self.begin()?;
        info!("Fetching itinerary {id}");

        let outcome = self.service.get_itinerary(id).await;
        Ok(finish(in_flight, outcome))
    }

    /// Returns to Idle, dropping any result. Ignored while Loading.
    pub fn reset(&self) {
        self.state.send_if_modified(|state| {
            if state.is_loading() || state.is_idle() {
                false
            } else {
                *state = WorkflowState::Idle;
                true
            }
        });
    }

    /// Atomically moves into Loading unless a request is already in flight.
    /// The previous result is replaced in the same step.
    fn begin(&self) -> Result<InFlight<'_>> {
        let mut accepted = false;
        self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            debug!("Workflow transition {} -> loading", state.name());
            *state = WorkflowState::Loading;
            accepted = true;
            true
        });

        if accepted {
            Ok(InFlight {
                state: &self.state,
                settled: false,
            })
        } else {
            warn!("Rejected submission while a request is in flight");
            Err(RoamError::SubmissionInProgress)
        }
    }
}

/// Claim on the Loading state for one request. Dropping it unsettled moves
/// Loading to Error so the workflow accepts the next submission.
struct InFlight<'a> {
    state: &'a watch::Sender<WorkflowState>,
    settled: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        warn!("Itinerary request dropped before completion");
        self.state.send_if_modified(|state| {
            if !state.is_loading() {
                return false;
            }
            debug!("Workflow transition loading -> error (interrupted)");
            *state = WorkflowState::Error(INTERRUPTED_MESSAGE.to_string());
            true
        });
    }
}

/// Resolves or rejects the in-flight request.
fn finish(mut in_flight: InFlight<'_>, outcome: Result<Itinerary>) -> WorkflowState {
    let next = match outcome {
        Ok(itinerary) => {
            info!("Itinerary received ({} bytes)", itinerary.itinerary_response.len());
            WorkflowState::Success(itinerary)
        }
        Err(e) => {
            warn!("Itinerary request failed: {e}");
            WorkflowState::Error(failure_message(&e))
        }
    };

    debug!("Workflow transition loading -> {}", next.name());
    in_flight.state.send_replace(next.clone());
    in_flight.settled = true;
    next
}

/// Message shown for a failed request; never empty.
fn failure_message(error: &RoamError) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        "Failed to generate itinerary".to_string()
    } else {
        message
    }
}
