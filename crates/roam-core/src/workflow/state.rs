//! Lifecycle state of an itinerary request.

use crate::models::Itinerary;

/// Exactly one of these is active at any time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WorkflowState {
    /// No request in flight, nothing to show
    #[default]
    Idle,

    /// One request is in flight
    Loading,

    /// The service answered with a usable itinerary
    Success(Itinerary),

    /// The request failed; holds a human-readable message
    Error(String),
}

impl WorkflowState {
    pub fn is_idle(&self) -> bool {
        matches!(self, WorkflowState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, WorkflowState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, WorkflowState::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, WorkflowState::Error(_))
    }

    /// The itinerary, when in Success.
    pub fn itinerary(&self) -> Option<&Itinerary> {
        match self {
            WorkflowState::Success(itinerary) => Some(itinerary),
            _ => None,
        }
    }

    /// The error message, when in Error.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            WorkflowState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Short lowercase name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::Loading => "loading",
            WorkflowState::Success(_) => "success",
            WorkflowState::Error(_) => "error",
        }
    }
}
