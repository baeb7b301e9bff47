//! Projection of the workflow state to markdown.

use std::fmt;

use super::{datetime::LocalDateTime, status::OperationStatus};
use crate::{models::Itinerary, workflow::WorkflowState};

/// Text shown while a request is in flight.
pub const LOADING_TEXT: &str = "Generating itinerary...";

/// Wrapper rendering a [`WorkflowState`]: nothing when Idle, an indicator
/// when Loading, an error line when Error and the itinerary when Success.
pub struct StateView<'a>(pub &'a WorkflowState);

impl<'a> fmt::Display for StateView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            WorkflowState::Idle => Ok(()),
            WorkflowState::Loading => write!(f, "{LOADING_TEXT}"),
            WorkflowState::Error(message) => {
                write!(f, "{}", OperationStatus::failure(message.as_str()))
            }
            WorkflowState::Success(itinerary) => write!(f, "{itinerary}"),
        }
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.itinerary_response.trim_end())?;

        if self.has_metadata() {
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "---")?;
            writeln!(f)?;
            if let Some(id) = &self.id {
                writeln!(f, "**Itinerary:** {id}")?;
            }
            if let Some(created_at) = &self.created_at {
                writeln!(f, "**Created:** {}", LocalDateTime(created_at))?;
            }
            if let Some(updated_at) = &self.updated_at {
                if Some(updated_at) != self.created_at.as_ref() {
                    writeln!(f, "**Updated:** {}", LocalDateTime(updated_at))?;
                }
            }
        }

        Ok(())
    }
}
