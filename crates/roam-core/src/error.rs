//! Error types for the itinerary workflow.

use std::fmt;

use thiserror::Error;

use crate::form::ValidationErrors;

/// Comprehensive error type for all roam operations.
#[derive(Error, Debug)]
pub enum RoamError {
    /// One or more form fields failed local validation
    #[error("Invalid trip preferences:\n{0}")]
    Validation(ValidationErrors),
    /// The request to the itinerary service could not complete
    #[error("Could not reach the itinerary service: {message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The itinerary service answered with a non-success status
    #[error("{message}")]
    Service { status: u16, message: String },
    /// No itinerary exists for the given ID
    #[error("Itinerary with ID {id} not found")]
    ItineraryNotFound { id: String },
    /// The ID cannot name a stored itinerary (blank or a dot segment)
    #[error("Invalid itinerary ID '{id}'")]
    InvalidItineraryId { id: String },
    /// The service answered but the body was not a usable itinerary
    #[error("Malformed response from the itinerary service: {reason}")]
    MalformedResponse { reason: String },
    /// A request is already in flight
    #[error("An itinerary request is already in progress")]
    SubmissionInProgress,
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl RoamError {
    /// Creates a configuration error with the given message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a malformed response error with the given reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// True for failures of the outbound call, which the workflow turns into
    /// its Error state instead of propagating.
    pub fn is_service_failure(&self) -> bool {
        matches!(
            self,
            RoamError::Transport { .. }
                | RoamError::Service { .. }
                | RoamError::ItineraryNotFound { .. }
                | RoamError::MalformedResponse { .. }
        )
    }
}

impl From<ValidationErrors> for RoamError {
    fn from(errors: ValidationErrors) -> Self {
        RoamError::Validation(errors)
    }
}

/// Specialized extension trait for HTTP transport Results.
pub trait TransportResultExt<T> {
    /// Map reqwest errors with a message.
    fn transport_context(self, message: &str) -> Result<T>;
}

/// Specialized extension trait for configuration-related Results.
pub trait ConfigResultExt<T> {
    /// Map any error into a configuration error with a message.
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T> TransportResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn transport_context(self, message: &str) -> Result<T> {
        self.map_err(|e| RoamError::Transport {
            message: format!("{message}: {e}"),
            source: e,
        })
    }
}

impl<T, E> ConfigResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| RoamError::Configuration {
            message: format!("{context}: {e}"),
        })
    }
}

/// Result type alias for roam operations
pub type Result<T> = std::result::Result<T, RoamError>;
