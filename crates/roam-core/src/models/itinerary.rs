//! Wire types exchanged with the itinerary service.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Body of `POST /itinerary/`: a single free-text query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItineraryRequest {
    pub query: String,
}

/// A generated itinerary as returned by the service.
///
/// Only serialized; service bodies are read by the HTTP client, which
/// tolerates nulls and odd timestamps.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Itinerary {
    /// Service-assigned identifier, when the service stores itineraries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Query the itinerary was generated from, as echoed by the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Generated itinerary text (markdown)
    pub itinerary_response: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Itinerary {
    /// Creates an itinerary holding only the generated text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            id: None,
            query: None,
            itinerary_response: text.into(),
            created_at: None,
            updated_at: None,
        }
    }

    /// True when the service returned any metadata besides the text.
    pub fn has_metadata(&self) -> bool {
        self.id.is_some() || self.created_at.is_some() || self.updated_at.is_some()
    }
}
