//! Data models for trip preferences and itineraries.
//!
//! [`TripPreferences`] is the validated form input and never crosses the
//! network boundary as structured data: it is flattened into an
//! [`ItineraryRequest`] by [`crate::query`]. [`Itinerary`] is what the
//! service returns on success.
//!
//! Option sets ([`AccommodationType`], [`TransportationType`],
//! [`BudgetKind`]) parse from their wire codes case-insensitively, treating
//! `-`, spaces and `_` alike, and display as their wire codes. Each also has
//! a `label()` for human-facing output.

mod itinerary;
mod preferences;


pub use itinerary::{Itinerary, ItineraryRequest};
pub use preferences::{
    AccommodationType, Budget, BudgetKind, TransportationType, TripPreferences,
};
