//! Flattening of trip preferences into the free-text itinerary query.
//!
//! The itinerary service accepts natural language only, so every populated
//! preference is written into one paragraph. Interests and dietary
//! restrictions each add a clause only when present.

use crate::models::{BudgetKind, ItineraryRequest, TripPreferences};

impl ItineraryRequest {
    /// Builds the request for `preferences`. Deterministic: the same
    /// preferences always produce the same query.
    pub fn from_preferences(preferences: &TripPreferences) -> Self {
        Self {
            query: build_query(preferences),
        }
    }
}

impl From<&TripPreferences> for ItineraryRequest {
    fn from(preferences: &TripPreferences) -> Self {
        Self::from_preferences(preferences)
    }
}

/// Composes the query text for `preferences`.
pub fn build_query(preferences: &TripPreferences) -> String {
    let budget_phrase = match preferences.budget.kind {
        BudgetKind::PerDay => "per-day",
        BudgetKind::Total => "total",
    };

    let mut query = format!(
        "Plan a {days}-day trip to {destination} from {start} to {end} with a {budget_phrase} \
         budget of {amount}. Preferred accommodation type: {accommodation}. \
         Preferred transportation: {transportation}.",
        days = preferences.duration_days(),
        destination = preferences.destination,
        start = preferences.start_date,
        end = preferences.end_date,
        amount = preferences.budget.formatted_amount(),
        accommodation = preferences.accommodation.as_str(),
        transportation = preferences.transportation.as_str(),
    );

    if !preferences.interests.is_empty() {
        query.push_str(&format!(
            " Interests include {}.",
            preferences.interests.join(", ")
        ));
    }
    if !preferences.dietary_restrictions.is_empty() {
        query.push_str(&format!(
            " Dietary restrictions: {}.",
            preferences.dietary_restrictions.join(", ")
        ));
    }

    query
}
