//! Preference form: raw field values and their validation.
//!
//! A [`TripForm`] holds exactly what the user typed. Nothing is parsed until
//! [`TripForm::validate`] runs, which checks every field and reports all
//! failures at once as [`ValidationErrors`]. Only a fully valid form yields a
//! [`TripPreferences`] and only then can it reach the workflow.
//!
//! ```rust
//! use roam_core::form::{FormField, TripForm};
//!
//! let form = TripForm {
//!     destination: "Paris".to_string(),
//!     start_date: Some("2025-06-05".to_string()),
//!     end_date: Some("2025-06-01".to_string()),
//!     budget: Some("0".to_string()),
//!     accommodation: Some("mid_range".to_string()),
//!     transportation: Some("public".to_string()),
//!     ..Default::default()
//! };
//!
//! let errors = form.validate().unwrap_err();
//! assert!(errors.has(FormField::EndDate));
//! assert!(errors.has(FormField::Budget));
//! ```

use std::fmt;

use jiff::civil::Date;
use log::debug;

use crate::{
    client::ItineraryService,
    error::{Result, RoamError},
    models::{AccommodationType, Budget, BudgetKind, TransportationType, TripPreferences},
    workflow::{Workflow, WorkflowState},
};

/// Fields of the preference form that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Destination,
    StartDate,
    EndDate,
    Budget,
    BudgetKind,
    Accommodation,
    Transportation,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Destination => "destination",
            FormField::StartDate => "start_date",
            FormField::EndDate => "end_date",
            FormField::Budget => "budget",
            FormField::BudgetKind => "budget_type",
            FormField::Accommodation => "accommodation",
            FormField::Transportation => "transportation",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Every validation failure found in one pass over the form, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when at least one failure is reported for `field`.
    pub fn has(&self, field: FormField) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Messages reported for `field`.
    pub fn messages_for(&self, field: FormField) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "- {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Raw values of the preference form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripForm {
    pub destination: String,
    /// `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`
    pub end_date: Option<String>,
    pub budget: Option<String>,
    /// `per_day` (default) or `total`
    pub budget_kind: Option<String>,
    pub interests: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub accommodation: Option<String>,
    pub transportation: Option<String>,
}

impl TripForm {
    /// Validates every field, returning the preferences or all failures.
    pub fn validate(&self) -> std::result::Result<TripPreferences, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let destination = self.destination.trim();
        if destination.is_empty() {
            errors.push(FormField::Destination, "Destination is required");
        }

        let start_date = parse_date(
            self.start_date.as_deref(),
            FormField::StartDate,
            "Start date",
            &mut errors,
        );
        let end_date = parse_date(
            self.end_date.as_deref(),
            FormField::EndDate,
            "End date",
            &mut errors,
        );
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if start > end {
                errors.push(FormField::EndDate, "End date cannot be before start date");
            }
        }

        let amount = match self.budget.as_deref().map(str::trim) {
            Some(raw) => match raw.parse::<f64>() {
                Ok(v) if v.is_finite() && v > 0.0 => Some(v),
                _ => None,
            },
            None => None,
        };
        if amount.is_none() {
            errors.push(FormField::Budget, "Budget must be a positive number");
        }

        let budget_kind = match self.budget_kind.as_deref().map(str::trim) {
            None | Some("") => Some(BudgetKind::default()),
            Some(raw) => match raw.parse::<BudgetKind>() {
                Ok(kind) => Some(kind),
                Err(_) => {
                    errors.push(
                        FormField::BudgetKind,
                        format!(
                            "Budget type must be one of: {}",
                            BudgetKind::CODES.join(", ")
                        ),
                    );
                    None
                }
            },
        };

        let accommodation = parse_choice::<AccommodationType>(
            self.accommodation.as_deref(),
            FormField::Accommodation,
            "Please select an accommodation type",
            "accommodation",
            AccommodationType::CODES,
            &mut errors,
        );
        let transportation = parse_choice::<TransportationType>(
            self.transportation.as_deref(),
            FormField::Transportation,
            "Please select a transportation type",
            "transportation",
            TransportationType::CODES,
            &mut errors,
        );

        match (
            start_date,
            end_date,
            amount,
            budget_kind,
            accommodation,
            transportation,
        ) {
            (Some(start_date), Some(end_date), Some(amount), Some(kind), Some(acc), Some(trans))
                if errors.is_empty() =>
            {
                Ok(TripPreferences {
                    destination: destination.to_string(),
                    start_date,
                    end_date,
                    budget: Budget { amount, kind },
                    interests: normalize_tags(&self.interests),
                    dietary_restrictions: normalize_tags(&self.dietary_restrictions),
                    accommodation: acc,
                    transportation: trans,
                })
            }
            _ => {
                debug!("Trip form rejected with {} error(s)", errors.len());
                Err(errors)
            }
        }
    }

    /// Validates the form and hands the preferences to the workflow exactly
    /// once. A form that fails validation never reaches the workflow.
    pub async fn submit<S>(&self, workflow: &Workflow<S>) -> Result<WorkflowState>
    where
        S: ItineraryService,
    {
        let preferences = self.validate().map_err(RoamError::Validation)?;
        workflow.submit(preferences).await
    }
}

fn parse_date(
    raw: Option<&str>,
    field: FormField,
    label: &str,
    errors: &mut ValidationErrors,
) -> Option<Date> {
    match raw.map(str::trim) {
        None | Some("") => {
            errors.push(field, format!("{label} is required"));
            None
        }
        Some(raw) => match raw.parse::<Date>() {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(field, format!("{label} must be a valid date (YYYY-MM-DD)"));
                None
            }
        },
    }
}

fn parse_choice<T>(
    raw: Option<&str>,
    field: FormField,
    missing: &str,
    noun: &str,
    codes: &[&str],
    errors: &mut ValidationErrors,
) -> Option<T>
where
    T: std::str::FromStr,
{
    match raw.map(str::trim) {
        None | Some("") => {
            errors.push(field, missing);
            None
        }
        Some(raw) => match raw.parse::<T>() {
            Ok(value) => Some(value),
            Err(_) => {
                errors.push(
                    field,
                    format!(
                        "Unknown {noun} type '{raw}' (expected one of: {})",
                        codes.join(", ")
                    ),
                );
                None
            }
        },
    }
}

/// Trims tags, drops empty ones and removes duplicates keeping first
/// occurrence.
fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            out.push(tag.to_string());
        }
    }
    out
}
