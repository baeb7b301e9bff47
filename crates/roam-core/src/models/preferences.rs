//! Trip preference model and its enumerated option sets.

use std::{fmt, str::FromStr};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Lowercases an option code and treats `-`, spaces and `_` alike.
fn normalize_code(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}

/// How the budget amount is meant to be spent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BudgetKind {
    /// Amount available for each day of the trip
    #[default]
    PerDay,

    /// Amount available for the whole trip
    Total,
}

impl BudgetKind {
    /// All accepted codes, in display order.
    pub const CODES: &'static [&'static str] = &["per_day", "total"];

    /// Wire code of the budget kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetKind::PerDay => "per_day",
            BudgetKind::Total => "total",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            BudgetKind::PerDay => "per day",
            BudgetKind::Total => "total",
        }
    }
}

impl FromStr for BudgetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_code(s).as_str() {
            "per_day" | "perday" | "daily" => Ok(BudgetKind::PerDay),
            "total" => Ok(BudgetKind::Total),
            _ => Err(format!("Invalid budget type: {s}")),
        }
    }
}

impl fmt::Display for BudgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A positive budget amount together with how it applies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    /// Strictly positive, finite amount
    pub amount: f64,

    /// Whether the amount is per day or for the whole trip
    #[serde(rename = "type")]
    pub kind: BudgetKind,
}

impl Budget {
    /// Amount without a trailing fraction when it is integral (`100`, `99.5`).
    pub fn formatted_amount(&self) -> String {
        if self.amount.fract() == 0.0 && self.amount.abs() < 1e15 {
            format!("{:.0}", self.amount)
        } else {
            format!("{}", self.amount)
        }
    }
}

/// Type-safe enumeration of accommodation preferences.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccommodationType {
    Budget,
    MidRange,
    Luxury,
}

impl AccommodationType {
    /// All accepted codes, in display order.
    pub const CODES: &'static [&'static str] = &["budget", "mid_range", "luxury"];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccommodationType::Budget => "budget",
            AccommodationType::MidRange => "mid_range",
            AccommodationType::Luxury => "luxury",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccommodationType::Budget => "Budget",
            AccommodationType::MidRange => "Mid-range",
            AccommodationType::Luxury => "Luxury",
        }
    }
}

impl FromStr for AccommodationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_code(s).as_str() {
            "budget" => Ok(AccommodationType::Budget),
            "mid_range" | "midrange" => Ok(AccommodationType::MidRange),
            "luxury" => Ok(AccommodationType::Luxury),
            _ => Err(format!("Invalid accommodation type: {s}")),
        }
    }
}

impl fmt::Display for AccommodationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Type-safe enumeration of transportation preferences.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransportationType {
    Public,
    Private,
    Walking,
}

impl TransportationType {
    /// All accepted codes, in display order.
    pub const CODES: &'static [&'static str] = &["public", "private", "walking"];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportationType::Public => "public",
            TransportationType::Private => "private",
            TransportationType::Walking => "walking",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransportationType::Public => "Public transport",
            TransportationType::Private => "Private transport",
            TransportationType::Walking => "Walking",
        }
    }
}

impl FromStr for TransportationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_code(s).as_str() {
            "public" => Ok(TransportationType::Public),
            "private" => Ok(TransportationType::Private),
            "walking" => Ok(TransportationType::Walking),
            _ => Err(format!("Invalid transportation type: {s}")),
        }
    }
}

impl fmt::Display for TransportationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated trip preferences, produced by [`crate::form::TripForm`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripPreferences {
    /// Where the trip goes (never blank)
    pub destination: String,

    /// First day of the trip
    pub start_date: Date,

    /// Last day of the trip, never before `start_date`
    pub end_date: Date,

    pub budget: Budget,

    /// Interest tags, duplicates removed in entry order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<String>,

    /// Dietary restriction tags, duplicates removed in entry order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dietary_restrictions: Vec<String>,

    pub accommodation: AccommodationType,

    pub transportation: TransportationType,
}

impl TripPreferences {
    /// Number of calendar days covered, counting both ends.
    pub fn duration_days(&self) -> i64 {
        let span = self.end_date - self.start_date;
        i64::from(span.get_days()) + 1
    }
}
