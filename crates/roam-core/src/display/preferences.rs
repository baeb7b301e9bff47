//! Markdown summary of submitted preferences.

use std::fmt;

use crate::models::TripPreferences;

impl fmt::Display for TripPreferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Trip to {}", self.destination)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Dates:** {} to {} ({} days)",
            self.start_date,
            self.end_date,
            self.duration_days()
        )?;
        writeln!(
            f,
            "- **Budget:** {} ({})",
            self.budget.formatted_amount(),
            self.budget.kind.label()
        )?;
        writeln!(f, "- **Accommodation:** {}", self.accommodation.label())?;
        writeln!(f, "- **Transportation:** {}", self.transportation.label())?;
        if !self.interests.is_empty() {
            writeln!(f, "- **Interests:** {}", self.interests.join(", "))?;
        }
        if !self.dietary_restrictions.is_empty() {
            writeln!(
                f,
                "- **Dietary restrictions:** {}",
                self.dietary_restrictions.join(", ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::models::{
        AccommodationType, Budget, BudgetKind, TransportationType, TripPreferences,
    };

    #[test]
    fn test_preferences_summary() {
        let prefs = TripPreferences {
            destination: "Kyoto".to_string(),
            start_date: date(2025, 4, 1),
            end_date: date(2025, 4, 3),
            budget: Budget {
                amount: 900.0,
                kind: BudgetKind::Total,
            },
            interests: vec!["temples".to_string()],
            dietary_restrictions: vec![],
            accommodation: AccommodationType::Luxury,
            transportation: TransportationType::Walking,
        };

        let rendered = prefs.to_string();
        assert!(rendered.starts_with("# Trip to Kyoto\n"));
        assert!(rendered.contains("- **Dates:** 2025-04-01 to 2025-04-03 (3 days)"));
        assert!(rendered.contains("- **Budget:** 900 (total)"));
        assert!(rendered.contains("- **Accommodation:** Luxury"));
        assert!(rendered.contains("- **Transportation:** Walking"));
        assert!(rendered.contains("- **Interests:** temples"));
        assert!(!rendered.contains("Dietary"));
    }
}
