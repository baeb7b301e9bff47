//! Command-line interface definitions using clap
//!
//! Flags stand in for the fields of the preference form. Every value is
//! passed through as raw text and converted into a core [`TripForm`], so
//! validation (and its messages) happens in one place, in `roam-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → TripForm → TripPreferences → Workflow
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use roam_core::TripForm;

/// Plan a trip from the terminal
///
/// Roam collects your trip preferences, sends them to an itinerary
/// generation service and renders the returned day-by-day plan.
#[derive(Parser)]
#[command(version, about, name = "roam")]
pub struct Args {
    /// Base URL of the itinerary service. Overrides $ROAM_API_URL and the
    /// config file; defaults to http://localhost:8000
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Path to a TOML config file. Defaults to
    /// $XDG_CONFIG_HOME/roam/config.toml
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Roam CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate an itinerary from trip preferences
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Show a previously generated itinerary
    #[command(alias = "s")]
    Show(ShowArgs),
}

/// Trip preferences
///
/// All values are validated together; every problem is reported before
/// anything is sent.
#[derive(ClapArgs)]
pub struct PlanArgs {
    /// Where to go
    #[arg(short, long, default_value = "")]
    pub destination: String,

    /// First day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// Last day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,

    /// Budget amount
    #[arg(short, long, allow_hyphen_values = true)]
    pub budget: Option<String>,

    #[arg(long, help = "How the budget applies: per_day (default) or total")]
    pub budget_type: Option<String>,

    #[arg(short, long, help = "Accommodation type: budget, mid_range or luxury")]
    pub accommodation: Option<String>,

    #[arg(short, long, help = "Transportation type: public, private or walking")]
    pub transportation: Option<String>,

    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Interests as comma-separated list (e.g. culture,food)"
    )]
    pub interests: Vec<String>,

    #[arg(
        long,
        value_delimiter = ',',
        help = "Dietary restrictions as comma-separated list"
    )]
    pub dietary: Vec<String>,

    /// Validate and print the query without contacting the service
    #[arg(long)]
    pub dry_run: bool,
}

impl From<PlanArgs> for TripForm {
    fn from(val: PlanArgs) -> Self {
        TripForm {
            destination: val.destination,
            start_date: val.start,
            end_date: val.end,
            budget: val.budget,
            budget_kind: val.budget_type,
            interests: val.interests,
            dietary_restrictions: val.dietary,
            accommodation: val.accommodation,
            transportation: val.transportation,
        }
    }
}

/// Show a stored itinerary
#[derive(ClapArgs)]
pub struct ShowArgs {
    #[arg(help = "Identifier returned when the itinerary was generated")]
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_args_into_form() {
        let args = Args::parse_from([
            "roam",
            "plan",
            "--destination",
            "Paris",
            "--start",
            "2025-06-01",
            "--end",
            "2025-06-05",
            "--budget",
            "100",
            "--accommodation",
            "mid_range",
            "--transportation",
            "public",
            "--interests",
            "culture,food",
        ]);

        let Commands::Plan(plan) = args.command else {
            panic!("expected plan command");
        };
        let form = TripForm::from(plan);
        assert_eq!(form.destination, "Paris");
        assert_eq!(form.budget.as_deref(), Some("100"));
        assert_eq!(form.budget_kind, None);
        assert_eq!(form.interests, vec!["culture", "food"]);
        assert!(form.dietary_restrictions.is_empty());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_negative_budget_reaches_validation() {
        let args = Args::parse_from(["roam", "plan", "--budget", "-20"]);
        let Commands::Plan(plan) = args.command else {
            panic!("expected plan command");
        };
        assert_eq!(plan.budget.as_deref(), Some("-20"));
    }

    #[test]
    fn test_global_flags() {
        let args = Args::parse_from([
            "roam",
            "show",
            "abc",
            "--api-url",
            "http://example.com",
            "--no-color",
        ]);
        assert_eq!(args.api_url.as_deref(), Some("http://example.com"));
        assert!(args.no_color);
        assert!(matches!(args.command, Commands::Show(ShowArgs { ref id }) if id == "abc"));
    }
}
