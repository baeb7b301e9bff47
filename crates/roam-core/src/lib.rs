//! Core library for the Roam trip planner.
//!
//! This crate turns trip preferences into a request for an external
//! itinerary-generation service and tracks that request's lifecycle.
//!
//! # Architecture
//!
//! - **Form** ([`form`]): raw field values and their validation into
//!   [`TripPreferences`]
//! - **Query** ([`query`]): flattening of preferences into the free-text
//!   [`ItineraryRequest`]
//! - **Client** ([`client`]): the [`ItineraryService`] seam and its HTTP
//!   implementation
//! - **Workflow** ([`workflow`]): the Idle / Loading / Success / Error state
//!   machine
//! - **Display** ([`display`]): markdown projections of the state, rendered
//!   by the CLI's terminal renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use roam_core::{ConfigBuilder, HttpItineraryClient, StateView, TripForm, Workflow};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigBuilder::new()
//!     .with_base_url(Some("http://localhost:8000"))
//!     .build()?;
//! let workflow = Workflow::new(HttpItineraryClient::new(config));
//!
//! let form = TripForm {
//!     destination: "Lisbon".to_string(),
//!     start_date: Some("2025-09-10".to_string()),
//!     end_date: Some("2025-09-14".to_string()),
//!     budget: Some("120".to_string()),
//!     accommodation: Some("budget".to_string()),
//!     transportation: Some("walking".to_string()),
//!     interests: vec!["food".to_string(), "music".to_string()],
//!     ..Default::default()
//! };
//!
//! let state = form.submit(&workflow).await?;
//! println!("{}", StateView(&state));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod models;
pub mod query;
pub mod workflow;

// Re-export commonly used types
pub use client::{HttpItineraryClient, ItineraryService};
pub use config::{ConfigBuilder, ServiceConfig};
pub use display::{LocalDateTime, OperationStatus, StateView};
pub use error::{Result, RoamError};
pub use form::{FieldError, FormField, TripForm, ValidationErrors};
pub use models::{
    AccommodationType, Budget, BudgetKind, Itinerary, ItineraryRequest, TransportationType,
    TripPreferences,
};
pub use workflow::{Workflow, WorkflowState};
