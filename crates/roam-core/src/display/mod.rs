//! Display formatting for workflow output.
//!
//! Everything here is a pure projection: domain values and the current
//! [`crate::WorkflowState`] are turned into markdown through
//! [`std::fmt::Display`], with no state of their own. The CLI's terminal
//! renderer decides how that markdown reaches the screen.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  WorkflowState  │    │    StateView    │    │    Markdown     │
//! │  (Idle/Loading/ │───▶│ (Display impls) │───▶│     output      │
//! │ Success/Error)  │    │                 │    │   (terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`state`]: [`StateView`] and the itinerary rendering
//! - [`status`]: one-line success/error messages ([`OperationStatus`])
//! - [`datetime`]: local time formatting for service timestamps
//! - `preferences`: summary of submitted [`crate::TripPreferences`]

pub mod datetime;
mod preferences;
pub mod state;
pub mod status;

pub use datetime::LocalDateTime;
pub use state::{StateView, LOADING_TEXT};
pub use status::OperationStatus;
