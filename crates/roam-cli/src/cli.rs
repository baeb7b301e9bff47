//! Command handlers
//!
//! [`Cli`] owns the workflow and the renderer and drives one command to its
//! terminal state, rendering the Loading transition as it is published.

use std::future::Future;

use anyhow::{bail, Result};
use log::debug;
use roam_core::{
    ItineraryRequest, ItineraryService, OperationStatus, RoamError, TripForm, Workflow,
    WorkflowState,
};

use crate::{
    args::{PlanArgs, ShowArgs},
    renderer::TerminalRenderer,
};

pub struct Cli<S> {
    workflow: Workflow<S>,
    renderer: TerminalRenderer,
}

impl<S> Cli<S>
where
    S: ItineraryService,
{
    pub fn new(workflow: Workflow<S>, renderer: TerminalRenderer) -> Self {
        Self { workflow, renderer }
    }

    /// Validates the preferences, then generates (or with `--dry-run`, only
    /// previews) the itinerary.
    pub async fn plan(&self, args: PlanArgs) -> Result<()> {
        let dry_run = args.dry_run;
        let form = TripForm::from(args);

        let preferences = form.validate().map_err(RoamError::Validation)?;
        self.renderer.render(&preferences.to_string())?;

        if dry_run {
            let request = ItineraryRequest::from_preferences(&preferences);
            self.renderer
                .render(&format!("## Query\n\n{}\n", request.query))?;
            self.renderer.render(
                &OperationStatus::success("Preferences are valid, no request sent").to_string(),
            )?;
            return Ok(());
        }

        println!();
        let state = self.drive(form.submit(&self.workflow)).await?;
        self.finish(&state)
    }

    /// Fetches a stored itinerary by ID.
    pub async fn show(&self, args: ShowArgs) -> Result<()> {
        let state = self.drive(self.workflow.load(&args.id)).await?;
        self.finish(&state)
    }

    /// Awaits `request` while rendering the transitions it publishes.
    async fn drive<F>(&self, request: F) -> roam_core::Result<WorkflowState>
    where
        F: Future<Output = roam_core::Result<WorkflowState>>,
    {
        let mut updates = self.workflow.subscribe();
        tokio::pin!(request);

        loop {
            // Updates first: the state only changes while `request` is polled,
            // so Loading is always observed before the result is returned.
            tokio::select! {
                biased;
                Ok(()) = updates.changed() => {
                    let state = updates.borrow_and_update().clone();
                    debug!("Workflow is now {}", state.name());
                    if state.is_loading() {
                        // Rendering failures must not abort the request
                        let _ = self.renderer.render_state(&state);
                    }
                }
                result = &mut request => return result,
            }
        }
    }

    fn finish(&self, state: &WorkflowState) -> Result<()> {
        self.renderer.render_state(state)?;
        if state.is_error() {
            bail!("Itinerary request failed");
        }
        Ok(())
    }
}
