//! Roam CLI Application
//!
//! Command-line interface for the roam trip planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use roam_core::{ConfigBuilder, HttpItineraryClient, Workflow};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        api_url,
        config_file,
        no_color,
        command,
    } = Args::parse();

    let config = ConfigBuilder::new()
        .with_base_url(api_url)
        .with_env()
        .with_config_file(config_file)
        .build()
        .context("Failed to resolve service configuration")?;

    info!("Roam started, service at {}", config.base_url);

    let workflow = Workflow::new(HttpItineraryClient::new(config));
    let cli = Cli::new(workflow, TerminalRenderer::new(!no_color));

    match command {
        Plan(args) => cli.plan(args).await,
        Show(args) => cli.show(args).await,
    }
}
