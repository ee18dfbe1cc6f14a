//! Sketchfab CLI
//!
//! Authenticates against Sketchfab, searches the catalog and imports models
//! into the local download directory.

#![allow(clippy::print_stdout, reason = "CLI tool outputs to stdout")]

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use sketchfab_client::{ClientConfig, SketchfabClient};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("setting default subscriber failed")?;

    let config = ClientConfig::load().context("failed to load configuration")?;
    tracing::debug!(download_dir = %config.download_dir.display(), "Configuration loaded");
    let client = SketchfabClient::new(config)?;

    match cli.command {
        Commands::Auth => commands::handle_auth(&client, &cli.session, cli.json).await,
        Commands::Search(args) => {
            commands::establish_session(&client, &cli.session).await?;
            commands::handle_search(&client, args, cli.json).await
        },
        Commands::Import { uid, no_cache } => {
            commands::establish_session(&client, &cli.session).await?;
            commands::handle_import(&client, &uid, no_cache, cli.json).await
        },
        Commands::Fetch(args) => {
            commands::establish_session(&client, &cli.session).await?;
            commands::handle_fetch(&client, args, cli.json).await
        },
    }
}
