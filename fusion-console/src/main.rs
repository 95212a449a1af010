//! Fusion Alpha console.
//!
//! Operator CLI for the copy-trading backend:
//! - Users, KOLs and track configurations over the backend REST API
//! - Direct or relayed transport, chosen once per run
//! - Local settings in `~/.fusion_alpha/settings.json`

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod connection;
mod kol_commands;
mod settings;
mod settings_commands;
mod track_commands;
mod user_commands;
mod watch;

use cli::{Cli, Commands};

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let stored = settings::load().context("Failed to load settings")?;
    let connect = || connection::connect(&stored, cli.transport, cli.api_url.as_deref());

    match cli.command {
        Commands::Settings(cmd) => commands::handle_settings_command(cmd),
        Commands::User(cmd) => commands::handle_user_command(&connect()?, cmd).await,
        Commands::Kol(cmd) => commands::handle_kol_command(&connect()?, cmd).await,
        Commands::Track(cmd) => commands::handle_track_command(&connect()?, cmd).await,
        Commands::Dashboard => commands::handle_dashboard(&connect()?).await,
        Commands::Watch { iterations } => {
            watch::run(&connect()?, stored.refresh_interval_ms, iterations).await
        }
    }
}
