//! Rollcall - roster, lucky draw and group generator
//!
//! A terminal front end over `rollcall-core`. Keeps the participant list in
//! memory for the length of one session.

use std::path::PathBuf;

use clap::Parser;
use rollcall_core::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod celebrate;
mod clipboard;
mod command;
mod platform;
mod shell;
mod state;
mod ticker;
mod viewmodel;

#[derive(Parser, Debug)]
#[command(name = "rollcall", version, about = "Roster, lucky draw and group generator")]
struct Cli {
    /// Settings file (defaults to $ROLLCALL_CONFIG or the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible draws and groupings
    #[arg(long)]
    seed: Option<u64>,

    /// Names file to load before the shell starts
    #[arg(long)]
    load: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Rollcall");

    platform::log_platform_info();

    let settings = match state::AppState::settings_path(cli.config.as_deref())
        .and_then(|path| Settings::load(&path))
    {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load settings: {}", e);
            std::process::exit(1);
        }
    };

    let mut app_state = state::AppState::new(settings, cli.seed);

    if let Some(path) = cli.load {
        match app_state.ingest_file(&path) {
            Ok(added) => println!("Loaded {} names from {}", added.len(), path.display()),
            Err(e) => {
                tracing::error!(path = %path.display(), "Failed to load names: {}", e);
                std::process::exit(1);
            }
        }
    }

    // The ticker needs a runtime; everything else runs on this thread
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(shell::run(app_state)) {
        tracing::error!("Shell failed: {}", e);
        std::process::exit(1);
    }
}
