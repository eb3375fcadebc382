//! Guess Lobby - terminal entry point.

#![warn(missing_docs)]

mod cli;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use guess_lobby::{GameConfig, MainLoop, MainMenuScreen, RandomSecret, TerminalController};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    initialize_tracing(config.log_file())?;

    run(&config)
}

/// Resolves the config file and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(save_dir) = &cli.save_dir {
        config = config.with_save_dir(save_dir.clone());
    }
    if let Some(log_file) = &cli.log_file {
        config = config.with_log_file(log_file.clone());
    }

    Ok(config)
}

/// Logs to a file so tracing output never interleaves with the prompts.
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    info!("Tracing initialized");
    Ok(())
}

/// Runs the game from the main menu until the player exits.
#[instrument(skip(config), fields(save_dir = %config.save_dir().display()))]
fn run(config: &GameConfig) -> Result<()> {
    let mut main_loop = MainLoop::from_state(
        MainMenuScreen::new(),
        TerminalController::stdio(),
        config.save_store(),
        RandomSecret::from_os(),
    );

    main_loop.run().context("Game loop failed")?;
    info!("Goodbye");
    Ok(())
}
