//! Command-line interface for guess_lobby.

use std::path::PathBuf;

use clap::Parser;

/// Guess Lobby - guess the secret number, bank the score in your lobby
#[derive(Parser, Debug)]
#[command(name = "guess_lobby")]
#[command(about = "Terminal number-guessing game with a persistent lobby", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding lobby.json and game.json (overrides the config)
    #[arg(long)]
    pub save_dir: Option<PathBuf>,

    /// File receiving log output (overrides the config)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
