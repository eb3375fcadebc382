//! Game configuration: where snapshots and logs live.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::SaveStore;

/// Runtime configuration, loadable from TOML.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Directory holding the snapshot files.
    #[serde(default = "default_save_dir")]
    save_dir: PathBuf,

    /// File name of the lobby snapshot.
    #[serde(default = "default_lobby_file")]
    lobby_file: String,

    /// File name of the round snapshot.
    #[serde(default = "default_game_file")]
    game_file: String,

    /// File receiving tracing output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_save_dir() -> PathBuf {
    PathBuf::from(".")
}

#[instrument]
fn default_lobby_file() -> String {
    crate::store::LOBBY_FILE.to_string()
}

#[instrument]
fn default_game_file() -> String {
    crate::store::GAME_FILE.to_string()
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("guess_lobby.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_dir: default_save_dir(),
            lobby_file: default_lobby_file(),
            game_file: default_game_file(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(save_dir = %config.save_dir.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Overrides the snapshot directory.
    #[instrument(skip(self))]
    pub fn with_save_dir(mut self, save_dir: PathBuf) -> Self {
        self.save_dir = save_dir;
        self
    }

    /// Overrides the log file.
    #[instrument(skip(self))]
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Builds the snapshot store described by this config.
    #[instrument(skip(self))]
    pub fn save_store(&self) -> SaveStore {
        SaveStore::new(
            self.save_dir.join(&self.lobby_file),
            self.save_dir.join(&self.game_file),
        )
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
