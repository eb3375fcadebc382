//! File-backed snapshot store.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use derive_getters::Getters;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use crate::store::SnapshotError;
use crate::{GameState, LobbyState};

/// Default file name of the lobby snapshot.
pub const LOBBY_FILE: &str = "lobby.json";
/// Default file name of the round snapshot.
pub const GAME_FILE: &str = "game.json";

/// Serializes a snapshot to bytes.
#[instrument(skip(value))]
pub fn encode_snapshot<T: Serialize>(value: &T) -> Result<Vec<u8>, SnapshotError> {
    Ok(serde_json::to_vec_pretty(value)?)
}

/// Restores a snapshot from bytes.
#[instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_snapshot<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SnapshotError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Stores the lobby and round snapshots as two independent files.
///
/// Saves overwrite the previous snapshot only after the new bytes are fully
/// encoded and written to a sibling staging file.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SaveStore {
    lobby_path: PathBuf,
    game_path: PathBuf,
}

impl SaveStore {
    /// Creates a store with explicit snapshot paths.
    #[instrument]
    pub fn new(lobby_path: PathBuf, game_path: PathBuf) -> Self {
        Self {
            lobby_path,
            game_path,
        }
    }

    /// Creates a store using the default file names inside `dir`.
    #[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(LOBBY_FILE), dir.join(GAME_FILE))
    }

    /// Whether a lobby snapshot exists.
    #[instrument(skip(self))]
    pub fn has_lobby(&self) -> bool {
        self.lobby_path.is_file()
    }

    /// Whether a round snapshot exists.
    #[instrument(skip(self))]
    pub fn has_game(&self) -> bool {
        self.game_path.is_file()
    }

    /// Saves the lobby snapshot.
    #[instrument(skip(self, state), fields(score = state.score()))]
    pub fn save_lobby(&self, state: &LobbyState) -> Result<(), SnapshotError> {
        write_snapshot(&self.lobby_path, state)
    }

    /// Loads the lobby snapshot.
    #[instrument(skip(self))]
    pub fn load_lobby(&self) -> Result<LobbyState, SnapshotError> {
        read_snapshot(&self.lobby_path)
    }

    /// Saves the round snapshot.
    #[instrument(skip(self, state), fields(guess_count = state.report().guess_count()))]
    pub fn save_game(&self, state: &GameState) -> Result<(), SnapshotError> {
        write_snapshot(&self.game_path, state)
    }

    /// Loads the round snapshot.
    #[instrument(skip(self))]
    pub fn load_game(&self) -> Result<GameState, SnapshotError> {
        read_snapshot(&self.game_path)
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("snapshot"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[instrument(skip(path, value), fields(path = %path.display()))]
fn write_snapshot<T: Serialize>(path: &Path, value: &T) -> Result<(), SnapshotError> {
    let bytes = encode_snapshot(value)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let staging = staging_path(path);
    fs::write(&staging, &bytes)?;
    fs::rename(&staging, path)?;

    info!(bytes = bytes.len(), "Snapshot saved");
    Ok(())
}

#[instrument(skip(path), fields(path = %path.display()))]
fn read_snapshot<T: DeserializeOwned>(path: &Path) -> Result<T, SnapshotError> {
    let bytes = fs::read(path).map_err(|e| {
        SnapshotError::new(format!("Failed to read {}: {}", path.display(), e))
    })?;
    debug!(bytes = bytes.len(), "Snapshot read");

    decode_snapshot(&bytes).map_err(|e| {
        SnapshotError::new(format!("Corrupt snapshot {}: {}", path.display(), e.message))
    })
}
