//! Snapshot persistence for lobbies and rounds in progress.

mod error;
mod save_store;

pub use error::SnapshotError;
pub use save_store::{GAME_FILE, LOBBY_FILE, SaveStore, decode_snapshot, encode_snapshot};
