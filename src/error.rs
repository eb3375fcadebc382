//! Errors raised while driving the screen state machine.

use derive_more::{Display, Error};

use crate::{ControllerError, SnapshotError};

/// Fatal error surfaced by a state's draw or update.
#[derive(Debug, Clone, Display, Error)]
pub enum StateError {
    /// Saving or loading a snapshot failed.
    #[display("{}", _0)]
    Snapshot(SnapshotError),

    /// The controller could not produce input or render output.
    #[display("{}", _0)]
    Controller(ControllerError),

    /// A pop was requested on an empty navigation stack.
    #[display("Navigation stack is empty")]
    EmptyStack,
}

impl From<SnapshotError> for StateError {
    fn from(err: SnapshotError) -> Self {
        Self::Snapshot(err)
    }
}

impl From<ControllerError> for StateError {
    fn from(err: ControllerError) -> Self {
        Self::Controller(err)
    }
}
