//! Typed events a child state reports to the state that created it.
//!
//! A parent passes an [`EventHandler`] to the child at construction. The child
//! calls it synchronously, once per event occurrence, from inside its own
//! update. [`NoHandler`] is the explicit default.

use crate::{GameReport, GameSettings};

/// Events emitted by a running round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The guess was above the secret.
    GuessTooHigh,
    /// The guess was below the secret.
    GuessTooLow,
    /// The guess matched the secret; carries the final report.
    PlayerWin {
        /// Report with the computed score.
        report: GameReport,
    },
}

/// Events emitted by the new-game setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewGameSetupEvent {
    /// A difficulty was picked.
    SettingsValidated {
        /// Settings for the round to create.
        settings: GameSettings,
    },
}

/// Receives events of type `E` from a child state.
pub trait EventHandler<E> {
    /// Handles one event.
    fn handle(&mut self, event: &E);
}

/// Handler that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHandler;

impl<E> EventHandler<E> for NoHandler {
    fn handle(&mut self, _event: &E) {}
}

impl<E, F> EventHandler<E> for F
where
    F: FnMut(&E),
{
    fn handle(&mut self, event: &E) {
        self(event)
    }
}
