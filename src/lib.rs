//! Guess Lobby library - a terminal number-guessing game with a persistent lobby.
//!
//! # Architecture
//!
//! - **MainLoop**: pushdown state machine over a stack of screens
//! - **Screens**: main menu, lobby, new game setup, game, victory, credits
//! - **Events**: typed handlers a child screen uses to report to its parent
//! - **Controller**: rendering and input boundary (terminal or scripted)
//! - **Store**: lobby and round snapshots on disk
//!
//! # Example
//!
//! ```no_run
//! use guess_lobby::{MainLoop, MainMenuScreen, RandomSecret, SaveStore, TerminalController};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut main_loop = MainLoop::from_state(
//!     MainMenuScreen::new(),
//!     TerminalController::stdio(),
//!     SaveStore::in_dir("."),
//!     RandomSecret::from_os(),
//! );
//! main_loop.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod error;
mod games;
mod lobby;
mod store;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Controller boundary
pub use controller::{
    Controller, ControllerError, Intent, Notice, ScriptedController, StateView,
    TerminalController,
};

// Crate-level exports - Errors
pub use error::StateError;

// Crate-level exports - Game types
pub use games::guess::{
    Difficulty, GameAction, GameReport, GameSettings, GameState, Player, PlayerIntent,
    RandomSecret, SecretSource, compute_score, secret_bound, win_score_baseline,
};

// Crate-level exports - State machine
pub use lobby::{
    CreditsScreen, EventHandler, GameEvent, GameScreen, LobbyAction, LobbyInbox, LobbyScreen,
    LobbyState, MainLoop, MainMenuAction, MainMenuScreen, Navigator, NewGameSetupEvent,
    NewGameSetupScreen, NoHandler, ScreenKind, State, StateContext, Transition, VictoryScreen,
};

// Crate-level exports - Persistence
pub use store::{SaveStore, SnapshotError, decode_snapshot, encode_snapshot};
