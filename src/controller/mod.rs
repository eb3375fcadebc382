//! Controller boundary: renders state views and yields player intents.
//!
//! States never know which concrete controller drives them. Each state hands
//! the controller a [`StateView`] and receives back one [`Intent`].

mod error;
mod scripted;
mod terminal;

pub use error::ControllerError;
pub use scripted::ScriptedController;
pub use terminal::TerminalController;

use crate::lobby::ScreenKind;
use crate::{
    Difficulty, GameReport, GameSettings, GameState, LobbyAction, LobbyState, MainMenuAction,
    PlayerIntent,
};

/// Read-only view of the state on top of the navigation stack.
#[derive(Debug, Clone, Copy)]
pub enum StateView<'a> {
    /// Entry screen with the actions currently offered.
    MainMenu {
        /// Offered actions, in display order.
        actions: &'a [MainMenuAction],
    },
    /// Session hub.
    Lobby {
        /// Cumulative lobby state.
        state: &'a LobbyState,
        /// Offered actions, in display order.
        actions: &'a [LobbyAction],
    },
    /// Difficulty picker.
    NewGameSetup {
        /// Selectable difficulties.
        difficulties: &'a [Difficulty],
    },
    /// Active round.
    Game(&'a GameState),
    /// End-of-round summary.
    Victory {
        /// Settings of the won round.
        settings: &'a GameSettings,
        /// Final report of the won round.
        report: &'a GameReport,
    },
    /// Credits table.
    Credits {
        /// Column headers.
        columns: &'a [&'static str],
        /// Table rows.
        rows: &'a [[&'static str; 2]],
    },
}

impl StateView<'_> {
    /// Returns the screen this view belongs to.
    pub fn kind(&self) -> ScreenKind {
        match self {
            Self::MainMenu { .. } => ScreenKind::MainMenu,
            Self::Lobby { .. } => ScreenKind::Lobby,
            Self::NewGameSetup { .. } => ScreenKind::NewGameSetup,
            Self::Game(_) => ScreenKind::Game,
            Self::Victory { .. } => ScreenKind::Victory,
            Self::Credits { .. } => ScreenKind::Credits,
        }
    }
}

/// One discrete instruction produced by a controller per update tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Main menu selection.
    MainMenu(MainMenuAction),
    /// Lobby selection.
    Lobby(LobbyAction),
    /// Difficulty chosen in the new-game setup.
    Difficulty(Difficulty),
    /// Player input for a running round.
    Player(PlayerIntent),
    /// Acknowledge a one-shot screen (victory, credits).
    Continue,
}

/// Presentation-only notices emitted by a running round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The last guess was above the secret.
    TooHigh,
    /// The last guess was below the secret.
    TooLow,
}

/// Capability a state uses to render itself and obtain its next intent.
pub trait Controller {
    /// Renders a read-only view of the current state.
    fn draw(&mut self, view: StateView<'_>) -> Result<(), ControllerError>;

    /// Obtains exactly one intent for the given state.
    fn update(&mut self, view: StateView<'_>) -> Result<Intent, ControllerError>;

    /// Records a presentation notice for later display.
    fn on_notice(&mut self, _notice: Notice) {}
}
