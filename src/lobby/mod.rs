//! Screen state machine: navigation stack, states and parent/child events.

mod events;
mod main_loop;
mod screens;
mod state;

pub use events::{EventHandler, GameEvent, NewGameSetupEvent, NoHandler};
pub use main_loop::MainLoop;
pub use screens::{
    CreditsScreen, GameScreen, LobbyAction, LobbyInbox, LobbyScreen, LobbyState, MainMenuAction,
    MainMenuScreen, NewGameSetupScreen, VictoryScreen,
};
pub use state::{Navigator, ScreenKind, State, StateContext, Transition};
