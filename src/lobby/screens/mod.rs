//! Screen implementations for the navigation stack.

mod credits;
mod game;
mod lobby;
mod main_menu;
mod new_game_setup;
mod victory;

pub use credits::CreditsScreen;
pub use game::GameScreen;
pub use lobby::{LobbyAction, LobbyInbox, LobbyScreen, LobbyState};
pub use main_menu::{MainMenuAction, MainMenuScreen};
pub use new_game_setup::NewGameSetupScreen;
pub use victory::VictoryScreen;
