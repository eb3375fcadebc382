//! Main menu screen: program entry point.

use strum::Display;
use tracing::{debug, info, instrument, warn};

use crate::lobby::screens::{CreditsScreen, LobbyScreen};
use crate::lobby::state::{ScreenKind, State, StateContext};
use crate::{Controller, Intent, SaveStore, StateError, StateView};

/// Menu options available in the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum MainMenuAction {
    /// Restore the saved lobby.
    #[strum(to_string = "Load Lobby")]
    LoadLobby,
    /// Start a lobby with zero score.
    #[strum(to_string = "New Lobby")]
    NewLobby,
    /// Show the credits.
    #[strum(to_string = "Credits")]
    Credits,
    /// Leave the program.
    #[strum(to_string = "Exit")]
    Quit,
}

/// Entry screen. Popping it ends the program.
#[derive(Debug, Default)]
pub struct MainMenuScreen;

impl MainMenuScreen {
    /// Creates the main menu.
    pub fn new() -> Self {
        Self
    }

    /// Actions offered given the saved snapshots.
    #[instrument(skip(store))]
    pub fn offered_actions(store: &SaveStore) -> Vec<MainMenuAction> {
        let mut actions = Vec::with_capacity(4);
        if store.has_lobby() {
            actions.push(MainMenuAction::LoadLobby);
        }
        actions.extend([
            MainMenuAction::NewLobby,
            MainMenuAction::Credits,
            MainMenuAction::Quit,
        ]);
        actions
    }

    #[instrument(skip(self, ctx))]
    fn handle_action(
        &mut self,
        action: MainMenuAction,
        ctx: &mut StateContext<'_>,
    ) -> Result<(), StateError> {
        match action {
            MainMenuAction::NewLobby => {
                info!("Opening new lobby");
                ctx.push_state(LobbyScreen::new());
            }
            MainMenuAction::LoadLobby => {
                let state = ctx.store().load_lobby()?;
                info!(score = state.score(), "Opening saved lobby");
                ctx.push_state(LobbyScreen::restore(state));
            }
            MainMenuAction::Credits => ctx.push_state(CreditsScreen::new()),
            MainMenuAction::Quit => {
                info!("Leaving main menu");
                ctx.pop_state();
            }
        }
        Ok(())
    }
}

impl State for MainMenuScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::MainMenu
    }

    #[instrument(skip_all)]
    fn draw(&self, controller: &mut dyn Controller, store: &SaveStore) -> Result<(), StateError> {
        let actions = Self::offered_actions(store);
        controller.draw(StateView::MainMenu { actions: &actions })?;
        Ok(())
    }

    #[instrument(skip_all)]
    fn update(&mut self, ctx: &mut StateContext<'_>) -> Result<(), StateError> {
        let actions = Self::offered_actions(ctx.store());
        let intent = ctx
            .controller()
            .update(StateView::MainMenu { actions: &actions })?;
        debug!(intent = ?intent, "Main menu intent");

        match intent {
            Intent::MainMenu(action) if actions.contains(&action) => {
                self.handle_action(action, ctx)
            }
            other => {
                warn!(intent = ?other, "Ignoring intent not offered by the main menu");
                Ok(())
            }
        }
    }
}
