//! Lobby screen: session hub accumulating score across rounds.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, info, instrument, warn};

use crate::lobby::events::{EventHandler, GameEvent, NewGameSetupEvent};
use crate::lobby::screens::{GameScreen, NewGameSetupScreen};
use crate::lobby::state::{ScreenKind, State, StateContext};
use crate::{Controller, GameSettings, Intent, SaveStore, StateError, StateView};

/// Menu options offered by the lobby.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum LobbyAction {
    /// Resume the saved round.
    #[strum(to_string = "Load Game")]
    LoadGame,
    /// Pick a difficulty and start a round.
    #[strum(to_string = "New Game")]
    NewGame,
    /// Save the lobby and return to the main menu.
    #[strum(to_string = "Exit")]
    Quit,
}

/// Persistent lobby data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LobbyState {
    score: i64,
}

impl LobbyState {
    /// Creates a lobby state with the given cumulative score.
    pub fn new(score: i64) -> Self {
        Self { score }
    }

    /// Cumulative score.
    pub fn score(&self) -> i64 {
        self.score
    }
}

#[derive(Debug)]
struct LobbyShared {
    state: LobbyState,
    staged: Option<GameSettings>,
    enabled: bool,
}

/// Handle children use to report back to their lobby.
///
/// Settings from the setup screen are staged for the lobby's next update; a
/// round's win adds its score to the lobby total.
#[derive(Debug, Clone)]
pub struct LobbyInbox {
    shared: Rc<RefCell<LobbyShared>>,
}

impl EventHandler<NewGameSetupEvent> for LobbyInbox {
    #[instrument(skip(self))]
    fn handle(&mut self, event: &NewGameSetupEvent) {
        let NewGameSetupEvent::SettingsValidated { settings } = event;
        let mut shared = self.shared.borrow_mut();
        shared.staged = Some(*settings);
        shared.enabled = false;
        debug!("New game staged");
    }
}

impl EventHandler<GameEvent> for LobbyInbox {
    #[instrument(skip(self))]
    fn handle(&mut self, event: &GameEvent) {
        if let GameEvent::PlayerWin { report } = event {
            let mut shared = self.shared.borrow_mut();
            shared.state.score += report.score();
            info!(total = shared.state.score, "Round score added to lobby");
        }
    }
}

/// Session hub. Owns the cumulative score and launches rounds.
///
/// Starting a round takes two ticks: the setup screen stages the chosen
/// settings and disables the lobby, then the lobby's next update pushes the
/// round and re-enables itself.
#[derive(Debug)]
pub struct LobbyScreen {
    shared: Rc<RefCell<LobbyShared>>,
}

impl LobbyScreen {
    /// Creates a lobby with zero score.
    #[instrument]
    pub fn new() -> Self {
        Self::restore(LobbyState::default())
    }

    /// Creates a lobby from a saved state.
    #[instrument]
    pub fn restore(state: LobbyState) -> Self {
        debug!(score = state.score(), "Initializing LobbyScreen");
        Self {
            shared: Rc::new(RefCell::new(LobbyShared {
                state,
                staged: None,
                enabled: true,
            })),
        }
    }

    /// Current lobby state.
    pub fn state(&self) -> LobbyState {
        self.shared.borrow().state
    }

    /// Whether the lobby currently draws and reads input.
    pub fn is_enabled(&self) -> bool {
        self.shared.borrow().enabled
    }

    /// Handle to pass to child states.
    pub fn inbox(&self) -> LobbyInbox {
        LobbyInbox {
            shared: Rc::clone(&self.shared),
        }
    }

    /// Actions offered given the saved snapshots.
    #[instrument(skip(store))]
    pub fn offered_actions(store: &SaveStore) -> Vec<LobbyAction> {
        if store.has_game() {
            vec![LobbyAction::LoadGame, LobbyAction::NewGame, LobbyAction::Quit]
        } else {
            vec![LobbyAction::NewGame, LobbyAction::Quit]
        }
    }

    /// Pushes a staged round, if any. Returns whether it did.
    #[instrument(skip_all)]
    fn drain_staged(&mut self, ctx: &mut StateContext<'_>) -> bool {
        let Some(settings) = self.shared.borrow_mut().staged.take() else {
            return false;
        };

        let game = GameScreen::start(settings, ctx.secrets()).with_handler(self.inbox());
        ctx.push_state(game);
        self.shared.borrow_mut().enabled = true;
        true
    }

    #[instrument(skip(self, ctx))]
    fn handle_action(
        &mut self,
        action: LobbyAction,
        ctx: &mut StateContext<'_>,
    ) -> Result<(), StateError> {
        match action {
            LobbyAction::NewGame => {
                ctx.push_state(NewGameSetupScreen::new().with_handler(self.inbox()));
            }
            LobbyAction::LoadGame => {
                let state = ctx.store().load_game()?;
                info!(
                    guess_count = state.report().guess_count(),
                    "Resuming saved round"
                );
                ctx.push_state(GameScreen::restore(state).with_handler(self.inbox()));
            }
            LobbyAction::Quit => {
                ctx.store().save_lobby(&self.state())?;
                ctx.pop_state();
            }
        }
        Ok(())
    }
}

impl Default for LobbyScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl State for LobbyScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::Lobby
    }

    #[instrument(skip_all)]
    fn draw(&self, controller: &mut dyn Controller, store: &SaveStore) -> Result<(), StateError> {
        if !self.is_enabled() {
            return Ok(());
        }

        let state = self.state();
        let actions = Self::offered_actions(store);
        controller.draw(StateView::Lobby {
            state: &state,
            actions: &actions,
        })?;
        Ok(())
    }

    #[instrument(skip_all)]
    fn update(&mut self, ctx: &mut StateContext<'_>) -> Result<(), StateError> {
        if self.drain_staged(ctx) || !self.is_enabled() {
            return Ok(());
        }

        let state = self.state();
        let actions = Self::offered_actions(ctx.store());
        let intent = ctx.controller().update(StateView::Lobby {
            state: &state,
            actions: &actions,
        })?;

        match intent {
            Intent::Lobby(action) if actions.contains(&action) => {
                info!(action = %action, "Lobby option selected");
                self.handle_action(action, ctx)
            }
            other => {
                warn!(intent = ?other, "Ignoring intent not offered by the lobby");
                Ok(())
            }
        }
    }
}
