//! Deterministic controller replaying a fixed list of intents.

use std::collections::VecDeque;

use derive_getters::Getters;
use tracing::{debug, instrument};

use super::{Controller, ControllerError, Intent, Notice, StateView};
use crate::lobby::ScreenKind;
use crate::{LobbyAction, MainMenuAction};

/// Controller that answers every update with the next scripted intent.
///
/// Every draw is recorded, so tests can assert on the screens shown, the
/// menus offered and the notices received.
#[derive(Debug, Default, Getters)]
pub struct ScriptedController {
    #[getter(skip)]
    script: VecDeque<Intent>,
    drawn: Vec<ScreenKind>,
    notices: Vec<Notice>,
    main_menu_offers: Vec<Vec<MainMenuAction>>,
    lobby_offers: Vec<Vec<LobbyAction>>,
    lobby_scores: Vec<i64>,
}

impl ScriptedController {
    /// Creates a controller that replays `script` in order.
    #[instrument(skip(script))]
    pub fn new(script: impl IntoIterator<Item = Intent>) -> Self {
        let script: VecDeque<Intent> = script.into_iter().collect();
        debug!(steps = script.len(), "Scripted controller ready");
        Self {
            script,
            ..Self::default()
        }
    }

    /// Appends an intent to the end of the script.
    pub fn push(&mut self, intent: Intent) {
        self.script.push_back(intent);
    }

    /// Number of intents not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    fn record(&mut self, view: &StateView<'_>) {
        match view {
            StateView::MainMenu { actions } => self.main_menu_offers.push(actions.to_vec()),
            StateView::Lobby { state, actions } => {
                self.lobby_offers.push(actions.to_vec());
                self.lobby_scores.push(state.score());
            }
            _ => {}
        }
    }
}

impl Controller for ScriptedController {
    #[instrument(skip(self, view), fields(screen = %view.kind()))]
    fn draw(&mut self, view: StateView<'_>) -> Result<(), ControllerError> {
        self.drawn.push(view.kind());
        self.record(&view);
        Ok(())
    }

    #[instrument(skip(self, view), fields(screen = %view.kind()))]
    fn update(&mut self, view: StateView<'_>) -> Result<Intent, ControllerError> {
        self.script.pop_front().ok_or_else(|| {
            ControllerError::new(format!("Script exhausted on {} screen", view.kind()))
        })
    }

    fn on_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
