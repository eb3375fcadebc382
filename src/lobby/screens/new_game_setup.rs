//! New game setup screen: one-shot difficulty picker.

use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};

use crate::lobby::events::{EventHandler, NewGameSetupEvent, NoHandler};
use crate::lobby::state::{ScreenKind, State, StateContext};
use crate::{Controller, Difficulty, GameSettings, Intent, SaveStore, StateError, StateView};

/// Lets the player pick a difficulty, reports it to the creator, then pops.
pub struct NewGameSetupScreen {
    difficulties: Vec<Difficulty>,
    settings: GameSettings,
    handler: Box<dyn EventHandler<NewGameSetupEvent>>,
}

impl NewGameSetupScreen {
    /// Creates the picker with a no-op handler.
    #[instrument]
    pub fn new() -> Self {
        Self {
            difficulties: Difficulty::iter().collect(),
            settings: GameSettings::default(),
            handler: Box::new(NoHandler),
        }
    }

    /// Replaces the handler notified when settings are validated.
    pub fn with_handler(mut self, handler: impl EventHandler<NewGameSetupEvent> + 'static) -> Self {
        self.handler = Box::new(handler);
        self
    }

    /// Settings selected so far.
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    fn view(&self) -> StateView<'_> {
        StateView::NewGameSetup {
            difficulties: &self.difficulties,
        }
    }
}

impl Default for NewGameSetupScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl State for NewGameSetupScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::NewGameSetup
    }

    #[instrument(skip_all)]
    fn draw(&self, controller: &mut dyn Controller, _store: &SaveStore) -> Result<(), StateError> {
        controller.draw(self.view())?;
        Ok(())
    }

    #[instrument(skip_all)]
    fn update(&mut self, ctx: &mut StateContext<'_>) -> Result<(), StateError> {
        let difficulty = match ctx.controller().update(self.view())? {
            Intent::Difficulty(difficulty) if self.difficulties.contains(&difficulty) => difficulty,
            other => {
                warn!(intent = ?other, "Ignoring intent not meant for game setup");
                return Ok(());
            }
        };

        self.settings = GameSettings::new(difficulty);
        info!(difficulty = %difficulty, "Game settings validated");
        self.handler.handle(&NewGameSetupEvent::SettingsValidated {
            settings: self.settings,
        });
        ctx.pop_state();
        Ok(())
    }
}
