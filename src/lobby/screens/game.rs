//! Game screen: an active guessing round.

use std::cmp::Ordering;

use tracing::{debug, info, instrument, warn};

use crate::lobby::events::{EventHandler, GameEvent, NoHandler};
use crate::lobby::screens::VictoryScreen;
use crate::lobby::state::{ScreenKind, State, StateContext};
use crate::{
    Controller, GameAction, GameSettings, GameState, Intent, Notice, SaveStore, SecretSource,
    StateError, StateView, compute_score, secret_bound,
};

/// A single round from creation until it is won or saved.
pub struct GameScreen {
    state: GameState,
    handler: Box<dyn EventHandler<GameEvent>>,
}

impl GameScreen {
    /// Starts a new round, drawing the secret from `secrets`.
    #[instrument(skip(secrets))]
    pub fn start(settings: GameSettings, secrets: &mut dyn SecretSource) -> Self {
        let secret = secrets.pick(secret_bound(settings.difficulty()));
        info!(difficulty = %settings.difficulty(), "Starting new round");
        Self::restore(GameState::new(secret, settings))
    }

    /// Resumes a round from a saved state.
    #[instrument(skip(state), fields(guess_count = state.report().guess_count()))]
    pub fn restore(state: GameState) -> Self {
        Self {
            state,
            handler: Box::new(NoHandler),
        }
    }

    /// Replaces the event handler notified of guesses and wins.
    pub fn with_handler(mut self, handler: impl EventHandler<GameEvent> + 'static) -> Self {
        self.handler = Box::new(handler);
        self
    }

    /// Current round state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[instrument(skip(self, ctx))]
    fn handle_action(&mut self, ctx: &mut StateContext<'_>) -> Result<(), StateError> {
        match self.state.player().action() {
            Some(GameAction::Guess) => {
                self.state.report_mut().record_guess();
                self.check_guess(ctx);
            }
            Some(GameAction::Quit) => {
                info!("Saving round and leaving");
                ctx.store().save_game(&self.state)?;
                ctx.pop_state();
            }
            None => {}
        }
        Ok(())
    }

    #[instrument(skip(self, ctx))]
    fn check_guess(&mut self, ctx: &mut StateContext<'_>) {
        let guess = self.state.player().guess();
        let guess_count = self.state.report().guess_count();

        match guess.cmp(&self.state.secret_number()) {
            Ordering::Greater => {
                debug!(guess, guess_count, "Guess too high");
                ctx.controller().on_notice(Notice::TooHigh);
                self.handler.handle(&GameEvent::GuessTooHigh);
            }
            Ordering::Less => {
                debug!(guess, guess_count, "Guess too low");
                ctx.controller().on_notice(Notice::TooLow);
                self.handler.handle(&GameEvent::GuessTooLow);
            }
            Ordering::Equal => {
                let score = compute_score(self.state.settings(), self.state.report());
                self.state.report_mut().set_score(score);
                info!(guess_count, score, "Player won the round");

                let report = *self.state.report();
                self.handler.handle(&GameEvent::PlayerWin { report });
                ctx.pop_state();
                ctx.push_state(VictoryScreen::new(*self.state.settings(), report));
            }
        }
    }
}

impl State for GameScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::Game
    }

    #[instrument(skip_all)]
    fn draw(&self, controller: &mut dyn Controller, _store: &SaveStore) -> Result<(), StateError> {
        controller.draw(StateView::Game(&self.state))?;
        Ok(())
    }

    #[instrument(skip_all)]
    fn update(&mut self, ctx: &mut StateContext<'_>) -> Result<(), StateError> {
        self.state.player_mut().clear();

        match ctx.controller().update(StateView::Game(&self.state))? {
            Intent::Player(intent) => self.state.player_mut().apply(intent),
            other => {
                warn!(intent = ?other, "Ignoring intent not meant for a round");
                return Ok(());
            }
        }

        self.handle_action(ctx)
    }
}
