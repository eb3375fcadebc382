//! State trait and navigation requests for the screen stack.

use std::fmt;

use strum::Display;
use tracing::{debug, instrument};

use crate::{Controller, SaveStore, SecretSource, StateError};

/// Identifies a concrete screen on the navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ScreenKind {
    /// Entry screen.
    MainMenu,
    /// Session hub holding the cumulative score.
    Lobby,
    /// One-shot difficulty picker.
    NewGameSetup,
    /// Active guessing round.
    Game,
    /// End-of-round summary.
    Victory,
    /// Static credits.
    Credits,
}

/// A unit of the navigation stack.
///
/// The [`MainLoop`](crate::MainLoop) draws and updates whichever state is on
/// top. A state navigates by requesting pushes and pops through the
/// [`StateContext`] it receives in [`State::update`].
pub trait State {
    /// Identifies this state.
    fn kind(&self) -> ScreenKind;

    /// Renders the state. Must not change it.
    fn draw(&self, controller: &mut dyn Controller, store: &SaveStore) -> Result<(), StateError>;

    /// Obtains one intent from the controller and applies at most one transition.
    fn update(&mut self, ctx: &mut StateContext<'_>) -> Result<(), StateError>;
}

/// A stack mutation requested by the state on top.
pub enum Transition {
    /// Push a new state on top.
    Push(Box<dyn State>),
    /// Pop the current top.
    Pop,
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push(state) => write!(f, "Push({})", state.kind()),
            Self::Pop => write!(f, "Pop"),
        }
    }
}

/// Ordered navigation requests collected during one update.
#[derive(Debug, Default)]
pub struct Navigator {
    requests: Vec<Transition>,
}

impl Navigator {
    /// Creates an empty navigator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests in the order they were made.
    pub fn requests(&self) -> &[Transition] {
        &self.requests
    }

    /// Consumes the navigator, yielding its requests in order.
    pub fn into_requests(self) -> Vec<Transition> {
        self.requests
    }

    fn push(&mut self, state: Box<dyn State>) {
        debug!(kind = %state.kind(), "Push requested");
        self.requests.push(Transition::Push(state));
    }

    fn pop(&mut self) {
        debug!("Pop requested");
        self.requests.push(Transition::Pop);
    }
}

/// Everything a state may touch while it updates.
pub struct StateContext<'a> {
    controller: &'a mut dyn Controller,
    store: &'a SaveStore,
    secrets: &'a mut dyn SecretSource,
    navigator: &'a mut Navigator,
}

impl<'a> StateContext<'a> {
    /// Bundles the collaborators for one update tick.
    #[instrument(skip_all)]
    pub fn new(
        controller: &'a mut dyn Controller,
        store: &'a SaveStore,
        secrets: &'a mut dyn SecretSource,
        navigator: &'a mut Navigator,
    ) -> Self {
        Self {
            controller,
            store,
            secrets,
            navigator,
        }
    }

    /// The controller driving this tick.
    pub fn controller(&mut self) -> &mut dyn Controller {
        &mut *self.controller
    }

    /// Snapshot store.
    pub fn store(&self) -> &SaveStore {
        self.store
    }

    /// Secret number source for new rounds.
    pub fn secrets(&mut self) -> &mut dyn SecretSource {
        &mut *self.secrets
    }

    /// Requests that `state` become the new top.
    pub fn push_state(&mut self, state: impl State + 'static) {
        self.navigator.push(Box::new(state));
    }

    /// Requests that the current top be popped.
    pub fn pop_state(&mut self) {
        self.navigator.pop();
    }
}
