//! Main loop: the pushdown state machine driving the screens.

use tracing::{debug, info, instrument, warn};

use crate::lobby::state::{Navigator, ScreenKind, State, StateContext, Transition};
use crate::{Controller, SaveStore, SecretSource, StateError};

/// Owns the navigation stack and runs draw → update on its top state.
///
/// Returning from a nested screen is a pop: the parent below simply becomes
/// the top again on the next tick.
pub struct MainLoop<C> {
    states: Vec<Box<dyn State>>,
    controller: C,
    store: SaveStore,
    secrets: Box<dyn SecretSource>,
}

impl<C: Controller> MainLoop<C> {
    /// Creates a loop whose stack holds only `initial`.
    #[instrument(skip_all, fields(initial = %initial.kind()))]
    pub fn from_state(
        initial: impl State + 'static,
        controller: C,
        store: SaveStore,
        secrets: impl SecretSource + 'static,
    ) -> Self {
        info!("Creating MainLoop");
        Self {
            states: vec![Box::new(initial)],
            controller,
            store,
            secrets: Box::new(secrets),
        }
    }

    /// Pushes a state; it becomes the new top.
    #[instrument(skip_all, fields(kind = %state.kind()))]
    pub fn push_state(&mut self, state: Box<dyn State>) {
        self.states.push(state);
        debug!(depth = self.states.len(), "State pushed");
    }

    /// Removes and returns the top state.
    #[instrument(skip(self))]
    pub fn pop_state(&mut self) -> Result<Box<dyn State>, StateError> {
        let state = self.states.pop().ok_or_else(|| {
            warn!("Pop requested on an empty stack");
            StateError::EmptyStack
        })?;
        debug!(kind = %state.kind(), depth = self.states.len(), "State popped");
        Ok(state)
    }

    /// Runs until the stack is empty.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), StateError> {
        info!("Starting main loop");
        while !self.states.is_empty() {
            self.step()?;
        }
        info!("Navigation stack empty, main loop finished");
        Ok(())
    }

    /// Draws and updates the top state once, then applies its navigation requests.
    ///
    /// Does nothing on an empty stack.
    #[instrument(skip(self), fields(top = ?self.top_kind()))]
    pub fn step(&mut self) -> Result<(), StateError> {
        let Some(top) = self.states.last_mut() else {
            return Ok(());
        };

        top.draw(&mut self.controller, &self.store)?;

        let mut navigator = Navigator::new();
        let mut ctx = StateContext::new(
            &mut self.controller,
            &self.store,
            self.secrets.as_mut(),
            &mut navigator,
        );
        top.update(&mut ctx)?;

        for transition in navigator.into_requests() {
            match transition {
                Transition::Push(state) => self.push_state(state),
                Transition::Pop => {
                    self.pop_state()?;
                }
            }
        }
        Ok(())
    }

    /// Number of states on the stack.
    pub fn depth(&self) -> usize {
        self.states.len()
    }

    /// Kind of the top state, if any.
    pub fn top_kind(&self) -> Option<ScreenKind> {
        self.states.last().map(|state| state.kind())
    }

    /// Kinds of all states, bottom first.
    pub fn kinds(&self) -> Vec<ScreenKind> {
        self.states.iter().map(|state| state.kind()).collect()
    }

    /// The controller.
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// The controller, mutably.
    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    /// The snapshot store.
    pub fn store(&self) -> &SaveStore {
        &self.store
    }
}
