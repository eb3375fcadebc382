//! Credits screen: static table of contributors.

use tracing::{info, instrument};

use crate::lobby::state::{ScreenKind, State, StateContext};
use crate::{Controller, SaveStore, StateError, StateView};

const COLUMNS: [&str; 2] = ["Name", "Role"];
const ROWS: [[&str; 2]; 1] = [["Ryoko", "Main dev"]];

/// Shows the credits table until acknowledged.
#[derive(Debug, Default)]
pub struct CreditsScreen {
    go_next: bool,
}

impl CreditsScreen {
    /// Creates the credits screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Column headers of the credits table.
    pub fn column_names(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    /// Rows of the credits table.
    pub fn credits(&self) -> &'static [[&'static str; 2]] {
        &ROWS
    }

    /// Marks the screen as acknowledged.
    pub fn go_next(&mut self) {
        self.go_next = true;
    }

    fn view(&self) -> StateView<'static> {
        StateView::Credits {
            columns: self.column_names(),
            rows: self.credits(),
        }
    }
}

impl State for CreditsScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::Credits
    }

    #[instrument(skip_all)]
    fn draw(&self, controller: &mut dyn Controller, _store: &SaveStore) -> Result<(), StateError> {
        controller.draw(self.view())?;
        Ok(())
    }

    #[instrument(skip_all)]
    fn update(&mut self, ctx: &mut StateContext<'_>) -> Result<(), StateError> {
        ctx.controller().update(self.view())?;
        self.go_next();

        if self.go_next {
            info!("Leaving credits");
            ctx.pop_state();
        }
        Ok(())
    }
}
