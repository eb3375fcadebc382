//! Victory screen: end-of-round summary.

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::lobby::state::{ScreenKind, State, StateContext};
use crate::{Controller, GameReport, GameSettings, SaveStore, StateError, StateView};

/// Shows the settings and score of a won round until acknowledged.
#[derive(Debug, Getters)]
pub struct VictoryScreen {
    settings: GameSettings,
    report: GameReport,
    #[getter(skip)]
    go_next: bool,
}

impl VictoryScreen {
    /// Creates the summary for a won round.
    #[instrument]
    pub fn new(settings: GameSettings, report: GameReport) -> Self {
        debug!("Initializing VictoryScreen");
        Self {
            settings,
            report,
            go_next: false,
        }
    }

    /// Marks the screen as acknowledged.
    pub fn go_next(&mut self) {
        self.go_next = true;
    }
}

impl State for VictoryScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::Victory
    }

    #[instrument(skip_all)]
    fn draw(&self, controller: &mut dyn Controller, _store: &SaveStore) -> Result<(), StateError> {
        controller.draw(StateView::Victory {
            settings: &self.settings,
            report: &self.report,
        })?;
        Ok(())
    }

    #[instrument(skip_all)]
    fn update(&mut self, ctx: &mut StateContext<'_>) -> Result<(), StateError> {
        ctx.controller().update(StateView::Victory {
            settings: &self.settings,
            report: &self.report,
        })?;
        self.go_next();

        if self.go_next {
            info!("Leaving victory screen");
            ctx.pop_state();
        }
        Ok(())
    }
}
