//! Core domain types for the number-guessing game.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::instrument;

/// Difficulty tier of a round.
///
/// Each tier maps to a secret-number bound and a win-score baseline, see
/// [`secret_bound`](crate::secret_bound) and
/// [`win_score_baseline`](crate::win_score_baseline).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Secret in `[0, 100]`.
    Easy,
    /// Secret in `[0, 1_000]`.
    #[default]
    Medium,
    /// Secret in `[0, 100_000]`.
    Hard,
}

/// Settings chosen before a round starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameSettings {
    difficulty: Difficulty,
}

impl GameSettings {
    /// Creates settings for the given difficulty.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Returns the difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// Outcome counters for a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameReport {
    guess_count: u32,
    score: i64,
}

impl GameReport {
    /// Creates a report with explicit values (used when restoring snapshots).
    pub fn new(guess_count: u32, score: i64) -> Self {
        Self { guess_count, score }
    }

    /// Number of guesses submitted so far.
    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }

    /// Score awarded on the winning guess, zero until then.
    pub fn score(&self) -> i64 {
        self.score
    }

    pub(crate) fn record_guess(&mut self) {
        self.guess_count = self.guess_count.saturating_add(1);
    }

    pub(crate) fn set_score(&mut self, score: i64) {
        self.score = score;
    }
}

/// Persisted kind of the pending player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Submit the stored guess.
    Guess,
    /// Save the round and leave.
    Quit,
}

/// The single instruction a controller yields to a running round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerIntent {
    /// Guess the given number.
    Guess(i64),
    /// Save the round and return to the lobby.
    Quit,
}

/// Player slot of a round: the last guess and the pending action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Player {
    guess: i64,
    action: Option<GameAction>,
}

impl Player {
    /// Last guess entered.
    pub fn guess(&self) -> i64 {
        self.guess
    }

    /// Pending action, `None` between ticks.
    pub fn action(&self) -> Option<GameAction> {
        self.action
    }

    pub(crate) fn clear(&mut self) {
        self.action = None;
    }

    pub(crate) fn apply(&mut self, intent: PlayerIntent) {
        match intent {
            PlayerIntent::Guess(value) => {
                self.guess = value;
                self.action = Some(GameAction::Guess);
            }
            PlayerIntent::Quit => self.action = Some(GameAction::Quit),
        }
    }
}

/// Complete state of a round; saved and restored as one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    secret_number: i64,
    player: Player,
    settings: GameSettings,
    report: GameReport,
}

impl GameState {
    /// Creates a fresh round state around an already drawn secret.
    #[instrument(skip(secret_number))]
    pub fn new(secret_number: i64, settings: GameSettings) -> Self {
        Self {
            secret_number,
            player: Player::default(),
            settings,
            report: GameReport::default(),
        }
    }

    /// The number to guess.
    pub fn secret_number(&self) -> i64 {
        self.secret_number
    }

    /// Player slot.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Round settings.
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Round report.
    pub fn report(&self) -> &GameReport {
        &self.report
    }

    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub(crate) fn report_mut(&mut self) -> &mut GameReport {
        &mut self.report
    }
}
