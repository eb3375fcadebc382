//! Difficulty tables and scoring.

use tracing::instrument;

use super::{Difficulty, GameReport, GameSettings};

/// Inclusive upper bound of the secret number for a difficulty.
pub const fn secret_bound(difficulty: Difficulty) -> i64 {
    match difficulty {
        Difficulty::Easy => 100,
        Difficulty::Medium => 1_000,
        Difficulty::Hard => 100_000,
    }
}

/// Score awarded for a first-try win at a difficulty.
pub const fn win_score_baseline(difficulty: Difficulty) -> i64 {
    match difficulty {
        Difficulty::Easy => 10,
        Difficulty::Medium => 100,
        Difficulty::Hard => 1_000,
    }
}

/// Computes the score of a won round: baseline divided by the guess count.
///
/// Division truncates. A zero guess count is treated as one.
#[instrument]
pub fn compute_score(settings: &GameSettings, report: &GameReport) -> i64 {
    win_score_baseline(settings.difficulty()) / i64::from(report.guess_count().max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_truncates() {
        let settings = GameSettings::new(Difficulty::Medium);
        assert_eq!(compute_score(&settings, &GameReport::new(3, 0)), 33);
    }

    #[test]
    fn zero_guesses_does_not_divide_by_zero() {
        let settings = GameSettings::new(Difficulty::Easy);
        assert_eq!(compute_score(&settings, &GameReport::new(0, 0)), 10);
    }
}
