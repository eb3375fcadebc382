mod rules;
mod secret;
mod types;

pub use rules::{compute_score, secret_bound, win_score_baseline};
pub use secret::{RandomSecret, SecretSource};
pub use types::{
    Difficulty, GameAction, GameReport, GameSettings, GameState, Player, PlayerIntent,
};
