//! Tests for single-screen transitions driven through a StateContext.

use std::cell::RefCell;
use std::rc::Rc;

use strum::IntoEnumIterator;
use tempfile::TempDir;

use guess_lobby::{
    CreditsScreen, Difficulty, GameAction, GameEvent, GameReport, GameScreen, GameSettings,
    Intent, Navigator, NewGameSetupEvent, NewGameSetupScreen, Notice, PlayerIntent, SaveStore,
    ScreenKind, ScriptedController, SecretSource, State, StateContext, Transition,
    VictoryScreen,
};

/// Secret source returning a fixed value clamped to the bound.
struct FixedSecret(i64);

impl SecretSource for FixedSecret {
    fn pick(&mut self, bound: i64) -> i64 {
        self.0.min(bound)
    }
}

/// Runs one update of `state` and returns the navigation it requested.
fn tick(state: &mut dyn State, controller: &mut ScriptedController, store: &SaveStore) -> Navigator {
    let mut secrets = FixedSecret(0);
    let mut navigator = Navigator::new();
    {
        let mut ctx = StateContext::new(controller, store, &mut secrets, &mut navigator);
        state.update(&mut ctx).expect("Update failed");
    }
    navigator
}

fn kinds(navigator: &Navigator) -> Vec<String> {
    navigator
        .requests()
        .iter()
        .map(|t| match t {
            Transition::Push(state) => format!("push {}", state.kind()),
            Transition::Pop => "pop".to_string(),
        })
        .collect()
}

fn recording_game(
    difficulty: Difficulty,
    secret: i64,
) -> (GameScreen, Rc<RefCell<Vec<GameEvent>>>) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let game = GameScreen::start(GameSettings::new(difficulty), &mut FixedSecret(secret))
        .with_handler(move |event: &GameEvent| sink.borrow_mut().push(*event));
    (game, events)
}

fn guess(value: i64) -> Intent {
    Intent::Player(PlayerIntent::Guess(value))
}

#[test]
fn test_guess_above_secret_keeps_round_open() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SaveStore::in_dir(dir.path());
    let (mut game, events) = recording_game(Difficulty::Medium, 500);
    let mut controller = ScriptedController::new([guess(700)]);

    let navigator = tick(&mut game, &mut controller, &store);

    assert!(navigator.requests().is_empty());
    assert_eq!(game.state().report().guess_count(), 1);
    assert_eq!(controller.notices(), &[Notice::TooHigh]);
    assert_eq!(*events.borrow(), [GameEvent::GuessTooHigh]);
}

#[test]
fn test_exactly_one_outcome_per_guess() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SaveStore::in_dir(dir.path());
    let (mut game, events) = recording_game(Difficulty::Medium, 500);
    let mut controller = ScriptedController::new([guess(100), guess(900), guess(500)]);

    let mut per_tick = Vec::new();
    for _ in 0..3 {
        let before = events.borrow().len();
        tick(&mut game, &mut controller, &store);
        per_tick.push(events.borrow().len() - before);
    }

    assert_eq!(per_tick, [1, 1, 1]);
    assert_eq!(
        *events.borrow(),
        [
            GameEvent::GuessTooLow,
            GameEvent::GuessTooHigh,
            GameEvent::PlayerWin {
                report: GameReport::new(3, 33)
            },
        ]
    );
    assert_eq!(controller.notices(), &[Notice::TooLow, Notice::TooHigh]);
}

#[test]
fn test_win_pops_game_then_pushes_victory() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SaveStore::in_dir(dir.path());
    let (mut game, _events) = recording_game(Difficulty::Easy, 42);
    let mut controller = ScriptedController::new([guess(42)]);

    let navigator = tick(&mut game, &mut controller, &store);

    assert_eq!(kinds(&navigator), ["pop", "push Victory"]);
    assert_eq!(game.state().report(), &GameReport::new(1, 10));
    assert!(controller.notices().is_empty());
}

#[test]
fn test_medium_win_on_fourth_guess_reports_25() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SaveStore::in_dir(dir.path());
    let (mut game, events) = recording_game(Difficulty::Medium, 321);
    let mut controller =
        ScriptedController::new([guess(1), guess(999), guess(300), guess(321)]);

    for _ in 0..4 {
        tick(&mut game, &mut controller, &store);
    }

    assert_eq!(
        events.borrow().last(),
        Some(&GameEvent::PlayerWin {
            report: GameReport::new(4, 25)
        })
    );
}

#[test]
fn test_quit_saves_round_for_reload() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SaveStore::in_dir(dir.path());
    let (mut game, events) = recording_game(Difficulty::Hard, 31_337);
    let mut controller =
        ScriptedController::new([guess(10), Intent::Player(PlayerIntent::Quit)]);

    tick(&mut game, &mut controller, &store);
    let navigator = tick(&mut game, &mut controller, &store);

    assert_eq!(kinds(&navigator), ["pop"]);
    assert_eq!(events.borrow().len(), 1);
    assert!(store.has_game());

    let restored = store.load_game().expect("Saved round should load");
    assert_eq!(restored.secret_number(), 31_337);
    assert_eq!(restored.settings().difficulty(), Difficulty::Hard);
    assert_eq!(restored.report(), &GameReport::new(1, 0));
    assert_eq!(restored.player().guess(), 10);
    assert_eq!(restored.player().action(), Some(GameAction::Quit));
}

#[test]
fn test_restored_round_continues_counting() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SaveStore::in_dir(dir.path());
    let (mut game, _events) = recording_game(Difficulty::Medium, 10);
    let mut controller =
        ScriptedController::new([guess(1), Intent::Player(PlayerIntent::Quit)]);
    tick(&mut game, &mut controller, &store);
    tick(&mut game, &mut controller, &store);

    let mut resumed = GameScreen::restore(store.load_game().expect("Saved round should load"));
    let mut controller = ScriptedController::new([guess(10)]);
    let navigator = tick(&mut resumed, &mut controller, &store);

    assert_eq!(kinds(&navigator), ["pop", "push Victory"]);
    assert_eq!(resumed.state().report(), &GameReport::new(2, 50));
}

#[test]
fn test_foreign_intent_is_ignored_by_game() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SaveStore::in_dir(dir.path());
    let (mut game, events) = recording_game(Difficulty::Easy, 5);
    let mut controller = ScriptedController::new([Intent::Continue]);

    let navigator = tick(&mut game, &mut controller, &store);

    assert!(navigator.requests().is_empty());
    assert_eq!(game.state().report().guess_count(), 0);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_new_game_setup_fires_once_then_pops() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SaveStore::in_dir(dir.path());

    for difficulty in Difficulty::iter() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut setup = NewGameSetupScreen::new()
            .with_handler(move |event: &NewGameSetupEvent| sink.borrow_mut().push(*event));
        let mut controller = ScriptedController::new([Intent::Difficulty(difficulty)]);

        let navigator = tick(&mut setup, &mut controller, &store);

        assert_eq!(kinds(&navigator), ["pop"]);
        assert_eq!(
            *events.borrow(),
            [NewGameSetupEvent::SettingsValidated {
                settings: GameSettings::new(difficulty)
            }]
        );
        assert_eq!(setup.settings().difficulty(), difficulty);
    }
}

#[test]
fn test_new_game_setup_ignores_foreign_intent() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SaveStore::in_dir(dir.path());
    let mut setup = NewGameSetupScreen::new();
    let mut controller = ScriptedController::new([Intent::Continue]);

    let navigator = tick(&mut setup, &mut controller, &store);

    assert!(navigator.requests().is_empty());
}

#[test]
fn test_victory_and_credits_pop_after_acknowledgement() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SaveStore::in_dir(dir.path());

    let mut victory = VictoryScreen::new(
        GameSettings::new(Difficulty::Easy),
        GameReport::new(1, 10),
    );
    let mut controller = ScriptedController::new([Intent::Continue]);
    assert_eq!(kinds(&tick(&mut victory, &mut controller, &store)), ["pop"]);
    assert_eq!(victory.report().score(), 10);

    let mut credits = CreditsScreen::new();
    let mut controller = ScriptedController::new([Intent::Continue]);
    assert_eq!(kinds(&tick(&mut credits, &mut controller, &store)), ["pop"]);
    assert_eq!(credits.column_names(), ["Name", "Role"]);
    assert_eq!(credits.credits(), [["Ryoko", "Main dev"]]);
}

#[test]
fn test_screens_report_their_kind() {
    assert_eq!(CreditsScreen::new().kind(), ScreenKind::Credits);
    assert_eq!(NewGameSetupScreen::new().kind(), ScreenKind::NewGameSetup);
}
