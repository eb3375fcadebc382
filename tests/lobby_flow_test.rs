//! Tests for lobby navigation and score accumulation through the main loop.

use tempfile::TempDir;

use guess_lobby::{
    Difficulty, EventHandler, GameEvent, GameReport, GameSettings, Intent, LobbyAction,
    LobbyScreen, LobbyState, MainLoop, MainMenuAction, MainMenuScreen, Navigator,
    NewGameSetupEvent, PlayerIntent, SaveStore, ScreenKind, ScriptedController, SecretSource,
    State, StateContext, StateError, Transition,
};

/// Secret source returning a fixed value clamped to the bound.
struct FixedSecret(i64);

impl SecretSource for FixedSecret {
    fn pick(&mut self, bound: i64) -> i64 {
        self.0.min(bound)
    }
}

fn main_loop(
    store: SaveStore,
    secret: i64,
    script: impl IntoIterator<Item = Intent>,
) -> MainLoop<ScriptedController> {
    MainLoop::from_state(
        MainMenuScreen::new(),
        ScriptedController::new(script),
        store,
        FixedSecret(secret),
    )
}

fn guess(value: i64) -> Intent {
    Intent::Player(PlayerIntent::Guess(value))
}

#[test]
fn test_inbox_accumulates_round_scores() {
    let lobby = LobbyScreen::new();
    let mut inbox = lobby.inbox();

    inbox.handle(&GameEvent::PlayerWin {
        report: GameReport::new(4, 25),
    });
    inbox.handle(&GameEvent::GuessTooLow);
    inbox.handle(&GameEvent::PlayerWin {
        report: GameReport::new(1, 40),
    });

    assert_eq!(lobby.state().score(), 65);
}

#[test]
fn test_staged_round_is_pushed_on_next_tick_without_input() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SaveStore::in_dir(dir.path());
    let mut lobby = LobbyScreen::restore(LobbyState::new(12));
    let mut inbox = lobby.inbox();

    inbox.handle(&NewGameSetupEvent::SettingsValidated {
        settings: GameSettings::new(Difficulty::Hard),
    });
    assert!(!lobby.is_enabled());

    let mut controller = ScriptedController::default();
    lobby
        .draw(&mut controller, &store)
        .expect("Disabled draw should succeed");
    assert!(controller.drawn().is_empty());

    let mut secrets = FixedSecret(7);
    let mut navigator = Navigator::new();
    {
        let mut ctx = StateContext::new(&mut controller, &store, &mut secrets, &mut navigator);
        lobby
            .update(&mut ctx)
            .expect("Staged update must not consult the controller");
    }

    let pushed: Vec<ScreenKind> = navigator
        .requests()
        .iter()
        .filter_map(|t| match t {
            Transition::Push(state) => Some(state.kind()),
            Transition::Pop => None,
        })
        .collect();
    assert_eq!(pushed, [ScreenKind::Game]);
    assert_eq!(navigator.requests().len(), 1);
    assert!(lobby.is_enabled());
    assert_eq!(lobby.state().score(), 12);
}

#[test]
fn test_load_options_follow_saved_snapshots() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SaveStore::in_dir(dir.path());

    assert_eq!(
        MainMenuScreen::offered_actions(&store),
        [
            MainMenuAction::NewLobby,
            MainMenuAction::Credits,
            MainMenuAction::Quit
        ]
    );
    assert_eq!(
        LobbyScreen::offered_actions(&store),
        [LobbyAction::NewGame, LobbyAction::Quit]
    );

    store
        .save_lobby(&LobbyState::new(3))
        .expect("Lobby save failed");
    assert_eq!(
        MainMenuScreen::offered_actions(&store).first(),
        Some(&MainMenuAction::LoadLobby)
    );
    assert_eq!(
        LobbyScreen::offered_actions(&store),
        [LobbyAction::NewGame, LobbyAction::Quit]
    );
}

#[test]
fn test_unoffered_load_is_ignored() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut main_loop = main_loop(
        SaveStore::in_dir(dir.path()),
        0,
        [Intent::MainMenu(MainMenuAction::LoadLobby)],
    );

    main_loop.step().expect("Ignored intent is not an error");

    assert_eq!(main_loop.kinds(), [ScreenKind::MainMenu]);
}

#[test]
fn test_full_session_saves_lobby_score() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SaveStore::in_dir(dir.path());
    let mut main_loop = main_loop(
        store.clone(),
        42,
        [
            Intent::MainMenu(MainMenuAction::NewLobby),
            Intent::Lobby(LobbyAction::NewGame),
            Intent::Difficulty(Difficulty::Easy),
            guess(42),
            Intent::Continue,
            Intent::Lobby(LobbyAction::Quit),
            Intent::MainMenu(MainMenuAction::Quit),
        ],
    );

    main_loop.run().expect("Session should finish");

    assert_eq!(main_loop.depth(), 0);
    let controller = main_loop.controller();
    assert_eq!(controller.remaining(), 0);
    assert_eq!(
        controller.drawn(),
        &[
            ScreenKind::MainMenu,
            ScreenKind::Lobby,
            ScreenKind::NewGameSetup,
            ScreenKind::Game,
            ScreenKind::Victory,
            ScreenKind::Lobby,
            ScreenKind::MainMenu,
        ]
    );
    assert_eq!(controller.lobby_scores(), &[0, 10]);
    assert_eq!(
        controller.main_menu_offers().last(),
        Some(&vec![
            MainMenuAction::LoadLobby,
            MainMenuAction::NewLobby,
            MainMenuAction::Credits,
            MainMenuAction::Quit,
        ])
    );

    let saved = store.load_lobby().expect("Lobby snapshot should exist");
    assert_eq!(saved.score(), 10);
}

#[test]
fn test_stack_returns_to_lobby_after_round() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut main_loop = main_loop(
        SaveStore::in_dir(dir.path()),
        5,
        [
            Intent::MainMenu(MainMenuAction::NewLobby),
            Intent::Lobby(LobbyAction::NewGame),
            Intent::Difficulty(Difficulty::Medium),
            guess(5),
            Intent::Continue,
        ],
    );
    let expected = [
        vec![ScreenKind::MainMenu, ScreenKind::Lobby],
        vec![ScreenKind::MainMenu, ScreenKind::Lobby, ScreenKind::NewGameSetup],
        vec![ScreenKind::MainMenu, ScreenKind::Lobby],
        vec![ScreenKind::MainMenu, ScreenKind::Lobby, ScreenKind::Game],
        vec![ScreenKind::MainMenu, ScreenKind::Lobby, ScreenKind::Victory],
        vec![ScreenKind::MainMenu, ScreenKind::Lobby],
    ];

    for (tick, kinds) in expected.iter().enumerate() {
        main_loop.step().expect("Step failed");
        assert_eq!(&main_loop.kinds(), kinds, "after tick {}", tick + 1);
    }

    assert_eq!(main_loop.top_kind(), Some(ScreenKind::Lobby));
    assert_eq!(main_loop.controller().remaining(), 0);
}

#[test]
fn test_saved_lobby_is_restored() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SaveStore::in_dir(dir.path());
    store
        .save_lobby(&LobbyState::new(70))
        .expect("Lobby save failed");

    let mut main_loop = main_loop(
        store.clone(),
        0,
        [
            Intent::MainMenu(MainMenuAction::LoadLobby),
            Intent::Lobby(LobbyAction::Quit),
            Intent::MainMenu(MainMenuAction::Quit),
        ],
    );
    main_loop.run().expect("Session should finish");

    assert_eq!(main_loop.controller().lobby_scores(), &[70]);
    assert_eq!(store.load_lobby().expect("Lobby reload failed").score(), 70);
}

#[test]
fn test_quit_round_then_load_it_from_lobby() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SaveStore::in_dir(dir.path());
    let mut main_loop = main_loop(
        store.clone(),
        500,
        [
            Intent::MainMenu(MainMenuAction::NewLobby),
            Intent::Lobby(LobbyAction::NewGame),
            Intent::Difficulty(Difficulty::Medium),
            guess(1),
            Intent::Player(PlayerIntent::Quit),
            Intent::Lobby(LobbyAction::LoadGame),
            guess(500),
            Intent::Continue,
            Intent::Lobby(LobbyAction::Quit),
            Intent::MainMenu(MainMenuAction::Quit),
        ],
    );

    main_loop.run().expect("Session should finish");

    let controller = main_loop.controller();
    assert_eq!(controller.lobby_scores(), &[0, 0, 50]);
    assert_eq!(
        controller.lobby_offers(),
        &[
            vec![LobbyAction::NewGame, LobbyAction::Quit],
            vec![LobbyAction::LoadGame, LobbyAction::NewGame, LobbyAction::Quit],
            vec![LobbyAction::LoadGame, LobbyAction::NewGame, LobbyAction::Quit],
        ]
    );
    assert_eq!(store.load_lobby().expect("Lobby reload failed").score(), 50);
}

#[test]
fn test_credits_return_to_main_menu() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut main_loop = main_loop(
        SaveStore::in_dir(dir.path()),
        0,
        [
            Intent::MainMenu(MainMenuAction::Credits),
            Intent::Continue,
            Intent::MainMenu(MainMenuAction::Quit),
        ],
    );

    main_loop.run().expect("Session should finish");

    assert_eq!(
        main_loop.controller().drawn(),
        &[ScreenKind::MainMenu, ScreenKind::Credits, ScreenKind::MainMenu]
    );
}

#[test]
fn test_pop_on_empty_stack_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut main_loop = main_loop(SaveStore::in_dir(dir.path()), 0, Vec::new());

    let popped = main_loop.pop_state().expect("Initial state should pop");
    assert_eq!(popped.kind(), ScreenKind::MainMenu);
    assert!(matches!(main_loop.pop_state(), Err(StateError::EmptyStack)));

    main_loop.step().expect("Step on empty stack is a no-op");
    assert_eq!(main_loop.top_kind(), None);
}

#[test]
fn test_pushed_state_becomes_top() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut main_loop = main_loop(SaveStore::in_dir(dir.path()), 0, Vec::new());

    main_loop.push_state(Box::new(LobbyScreen::new()));

    assert_eq!(main_loop.depth(), 2);
    assert_eq!(main_loop.top_kind(), Some(ScreenKind::Lobby));
}

#[test]
fn test_exhausted_script_is_a_controller_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut main_loop = main_loop(SaveStore::in_dir(dir.path()), 0, Vec::new());

    match main_loop.run() {
        Err(StateError::Controller(err)) => {
            assert!(err.message.contains("Script exhausted on MainMenu screen"));
        }
        other => panic!("Expected controller error, got {:?}", other),
    }
}

#[test]
fn test_corrupt_lobby_snapshot_is_fatal() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SaveStore::in_dir(dir.path());
    std::fs::write(store.lobby_path(), b"{ not json").expect("Write failed");

    let mut main_loop = main_loop(
        store,
        0,
        [Intent::MainMenu(MainMenuAction::LoadLobby)],
    );

    assert!(matches!(main_loop.run(), Err(StateError::Snapshot(_))));
}
