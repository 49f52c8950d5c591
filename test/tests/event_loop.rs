use futures::SinkExt;
use skirmish_core::*;
use skirmish_tests::*;

async fn play(platform: TestPlatform, storage: MemoryStorage, events: Vec<Event>) {
    let (mut event_sender, event_receiver) = futures::channel::mpsc::channel(512);
    for e in events {
        event_sender.send(e).await.unwrap();
    }
    event_sender.close_channel();
    skirmish_core::run(platform, Some(storage), event_receiver).await;
}

fn settings_file(json: &str) -> Vec<u8> {
    json.as_bytes().to_vec()
}

#[test]
fn start_up_draws_a_fresh_game() {
    let platform = TestPlatform::new(BOARD_SIZE);
    let recorder = platform.recorder.clone();
    futures::executor::block_on(play(platform, MemoryStorage::default(), vec![]));

    let calls = recorder.interesting();
    assert_eq!(calls[0], Call::DrawUi(Theme::Prairie));
    assert_eq!(recorder.last_redraw().map(|r| r.len()), Some(6));
    assert!(recorder.errors().is_empty());
}

#[test]
fn start_up_resumes_a_saved_game() {
    let storage = MemoryStorage::default();
    storage.insert(
        "state",
        r#"{"playerPositions": [{"character": {"type": "magician", "level": 1, "attack": 10, "defence": 40, "health": 50}, "position": 0}],
            "enemyPositions": [{"character": {"type": "vampire", "level": 1, "attack": 25, "defence": 25, "health": 50}, "position": 7}],
            "theme": "mountain", "level": 4}"#,
    );
    let platform = TestPlatform::new(BOARD_SIZE);
    let recorder = platform.recorder.clone();
    futures::executor::block_on(play(platform, storage, vec![Event::Redraw]));

    let calls = recorder.interesting();
    assert_eq!(
        calls,
        vec![
            Call::DrawUi(Theme::Prairie),
            Call::DrawUi(Theme::Mountain),
            Call::SetBoardEnabled(true),
            Call::RedrawPositions(vec![(0, Archetype::Magician), (7, Archetype::Vampire)]),
            Call::DrawUi(Theme::Mountain),
            Call::RedrawPositions(vec![(0, Archetype::Magician), (7, Archetype::Vampire)]),
        ]
    );
}

#[test]
fn start_up_replaces_a_lost_game() {
    let storage = MemoryStorage::default();
    storage.insert(
        "state",
        r#"{"playerPositions": [],
            "enemyPositions": [{"character": {"type": "vampire", "level": 1, "attack": 25, "defence": 25, "health": 50}, "position": 7}],
            "theme": "prairie", "level": 1}"#,
    );
    let platform = TestPlatform::new(BOARD_SIZE);
    let recorder = platform.recorder.clone();
    futures::executor::block_on(play(platform, storage, vec![]));

    assert_eq!(recorder.errors().len(), 1);
    assert_eq!(recorder.last_redraw().map(|r| r.len()), Some(6));
    assert!(recorder.calls().contains(&Call::SetBoardEnabled(true)));
}

#[test]
fn settings_choose_the_save_slot() {
    let mut platform = TestPlatform::new(BOARD_SIZE);
    platform
        .files
        .insert("settings.json".to_owned(), settings_file(r#"{"seed": 7, "saveKey": "global"}"#));
    let storage = MemoryStorage::default();
    futures::executor::block_on(play(platform, storage.clone(), vec![Event::SaveGame]));
    assert!(storage.get("global").is_some());
    assert!(storage.get("state").is_none());
}

#[test]
fn user_settings_win_over_global_ones() {
    let mut platform = TestPlatform::new(BOARD_SIZE);
    platform
        .files
        .insert("settings.json".to_owned(), settings_file(r#"{"saveKey": "global"}"#));
    platform
        .user_files
        .insert("settings.json".to_owned(), settings_file(r#"{"saveKey": "mine", "teamSize": 2}"#));
    let storage = MemoryStorage::default();
    futures::executor::block_on(play(platform, storage.clone(), vec![Event::SaveGame]));

    let saved: GameState = serde_json::from_str(&storage.get("mine").expect("saved")).unwrap();
    assert_eq!(saved.player_positions.len(), 2);
    assert_eq!(saved.enemy_positions.len(), 2);
    assert!(storage.get("global").is_none());
}

#[test]
fn broken_user_settings_fall_back_to_global_ones() {
    let mut platform = TestPlatform::new(BOARD_SIZE);
    platform
        .files
        .insert("settings.json".to_owned(), settings_file(r#"{"saveKey": "global"}"#));
    platform
        .user_files
        .insert("settings.json".to_owned(), settings_file("{ not json"));
    let storage = MemoryStorage::default();
    futures::executor::block_on(play(platform, storage.clone(), vec![Event::SaveGame]));
    assert!(storage.get("global").is_some());
}

#[test]
fn events_drive_a_seeded_game() {
    let mut platform = TestPlatform::new(BOARD_SIZE);
    platform
        .files
        .insert("settings.json".to_owned(), settings_file(r#"{"seed": 11}"#));
    let storage = MemoryStorage::default();

    // Find out where the seeded game puts the first player character
    let mut probe = Harness::new(11);
    probe.game.new_game();
    let first = probe.game.state().player_positions[0].position;

    let recorder = platform.recorder.clone();
    futures::executor::block_on(play(
        platform,
        storage.clone(),
        vec![
            Event::CellEnter(first),
            Event::CellClick(first),
            Event::CellLeave(first),
            Event::NewGame,
            Event::SaveGame,
        ],
    ));

    let calls = recorder.interesting();
    assert!(calls.contains(&Call::SetCursor(Cursor::Pointer)));
    assert!(calls.contains(&Call::SelectCell(first, Highlight::Yellow)));
    assert!(calls.contains(&Call::HideTooltip(first)));
    assert_eq!(calls.iter().filter(|c| **c == Call::DrawUi(Theme::Prairie)).count(), 3);
    let saved: GameState = serde_json::from_str(&storage.get("state").expect("saved")).unwrap();
    assert_eq!(saved.player_positions.len(), 3);
}

#[test]
fn tiny_boards_are_refused() {
    let platform = TestPlatform::new(3);
    let recorder = platform.recorder.clone();
    futures::executor::block_on(play(platform, MemoryStorage::default(), vec![Event::NewGame]));
    assert!(recorder.calls().is_empty());
}
