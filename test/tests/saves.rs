use skirmish_core::*;
use skirmish_tests::*;

#[test]
fn save_then_load_restores_the_game_without_a_selection() {
    let mut h = Harness::new(4);
    h.game.new_game();
    let first_player = h.game.state().player_positions[0].position;
    h.click(first_player);
    assert_eq!(h.game.state().selected, Some(first_player));

    h.game.save_game();
    assert_eq!(h.game.state().selected, None);
    let saved = h.game.state().clone();
    let json: serde_json::Value = serde_json::from_str(&h.storage.get("state").expect("saved")).unwrap();
    assert_eq!(json["theme"], "prairie");
    assert_eq!(json["level"], 1);
    assert!(json.get("selected").is_none());

    h.game.state_mut().enemy_positions.clear();
    h.game.state_mut().level = 3;
    h.game.load_game();

    let loaded = h.game.state();
    assert_eq!(loaded.player_positions, saved.player_positions);
    assert_eq!(loaded.enemy_positions, saved.enemy_positions);
    assert_eq!(loaded.theme, saved.theme);
    assert_eq!(loaded.level, saved.level);
    assert_eq!(loaded.selected, None);
    assert_eq!(loaded.phase, Phase::PlayerTurn);
    assert!(h.recorder.errors().is_empty());
}

#[test]
fn malformed_saves_leave_the_game_alone() {
    let mut h = Harness::new(4);
    h.game.new_game();
    let before = h.game.state().clone();
    h.storage.insert("state", "{\"playerPositions\": [");
    h.recorder.take();

    h.game.load_game();
    assert_eq!(h.game.state(), &before);
    let errors = h.recorder.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Invalid state"), "{}", errors[0]);
}

#[test]
fn impossible_saves_are_rejected() {
    let mut h = Harness::new(4);
    h.game.new_game();
    let before = h.game.state().clone();

    let mut broken = before.clone();
    broken.enemy_positions[0].position = broken.player_positions[0].position;
    h.storage.insert("state", &serde_json::to_string(&broken).unwrap());
    h.game.load_game();
    assert_eq!(h.game.state(), &before);

    let mut stray = before.clone();
    stray.player_positions[0].position = 64;
    h.storage.insert("state", &serde_json::to_string(&stray).unwrap());
    h.game.load_game();
    assert_eq!(h.game.state(), &before);
    assert_eq!(h.recorder.errors().len(), 2);
}

#[test]
fn saves_written_by_hand_use_the_documented_shape() {
    let mut h = Harness::new(4);
    h.storage.insert(
        "state",
        r#"{
            "playerPositions": [
                {"character": {"type": "bowman", "level": 1, "attack": 25, "defence": 25, "health": 50}, "position": 8}
            ],
            "enemyPositions": [
                {"character": {"type": "daemon", "level": 2, "attack": 13, "defence": 13, "health": 100}, "position": 15}
            ],
            "theme": "arctic",
            "level": 3
        }"#,
    );
    h.game.load_game();

    let state = h.game.state();
    assert_eq!(state.theme, Theme::Arctic);
    assert_eq!(state.level, 3);
    assert_eq!(state.player_positions[0].character, Character::new(Archetype::Bowman, 1));
    assert_eq!(state.enemy_positions[0].character, Character::new(Archetype::Daemon, 2));
    assert_eq!(
        h.recorder.interesting(),
        vec![
            Call::DrawUi(Theme::Arctic),
            Call::SetBoardEnabled(true),
            Call::RedrawPositions(vec![(8, Archetype::Bowman), (15, Archetype::Daemon)]),
        ]
    );
}

#[test]
fn a_missing_store_is_reported() {
    let platform = TestPlatform::new(BOARD_SIZE);
    let recorder = platform.recorder.clone();
    let mut game: Game<TestPlatform, MemoryStorage> =
        Game::new(platform, None, &Settings::default()).unwrap();
    game.load_game();
    game.save_game();
    assert_eq!(
        recorder.errors(),
        vec![
            "Invalid state: no storage available".to_owned(),
            "Invalid state: no storage available".to_owned(),
        ]
    );
}

#[test]
fn finished_games_do_not_come_back_to_life() {
    let mut magician = pc(Archetype::Magician, 1, 0);
    magician.character.health = 1.0;
    let mut h = Harness::with_rosters(2, vec![magician], vec![pc(Archetype::Vampire, 1, 10)]);
    h.click(0);
    h.click(8);
    assert_eq!(h.game.state().phase, Phase::Lost);

    h.game.save_game();
    h.recorder.take();
    h.game.load_game();

    assert_eq!(h.game.state().phase, Phase::Lost);
    assert!(h.game.state().player_positions.is_empty());
    assert_eq!(
        h.recorder.errors(),
        vec!["Invalid state: a team has no characters".to_owned()]
    );
    assert!(!h.recorder.calls().contains(&Call::SetBoardEnabled(true)));
}

#[test]
fn overhealed_characters_are_rejected() {
    let mut h = Harness::new(4);
    h.game.new_game();
    let before = h.game.state().clone();
    h.storage.insert(
        "state",
        r#"{
            "playerPositions": [
                {"character": {"type": "bowman", "level": 1, "attack": 25, "defence": 25, "health": 5000}, "position": 8}
            ],
            "enemyPositions": [
                {"character": {"type": "daemon", "level": 1, "attack": 10, "defence": 10, "health": 50}, "position": 15}
            ],
            "theme": "prairie",
            "level": 1
        }"#,
    );
    h.recorder.take();
    h.game.load_game();

    assert_eq!(h.game.state(), &before);
    assert_eq!(h.recorder.errors().len(), 1);
}
