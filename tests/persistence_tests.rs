//! Save and restore through real files.
//!
//! A game opened from the same storage directory must pick up exactly where
//! the previous one stopped, and damaged files must never stop a game from
//! starting.

use std::fs;

use rust_yahtzee::core::{Category, GameConfig, GameSession, SnapshotFormat};
use rust_yahtzee::game::Game;
use rust_yahtzee::persist::{FileStore, SnapshotStore};

fn config(dir: &tempfile::TempDir) -> GameConfig {
    GameConfig::new().with_seed(99).with_storage_dir(dir.path())
}

// =============================================================================
// Restore
// =============================================================================

#[test]
fn test_reopen_restores_mid_turn() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);

    let before = {
        let mut game = Game::from_config(&config);
        game.add_player().unwrap();
        game.roll().unwrap();
        game.toggle_held(2).unwrap();
        game.roll().unwrap();
        game.session().clone()
    };

    let game = Game::from_config(&config);
    assert_eq!(game.session(), &before);
    assert_eq!(game.session().rolls_left(), 1);
    assert!(game.session().held()[2]);
}

#[test]
fn test_reopen_restores_pending_and_history() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir).with_format(SnapshotFormat::Bincode);

    {
        let mut game = Game::from_config(&config);
        game.roll().unwrap();
        game.select_score(Category::Chance).unwrap();
        game.next_turn().unwrap();
        game.roll().unwrap();
        game.select_score(Category::Chance).unwrap();
        game.abandon();
        game.roll().unwrap();
        game.select_score(Category::Chance).unwrap();
    }

    let mut game = Game::from_config(&config);
    assert_eq!(game.history().len(), 1);
    assert!(game.session().is_waiting_for_next());
    let pending = game.session().pending_score().unwrap();
    assert_eq!(pending.category_id, Category::Chance);

    game.next_turn().unwrap();
    assert_eq!(
        game.session().players()[0].scores().get(Category::Chance),
        Some(pending.value)
    );
}

#[test]
fn test_restart_clears_saved_session_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);
    let store = FileStore::new(&config.storage);

    let mut game = Game::from_config(&config);
    game.roll().unwrap();
    game.restart();

    let saved = store.load().unwrap().unwrap();
    assert_eq!(saved, GameSession::new().snapshot());
    assert!(store.load_history().unwrap().is_empty());
}

// =============================================================================
// Damaged files
// =============================================================================

#[test]
fn test_garbage_session_file_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);
    fs::write(config.storage.session_path(), "{\"players\": oops").unwrap();

    let game = Game::from_config(&config);
    assert_eq!(game.session(), &GameSession::new());
}

#[test]
fn test_duplicate_category_key_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);
    let json = r#"{
        "players": [
            {"name": "P1", "scores": {"ones": 3, "ones": 4}},
            {"name": "P2", "scores": {}}
        ],
        "currentPlayerIndex": 0,
        "dice": [1, 1, 1, 1, 1],
        "held": [false, false, false, false, false],
        "rollsLeft": 3,
        "round": 1,
        "canAddPlayers": true,
        "isWaitingForNext": false,
        "pendingScore": null
    }"#;
    fs::write(config.storage.session_path(), json).unwrap();

    let store = FileStore::new(&config.storage);
    assert!(store.load().is_err());
    let game = Game::from_config(&config);
    assert_eq!(game.session(), &GameSession::new());
}

#[test]
fn test_inconsistent_snapshot_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);
    let json = r#"{
        "players": [
            {"name": "P1", "scores": {}},
            {"name": "P2", "scores": {}}
        ],
        "currentPlayerIdx": 5,
        "dice": [1, 1, 1, 1, 1],
        "held": [false, false, false, false, false],
        "rollsLeft": 3,
        "round": 1,
        "canAddPlayers": true,
        "isWaitingForNext": false,
        "pendingScore": null
    }"#;
    fs::write(config.storage.session_path(), json).unwrap();

    let store = FileStore::new(&config.storage);
    assert_eq!(store.load().unwrap().unwrap().current_player_index, 5);
    let game = Game::from_config(&config);
    assert_eq!(game.session().current_player_index(), 0);
    assert_eq!(game.session(), &GameSession::new());
}

#[test]
fn test_garbage_history_is_kept_aside() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);
    let truncated = r#"[{"P1":120,"P2":90},{"P1":200,"P2":150},{"P1":"#;
    fs::write(config.storage.history_path(), truncated).unwrap();

    let mut game = Game::from_config(&config);
    assert!(game.history().is_empty());
    game.abandon();
    assert_eq!(game.history().len(), 1);

    let store = FileStore::new(&config.storage);
    assert_eq!(fs::read_to_string(store.history_backup_path()).unwrap(), truncated);
    assert_eq!(store.load_history().unwrap().len(), 1);
}

#[test]
fn test_impossible_saved_score_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);
    let json = r#"{
        "players": [
            {"name": "P1", "scores": {"ones": 4294967295, "twos": 4}},
            {"name": "P2", "scores": {}}
        ],
        "currentPlayerIndex": 0,
        "dice": [1, 1, 1, 1, 1],
        "held": [false, false, false, false, false],
        "rollsLeft": 3,
        "round": 1,
        "canAddPlayers": true,
        "isWaitingForNext": false,
        "pendingScore": null
    }"#;
    fs::write(config.storage.session_path(), json).unwrap();

    let mut game = Game::from_config(&config);
    assert_eq!(game.session(), &GameSession::new());
    let entry = game.abandon();
    assert_eq!(entry.total_for("P1"), Some(0));
}

#[test]
fn test_open_roster_in_late_round_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);
    let mut snapshot = GameSession::new().snapshot();
    snapshot.round = 9;
    let mut store = FileStore::new(&config.storage);
    store.save(&snapshot).unwrap();

    let game = Game::from_config(&config);
    assert_eq!(game.session().round(), 1);
    assert_eq!(game.session(), &GameSession::new());
}
