//! Tests for loading the game config from disk.

use std::io::Write;
use unbeatable_cli::GameConfig;
use unbeatable_tictactoe::{FirstPlayer, PlayerKind};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "player1_name = \"Ada\"\nplayer2_name = \"HAL\"\nfirst_player = \"random\"\nmove_latency_ms = 0"
    )
    .unwrap();

    let config = GameConfig::load_or_default(file.path()).unwrap();
    assert_eq!(config.player1_name(), "Ada");
    assert_eq!(config.player2_name(), "HAL");
    assert_eq!(*config.opponent(), PlayerKind::Computer);
    assert_eq!(*config.first_player(), FirstPlayer::Random);
    assert_eq!(*config.move_latency_ms(), 0);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_unreadable_toml_reports_location() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "move_latency_ms = \"soon\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.file.ends_with("config.rs"));
}
