//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};
use unbeatable_tictactoe::{FirstPlayer, PlayerKind};

/// Settings for a terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name of the first player (always human, plays X).
    #[serde(default = "default_player1_name")]
    player1_name: String,

    /// Name of the second player (plays O).
    #[serde(default = "default_player2_name")]
    player2_name: String,

    /// Whether the second player is a human or the computer.
    #[serde(default = "default_opponent")]
    opponent: PlayerKind,

    /// Who opens each game.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Delay before each computer move, in milliseconds.
    #[serde(default = "default_move_latency_ms")]
    move_latency_ms: u64,
}

fn default_player1_name() -> String {
    "Player 1".to_string()
}

fn default_player2_name() -> String {
    "Computer".to_string()
}

fn default_opponent() -> PlayerKind {
    PlayerKind::Computer
}

fn default_move_latency_ms() -> u64 {
    250
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player1_name: default_player1_name(),
            player2_name: default_player2_name(),
            opponent: default_opponent(),
            first_player: FirstPlayer::default(),
            move_latency_ms: default_move_latency_ms(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player1 = %config.player1_name,
            player2 = %config.player2_name,
            opponent = %config.opponent,
            "Config loaded"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides. `None` keeps the loaded value.
    pub fn with_overrides(
        mut self,
        player1_name: Option<String>,
        player2_name: Option<String>,
        opponent: Option<PlayerKind>,
        first_player: Option<FirstPlayer>,
        move_latency_ms: Option<u64>,
    ) -> Self {
        if let Some(name) = player1_name {
            self.player1_name = name;
        }
        if let Some(name) = player2_name {
            self.player2_name = name;
        }
        if let Some(kind) = opponent {
            self.opponent = kind;
        }
        if let Some(policy) = first_player {
            self.first_player = policy;
        }
        if let Some(ms) = move_latency_ms {
            self.move_latency_ms = ms;
        }
        self
    }

    /// Delay before each computer move.
    pub fn move_latency(&self) -> Duration {
        Duration::from_millis(self.move_latency_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.move_latency(), Duration::from_millis(250));
    }

    #[test]
    fn test_partial_toml() {
        let config = GameConfig::from_toml(
            "player1_name = \"Ada\"\nopponent = \"human\"\nfirst_player = \"random\"\n",
        )
        .unwrap();
        assert_eq!(config.player1_name(), "Ada");
        assert_eq!(config.player2_name(), "Computer");
        assert_eq!(*config.opponent(), PlayerKind::Human);
        assert_eq!(*config.first_player(), FirstPlayer::Random);
    }

    #[test]
    fn test_bad_value_is_an_error() {
        let err = GameConfig::from_toml("opponent = \"robot\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = GameConfig::default().with_overrides(
            Some("Ada".to_string()),
            None,
            None,
            None,
            Some(0),
        );
        assert_eq!(config.player1_name(), "Ada");
        assert_eq!(config.player2_name(), "Computer");
        assert_eq!(config.move_latency(), Duration::ZERO);
    }
}
