//! Host configuration.

use std::path::Path;
use std::time::Duration;

use adivina_game::{log_secret, GameConfig, GuessGame, RandomSecret, SecretSource, SeededSecret};
use serde::{Deserialize, Serialize};

use crate::AdivinaError;

/// Everything a host needs to set up a game.
///
/// Every field has a default, so `{}` is a valid config file:
///
/// ```
/// let config = adivina::HostConfig::from_json_str(r#"{ "game": { "max": 50 } }"#).unwrap();
/// assert_eq!(config.game.max, 50);
/// assert_eq!(config.game.max_attempts, 5);
/// assert!(config.log_secret);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub game: GameConfig,
    /// Log each session's secret at `info`.
    pub log_secret: bool,
    /// Capacity of the game actor's command channel.
    pub channel_size: usize,
    /// Seed for reproducible secrets. Random when absent.
    pub seed: Option<u64>,
    /// Silence after each spoken message, in milliseconds.
    pub pause_between_messages_ms: u64,
    /// Silence after the farewell before the host exits, in milliseconds.
    pub exit_delay_ms: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            log_secret: true,
            channel_size: 16,
            seed: None,
            pause_between_messages_ms: 500,
            exit_delay_ms: 1000,
        }
    }
}

impl HostConfig {
    pub fn from_json_str(json: &str) -> Result<Self, AdivinaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AdivinaError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| AdivinaError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn pause_between_messages(&self) -> Duration {
        Duration::from_millis(self.pause_between_messages_ms)
    }

    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }

    pub fn secret_source(&self) -> Box<dyn SecretSource> {
        match self.seed {
            Some(seed) => Box::new(SeededSecret::new(seed)),
            None => Box::new(RandomSecret),
        }
    }

    /// Builds a game from this config, with secret logging hooked in when
    /// enabled.
    pub fn build_game(&self) -> GuessGame<Box<dyn SecretSource>> {
        let mut game = GuessGame::with_source(self.game.clone(), self.secret_source());
        if self.log_secret {
            game.on_session_start(log_secret);
        }
        game
    }
}
