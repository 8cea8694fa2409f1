//! Configuration management for rochambeau

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use crate::commitment::DEFAULT_KEY_LENGTH;
use crate::error::{GameError, GameResult};
use crate::logging::LoggingConfig;

/// Longest secret key accepted, in bytes
pub const MAX_KEY_LENGTH: usize = 1024;

/// Main configuration, every section optional in the TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RochambeauConfig {
    /// Commitment settings
    pub game: GameConfig,
    /// Terminal presentation
    pub display: DisplayConfig,
    /// Log level, format and destination
    pub logging: LoggingConfig,
}

/// Game-specific configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Secret key length in bytes for each commitment
    pub key_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            key_length: DEFAULT_KEY_LENGTH,
        }
    }
}

/// Terminal presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Colorize outcomes and errors
    pub color: bool,
    /// Prompt shown when asking for a move
    pub prompt: String,
    /// Prompt shown after a round result
    pub ack_prompt: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            prompt: "Enter your move: ".to_string(),
            ack_prompt: "Press 'Enter' to return to the menu".to_string(),
        }
    }
}

impl RochambeauConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> GameResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GameError::configuration(format!("Failed to read config file: {}", e), "config_file")
        })?;

        let config: RochambeauConfig = toml::from_str(&content).map_err(|e| {
            GameError::configuration(format!("Failed to parse config file: {}", e), "config_format")
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> GameResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            GameError::configuration(
                format!("Failed to serialize config: {}", e),
                "config_serialization",
            )
        })?;

        fs::write(path, content).map_err(|e| {
            GameError::configuration(format!("Failed to write config file: {}", e), "config_write")
        })?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> GameResult<()> {
        if self.game.key_length < DEFAULT_KEY_LENGTH {
            return Err(GameError::configuration(
                format!("Key length must be at least {} bytes", DEFAULT_KEY_LENGTH),
                "game.key_length",
            ));
        }

        if self.game.key_length > MAX_KEY_LENGTH {
            return Err(GameError::configuration(
                format!("Key length must be at most {} bytes", MAX_KEY_LENGTH),
                "game.key_length",
            ));
        }

        if self.display.prompt.trim().is_empty() {
            return Err(GameError::configuration(
                "Move prompt cannot be empty",
                "display.prompt",
            ));
        }

        self.logging.level()?;
        Ok(())
    }
}
