//! Error types for the rochambeau game core

use thiserror::Error;

/// Main error type for the game core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("{message}")]
    Configuration {
        message: String,
        field: String,
    },

    #[error("{message}")]
    InputParse {
        message: String,
        input: String,
    },

    #[error("{message}")]
    InputRange {
        message: String,
        selection: i64,
    },

    #[error("Invalid move: {0}")]
    InvalidMove(String),

    #[error("Secure randomness unavailable: {message}")]
    EntropySourceUnavailable { message: String },

    #[error("Terminal error: {message}")]
    Ui { message: String },

    #[error("Hex decoding error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

impl GameError {
    /// Shorthand for move-set and config file validation failures
    pub fn configuration(message: impl Into<String>, field: impl Into<String>) -> Self {
        GameError::Configuration {
            message: message.into(),
            field: field.into(),
        }
    }

    /// Shorthand for terminal I/O failures raised by a [`crate::GameUi`] implementation
    pub fn ui(message: impl Into<String>) -> Self {
        GameError::Ui {
            message: message.into(),
        }
    }

    /// Errors the player can fix by typing something else at the same prompt
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InputParse { .. } | GameError::InputRange { .. })
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::ui(err.to_string())
    }
}

impl From<rand::Error> for GameError {
    fn from(err: rand::Error) -> Self {
        GameError::EntropySourceUnavailable {
            message: err.to_string(),
        }
    }
}

/// Type alias for the main result type used throughout the library
pub type GameResult<T> = Result<T, GameError>;
