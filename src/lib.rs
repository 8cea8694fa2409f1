//! Rochambeau - rock-paper-scissors for any odd number of moves, played fair
//!
//! Rochambeau keeps the computer honest through:
//! - A cyclic dominance rule where every move beats half of the others
//! - An HMAC commitment to the computer's move published before the player chooses
//! - Revealing the HMAC key afterwards so the player can check the commitment
//! - Injected randomness and UI so the whole game loop runs under test

pub mod commitment;
pub mod config;
pub mod entropy;
pub mod error;
pub mod game;
pub mod logging;
pub mod session;

// Re-export commonly used types for convenience
pub use error::{GameError, GameResult};

// Re-export core game types and traits
pub use game::{
    GameUi, KeyGenerator, Move, MoveSelector, MoveSet, MoveSetValidator, Outcome, OutcomeMatrix,
    OutcomeResolver, Selection, UserInput,
};

// Re-export commitment and session types
pub use commitment::{Commitment, FairCommitment, SecretKey};
pub use entropy::{OsEntropy, SeededMoves};
pub use session::{GameSession, RoundEnd, RoundResult, RoundState, SessionEnd};

// Re-export configuration interfaces
pub use config::{DisplayConfig, GameConfig, RochambeauConfig};
pub use logging::{LogFormat, LogOutput, LoggingConfig};
