//! Seams between the game core and its collaborators

use crate::error::{GameError, GameResult};
use crate::session::RoundResult;
use super::matrix::OutcomeMatrix;
use super::moves::{Move, MoveSet};

/// Source of the computer's move for each round
pub trait MoveSelector {
    /// Pick one move; production implementations pick uniformly at random
    fn select(&mut self, moves: &MoveSet) -> GameResult<Move>;
}

/// Source of secret key material for commitments
pub trait KeyGenerator {
    /// Fill `key` with fresh secret bytes, or fail with `EntropySourceUnavailable`
    fn fill_key(&mut self, key: &mut [u8]) -> GameResult<()>;
}

impl<T: MoveSelector + ?Sized> MoveSelector for &mut T {
    fn select(&mut self, moves: &MoveSet) -> GameResult<Move> {
        (**self).select(moves)
    }
}

impl<T: KeyGenerator + ?Sized> KeyGenerator for &mut T {
    fn fill_key(&mut self, key: &mut [u8]) -> GameResult<()> {
        (**self).fill_key(key)
    }
}

/// A line read at a prompt, or the player pressing the interrupt key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    Line(String),
    Interrupted,
}

/// Terminal collaborator driven by [`crate::GameSession`]
///
/// Implementations own all formatting and I/O. The session never prints.
pub trait GameUi {
    /// Show the round's digest and the numbered move menu
    fn show_commitment(&mut self, digest: &str, moves: &MoveSet) -> GameResult<()>;

    /// Read one line at the move prompt
    fn prompt_move(&mut self) -> GameResult<UserInput>;

    /// Show the full outcome table
    fn show_help(&mut self, matrix: &OutcomeMatrix) -> GameResult<()>;

    /// Report a recoverable input error
    fn show_error(&mut self, error: &GameError) -> GameResult<()>;

    /// Show the finished round including the revealed key
    fn show_result(&mut self, result: &RoundResult) -> GameResult<()>;

    /// Block until the player acknowledges the result
    fn await_ack(&mut self) -> GameResult<UserInput>;

    /// Announce that the player chose to leave
    fn confirm_exit(&mut self) -> GameResult<()>;
}
