//! Win/lose/draw resolution over a cyclic move order

use std::fmt;
use crate::error::GameResult;
use super::moves::{Move, MoveSet};

/// Result of a round from the human player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// The same round seen from the other side of the table
    pub fn inverse(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stateless resolver for the generalized rock-paper-scissors rule
pub struct OutcomeResolver;

impl OutcomeResolver {
    /// Resolve a round between two moves of the same set
    ///
    /// With `d = (computer - human) mod n`, the computer wins when its move sits
    /// within the `(n-1)/2` positions after the human's move.
    pub fn resolve(moves: &MoveSet, human: Move, computer: Move) -> Outcome {
        Self::resolve_indices(moves.len(), human.index(), computer.index())
    }

    /// Resolve by move name, failing with `InvalidMove` for names outside the set
    pub fn determine(moves: &MoveSet, human: &str, computer: &str) -> GameResult<Outcome> {
        let human = moves.find(human)?;
        let computer = moves.find(computer)?;
        Ok(Self::resolve(moves, human, computer))
    }

    fn resolve_indices(len: usize, human: usize, computer: usize) -> Outcome {
        if human == computer {
            return Outcome::Draw;
        }

        let distance = (computer + len - human) % len;
        if distance <= (len - 1) / 2 {
            Outcome::Lose
        } else {
            Outcome::Win
        }
    }
}
