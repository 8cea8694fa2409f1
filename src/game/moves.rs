//! Validated move sets and the move handles drawn from them

use std::fmt;
use crate::error::{GameError, GameResult};
use super::validation::MoveSetValidator;

/// An ordered, immutable list of distinct move names
///
/// The order defines the cyclic dominance relation: every move beats the
/// `(n-1)/2` moves that precede it in the list (wrapping around) and loses to
/// the `(n-1)/2` that follow it. For `rock paper scissors` that gives the
/// classical table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSet {
    names: Vec<String>,
}

/// A move chosen from a specific [`MoveSet`], stored as its zero-based index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move(usize);

impl Move {
    /// Zero-based position in the move set
    pub fn index(self) -> usize {
        self.0
    }

    /// One-based number shown in the menu
    pub fn menu_number(self) -> usize {
        self.0 + 1
    }
}

impl MoveSet {
    /// Validate and wrap a list of move names
    pub fn new<I, S>(names: I) -> GameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        MoveSetValidator::validate(&names)?;
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a validated set
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of moves each move beats (and loses to)
    pub fn half(&self) -> usize {
        (self.names.len() - 1) / 2
    }

    /// Move at a zero-based index
    pub fn get(&self, index: usize) -> Option<Move> {
        (index < self.names.len()).then_some(Move(index))
    }

    /// Move for a one-based menu number
    pub fn from_menu_number(&self, number: usize) -> Option<Move> {
        number.checked_sub(1).and_then(|index| self.get(index))
    }

    /// Look up a move by its exact name
    pub fn find(&self, name: &str) -> GameResult<Move> {
        self.names
            .iter()
            .position(|candidate| candidate == name)
            .map(Move)
            .ok_or_else(|| GameError::InvalidMove(name.to_string()))
    }

    /// Name of a move drawn from this set
    pub fn name(&self, mv: Move) -> &str {
        &self.names[mv.0]
    }

    /// Every move in list order
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        (0..self.names.len()).map(Move)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(" "))
    }
}
