//! Move-set validation run once before any round is played

use std::collections::HashSet;
use tracing::debug;
use crate::error::{GameError, GameResult};

/// Smallest playable move count
pub const MIN_MOVES: usize = 3;

/// Gatekeeper for the move list given on the command line
///
/// A move list is playable when it has an odd number of entries, at least
/// [`MIN_MOVES`] of them, and no name appears twice. Anything else makes the
/// cyclic dominance relation lopsided or ambiguous.
pub struct MoveSetValidator;

impl MoveSetValidator {
    /// Check the raw move names, reporting the first rule they break
    pub fn validate<S: AsRef<str>>(moves: &[S]) -> GameResult<()> {
        if moves.len() < MIN_MOVES {
            return Err(GameError::configuration(
                format!("The number of moves must be at least {}!", MIN_MOVES),
                "moves.len",
            ));
        }

        if moves.len() % 2 == 0 {
            return Err(GameError::configuration(
                "Enter an odd number of moves!",
                "moves.len",
            ));
        }

        let mut seen = HashSet::with_capacity(moves.len());
        for name in moves {
            if !seen.insert(name.as_ref()) {
                return Err(GameError::configuration(
                    "There should be no repetitive moves!",
                    format!("moves.{}", name.as_ref()),
                ));
            }
        }

        debug!(count = moves.len(), "Move set validated");
        Ok(())
    }
}
