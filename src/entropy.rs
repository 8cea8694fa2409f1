//! Randomness sources for computer moves and commitment keys

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use tracing::debug;
use crate::error::{GameError, GameResult};
use crate::game::{KeyGenerator, Move, MoveSet, MoveSelector};

/// Production randomness backed by the operating system
///
/// Keys are read straight from the OS generator on every commit. Moves come
/// from a CSPRNG seeded from the OS once at startup, so a missing entropy
/// source is reported before the first round instead of mid-game.
pub struct OsEntropy {
    rng: StdRng,
}

impl OsEntropy {
    pub fn new() -> GameResult<Self> {
        let rng = StdRng::from_rng(OsRng).map_err(|e| GameError::EntropySourceUnavailable {
            message: format!("Failed to seed move selector: {}", e),
        })?;

        let mut probe = [0u8; 1];
        OsRng.try_fill_bytes(&mut probe)?;

        debug!("OS entropy source ready");
        Ok(Self { rng })
    }
}

impl MoveSelector for OsEntropy {
    fn select(&mut self, moves: &MoveSet) -> GameResult<Move> {
        pick(&mut self.rng, moves)
    }
}

impl KeyGenerator for OsEntropy {
    fn fill_key(&mut self, key: &mut [u8]) -> GameResult<()> {
        OsRng.try_fill_bytes(key)?;
        Ok(())
    }
}

/// Reproducible move selection for tests and simulations
///
/// Not suitable for key generation; it deliberately does not implement
/// [`KeyGenerator`].
pub struct SeededMoves {
    rng: StdRng,
}

impl SeededMoves {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSelector for SeededMoves {
    fn select(&mut self, moves: &MoveSet) -> GameResult<Move> {
        pick(&mut self.rng, moves)
    }
}

fn pick<R: Rng>(rng: &mut R, moves: &MoveSet) -> GameResult<Move> {
    let index = rng.gen_range(0..moves.len());
    moves
        .get(index)
        .ok_or_else(|| GameError::InvalidMove(format!("index {}", index)))
}
