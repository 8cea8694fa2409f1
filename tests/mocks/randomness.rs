//! Deterministic stand-ins for the move selector and key generator

use std::collections::VecDeque;
use rochambeau::{GameError, GameResult, KeyGenerator, Move, MoveSelector, MoveSet};

/// Computer plays the named moves in order, then repeats the last one
#[derive(Debug, Clone)]
pub struct ScriptedMoves {
    names: VecDeque<String>,
    last: Option<String>,
}

impl ScriptedMoves {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            last: None,
        }
    }

    /// Always play the same move
    pub fn always(name: &str) -> Self {
        Self::new([name])
    }
}

impl MoveSelector for ScriptedMoves {
    fn select(&mut self, moves: &MoveSet) -> GameResult<Move> {
        if let Some(next) = self.names.pop_front() {
            self.last = Some(next);
        }
        let name = self
            .last
            .as_deref()
            .ok_or_else(|| GameError::InvalidMove("no scripted move".to_string()))?;
        moves.find(name)
    }
}

/// Keys whose bytes count up from a seed, one step per commit
#[derive(Debug, Clone)]
pub struct CountingKeys {
    next: u8,
    pub issued: usize,
}

impl CountingKeys {
    pub fn starting_at(seed: u8) -> Self {
        Self { next: seed, issued: 0 }
    }
}

impl KeyGenerator for CountingKeys {
    fn fill_key(&mut self, key: &mut [u8]) -> GameResult<()> {
        for (offset, byte) in key.iter_mut().enumerate() {
            *byte = self.next.wrapping_add(offset as u8);
        }
        self.next = self.next.wrapping_add(1);
        self.issued += 1;
        Ok(())
    }
}

/// Key generator whose entropy source is gone
#[derive(Debug, Clone, Default)]
pub struct BrokenKeys;

impl KeyGenerator for BrokenKeys {
    fn fill_key(&mut self, _key: &mut [u8]) -> GameResult<()> {
        Err(GameError::EntropySourceUnavailable {
            message: "no entropy in tests".to_string(),
        })
    }
}
