//! Interpretation of a line typed at the move prompt

use crate::error::{GameError, GameResult};
use super::moves::{Move, MoveSet};

/// Input that asks for the outcome table
pub const HELP_INPUT: &str = "?";

/// Menu number that leaves the game
pub const EXIT_SELECTION: i64 = 0;

/// What a prompt line asks the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Play(Move),
    Help,
    Exit,
}

impl Selection {
    /// Parse one line against the current move set
    ///
    /// Surrounding whitespace is ignored. Anything that is neither `?` nor an
    /// integer is an `InputParse` error; integers outside `0..=n` are
    /// `InputRange` errors.
    pub fn parse(input: &str, moves: &MoveSet) -> GameResult<Self> {
        let trimmed = input.trim();
        if trimmed == HELP_INPUT {
            return Ok(Selection::Help);
        }

        let number: i64 = match trimmed.parse() {
            Ok(number) => number,
            // too many digits for i64, still a number the menu cannot offer
            Err(_) if is_integer(trimmed) => {
                if trimmed.starts_with('-') { i64::MIN } else { i64::MAX }
            }
            Err(_) => {
                return Err(GameError::InputParse {
                    message: "Only number or '?'".to_string(),
                    input: trimmed.to_string(),
                })
            }
        };

        if number == EXIT_SELECTION {
            return Ok(Selection::Exit);
        }

        if number < 0 {
            return Err(GameError::InputRange {
                message: "Only positive numbers!".to_string(),
                selection: number,
            });
        }

        usize::try_from(number)
            .ok()
            .and_then(|n| moves.from_menu_number(n))
            .map(Selection::Play)
            .ok_or(GameError::InputRange {
                message: "Select move only from the menu".to_string(),
                selection: number,
            })
    }
}

fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
