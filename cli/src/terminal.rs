use colored::*;
use rochambeau::{
    DisplayConfig, GameError, GameResult, GameUi, MoveSet, Outcome, OutcomeMatrix, RoundResult,
    UserInput,
};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::Write;

use crate::table::render_grid;

/// Where prompt answers come from
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> GameResult<UserInput>;
}

/// Interactive line editor on the controlling terminal
pub struct Editor {
    inner: DefaultEditor,
}

impl Editor {
    pub fn new() -> GameResult<Self> {
        let inner = DefaultEditor::new().map_err(|e| GameError::ui(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl LineSource for Editor {
    fn read_line(&mut self, prompt: &str) -> GameResult<UserInput> {
        match self.inner.readline(prompt) {
            Ok(line) => Ok(UserInput::Line(line)),
            // Ctrl-C, or Ctrl-D / closed stdin
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(UserInput::Interrupted),
            Err(e) => Err(GameError::ui(e.to_string())),
        }
    }
}

/// Text front-end for a game session
pub struct TerminalUi<L, W> {
    lines: L,
    out: W,
    display: DisplayConfig,
}

impl<L: LineSource, W: Write> TerminalUi<L, W> {
    pub fn new(lines: L, out: W, display: DisplayConfig) -> Self {
        Self { lines, out, display }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.display.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn outcome_color(outcome: Outcome) -> Color {
        match outcome {
            Outcome::Win => Color::Green,
            Outcome::Lose => Color::Red,
            Outcome::Draw => Color::Yellow,
        }
    }
}

impl<L: LineSource, W: Write> GameUi for TerminalUi<L, W> {
    fn show_commitment(&mut self, digest: &str, moves: &MoveSet) -> GameResult<()> {
        writeln!(self.out, "HMAC:\n{}", digest)?;
        for mv in moves.moves() {
            writeln!(self.out, "{} - {}", mv.menu_number(), moves.name(mv))?;
        }
        writeln!(self.out, "? - help")?;
        writeln!(self.out, "0 - exit")?;
        self.out.flush()?;
        Ok(())
    }

    fn prompt_move(&mut self) -> GameResult<UserInput> {
        self.lines.read_line(&self.display.prompt)
    }

    fn show_help(&mut self, matrix: &OutcomeMatrix) -> GameResult<()> {
        writeln!(self.out, "[Table of possible outcomes]")?;
        write!(self.out, "{}", render_grid(&matrix.to_cells()))?;
        self.out.flush()?;
        Ok(())
    }

    fn show_error(&mut self, error: &GameError) -> GameResult<()> {
        let message = self.paint(&format!("[ERROR] {}", error), Color::Red);
        writeln!(self.out, "{}", message)?;
        self.out.flush()?;
        Ok(())
    }

    fn show_result(&mut self, result: &RoundResult) -> GameResult<()> {
        let outcome = self.paint(result.outcome.as_str(), Self::outcome_color(result.outcome));
        writeln!(self.out, "Your move: {}", result.human_move)?;
        writeln!(self.out, "Computer move: {}", result.computer_move)?;
        writeln!(self.out, "Result: {}!", outcome)?;
        writeln!(self.out, "HMAC key:\n{}\n", result.key)?;
        self.out.flush()?;
        Ok(())
    }

    fn await_ack(&mut self) -> GameResult<UserInput> {
        self.lines.read_line(&self.display.ack_prompt)
    }

    fn confirm_exit(&mut self) -> GameResult<()> {
        writeln!(self.out, "{}", self.paint("[Game Exit]", Color::Cyan))?;
        self.out.flush()?;
        Ok(())
    }
}
