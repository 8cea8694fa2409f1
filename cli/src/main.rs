use anyhow::Result;
use clap::Parser;
use colored::*;
use std::io::Write;
use std::process::ExitCode;

use rochambeau::logging::init_logging;
use rochambeau::{
    FairCommitment, GameError, GameSession, GameUi, KeyGenerator, MoveSelector, MoveSet,
    OsEntropy, RochambeauConfig, SessionEnd,
};

mod table;
mod terminal;

use terminal::{Editor, TerminalUi};

/// Process status when the move list is rejected
const INVALID_MOVES: u8 = 1;

/// Process status for a normal exit or an interrupt
const CLEAN_EXIT: u8 = 0;

#[derive(Parser)]
#[command(name = "rochambeau")]
#[command(about = "Rock-paper-scissors for any odd number of moves, with a provably fair computer")]
#[command(version)]
struct Cli {
    /// Moves in dominance order, e.g. `rock paper scissors lizard spock`
    #[arg(value_name = "MOVE")]
    moves: Vec<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// How the program finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    InvalidMoves,
    Played(SessionEnd),
}

impl Status {
    fn code(self) -> u8 {
        match self {
            Status::InvalidMoves => INVALID_MOVES,
            Status::Played(SessionEnd::Exit | SessionEnd::Interrupted) => CLEAN_EXIT,
        }
    }
}

fn main() -> Result<ExitCode> {
    // Parse command line arguments
    let cli = Cli::parse();
    let status = run(cli, &mut std::io::stderr())?;
    Ok(ExitCode::from(status.code()))
}

fn run<E: Write>(cli: Cli, err: &mut E) -> Result<Status> {
    // Create configuration
    let mut config = match &cli.config {
        Some(path) => RochambeauConfig::from_file(path)?,
        None => RochambeauConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.no_color {
        config.display.color = false;
    }
    config.validate()?;

    let moves = match MoveSet::new(cli.moves) {
        Ok(moves) => moves,
        Err(e) => {
            report(err, &e, config.display.color)?;
            return Ok(Status::InvalidMoves);
        }
    };

    // Initialize logging and signal handling
    init_logging(&config.logging)?;
    install_interrupt_handler()?;

    let selector = OsEntropy::new()?;
    let commitments = FairCommitment::with_key_length(OsEntropy::new()?, config.game.key_length)?;
    let ui = TerminalUi::new(Editor::new()?, std::io::stdout(), config.display.clone());

    play(moves, selector, commitments, ui)
}

fn report<E: Write>(err: &mut E, error: &GameError, color: bool) -> Result<()> {
    let message = format!("[ERROR] {}", error);
    if color {
        writeln!(err, "{}", message.red())?;
    } else {
        writeln!(err, "{}", message)?;
    }
    Ok(())
}

fn play<S, K, U>(moves: MoveSet, selector: S, commitments: FairCommitment<K>, ui: U) -> Result<Status>
where
    S: MoveSelector,
    K: KeyGenerator,
    U: GameUi,
{
    let mut session = GameSession::with_commitments(moves, selector, commitments, ui);
    let end = session.run()?;
    if end == SessionEnd::Interrupted {
        println!();
    }

    tracing::debug!(rounds = session.rounds_played(), "Goodbye");
    Ok(Status::Played(end))
}

/// Ctrl-C while no prompt owns the terminal, or with piped stdin
///
/// Prompts read in raw mode see Ctrl-C as a key and report it through the
/// session instead, so this only runs when the terminal is in its normal mode.
fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        let code = interrupted(&mut std::io::stdout());
        std::process::exit(code);
    })?;
    Ok(())
}

/// Finish the current output line and return the process status for an interrupt
fn interrupted<W: Write>(out: &mut W) -> i32 {
    let _ = writeln!(out);
    let _ = out.flush();
    i32::from(CLEAN_EXIT)
}
