//! Round orchestration: commit, prompt, resolve, reveal

use tracing::{debug, info, info_span};
use uuid::Uuid;
use crate::commitment::{self, Commitment, FairCommitment, SecretKey};
use crate::error::GameResult;
use crate::game::{
    GameUi, KeyGenerator, Move, MoveSelector, MoveSet, Outcome, OutcomeMatrix, OutcomeResolver,
    Selection, UserInput,
};

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Digest shown, waiting for a valid selection
    AwaitingInput,
    /// Outcome computed, key not yet shown
    Resolved,
    /// Result and key handed to the UI
    Displayed,
}

/// Everything the player needs to see, and check, after a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub human_move: String,
    pub computer_move: String,
    pub outcome: Outcome,
    /// Key revealed after the outcome was fixed
    pub key: SecretKey,
    /// Digest that was shown before the player chose
    pub digest: String,
}

impl RoundResult {
    /// Recompute the digest from the revealed key and the computer's move
    pub fn verify(&self) -> GameResult<bool> {
        commitment::verify(self.key.as_str(), &self.computer_move, &self.digest)
    }
}

/// How a single round finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEnd {
    Completed(RoundResult),
    Exit,
    Interrupted,
}

/// Why the session loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player selected `0`
    Exit,
    /// The UI reported an interrupt at a prompt
    Interrupted,
}

/// Terminal answer at the move prompt
enum Choice {
    Play(Move),
    Exit,
    Interrupted,
}

/// One player against the computer, round after round
///
/// The move set is fixed for the life of the session. Randomness and the
/// terminal are injected so the whole loop runs under test without a TTY.
pub struct GameSession<S, K, U> {
    moves: MoveSet,
    matrix: OutcomeMatrix,
    selector: S,
    commitments: FairCommitment<K>,
    ui: U,
    state: Option<RoundState>,
    rounds_played: u64,
}

impl<S, K, U> GameSession<S, K, U>
where
    S: MoveSelector,
    K: KeyGenerator,
    U: GameUi,
{
    pub fn new(moves: MoveSet, selector: S, keys: K, ui: U) -> Self {
        Self::with_commitments(moves, selector, FairCommitment::new(keys), ui)
    }

    /// Build a session around a pre-configured commitment factory
    pub fn with_commitments(
        moves: MoveSet,
        selector: S,
        commitments: FairCommitment<K>,
        ui: U,
    ) -> Self {
        let matrix = OutcomeMatrix::build(&moves);
        Self {
            moves,
            matrix,
            selector,
            commitments,
            ui,
            state: None,
            rounds_played: 0,
        }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    pub fn matrix(&self) -> &OutcomeMatrix {
        &self.matrix
    }

    /// State of the most recent round, `None` before the first one starts
    pub fn state(&self) -> Option<RoundState> {
        self.state
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn into_ui(self) -> U {
        self.ui
    }

    /// Play rounds until the player exits or interrupts
    pub fn run(&mut self) -> GameResult<SessionEnd> {
        info!(moves = %self.moves, "Session started");

        loop {
            match self.play_round()? {
                RoundEnd::Completed(_) => {}
                RoundEnd::Exit => return Ok(self.finish(SessionEnd::Exit)),
                RoundEnd::Interrupted => return Ok(self.finish(SessionEnd::Interrupted)),
            }

            if let UserInput::Interrupted = self.ui.await_ack()? {
                return Ok(self.finish(SessionEnd::Interrupted));
            }
        }
    }

    /// Play one round, stopping short of the acknowledgment prompt
    pub fn play_round(&mut self) -> GameResult<RoundEnd> {
        let round_id = Uuid::new_v4();
        let span = info_span!("round", %round_id, number = self.rounds_played + 1);
        let _guard = span.enter();

        let computer = self.selector.select(&self.moves)?;
        let commitment = self.commitments.commit(self.moves.name(computer))?;

        self.ui.show_commitment(commitment.digest(), &self.moves)?;
        self.transition(RoundState::AwaitingInput);

        let human = match self.read_choice(commitment.digest())? {
            Choice::Play(human) => human,
            Choice::Exit => {
                self.ui.confirm_exit()?;
                return Ok(RoundEnd::Exit);
            }
            Choice::Interrupted => return Ok(RoundEnd::Interrupted),
        };

        let outcome = OutcomeResolver::resolve(&self.moves, human, computer);
        self.transition(RoundState::Resolved);

        let result = self.reveal(human, computer, outcome, commitment);
        self.ui.show_result(&result)?;
        self.transition(RoundState::Displayed);

        self.rounds_played += 1;
        info!(outcome = %result.outcome, "Round finished");
        Ok(RoundEnd::Completed(result))
    }

    /// Prompt until the player picks a move or leaves
    fn read_choice(&mut self, digest: &str) -> GameResult<Choice> {
        loop {
            let line = match self.ui.prompt_move()? {
                UserInput::Line(line) => line,
                UserInput::Interrupted => {
                    info!("Interrupted at move prompt");
                    return Ok(Choice::Interrupted);
                }
            };

            match Selection::parse(&line, &self.moves) {
                Ok(Selection::Help) => {
                    self.ui.show_help(&self.matrix)?;
                    self.ui.show_commitment(digest, &self.moves)?;
                }
                Ok(Selection::Play(human)) => return Ok(Choice::Play(human)),
                Ok(Selection::Exit) => return Ok(Choice::Exit),
                Err(err) if err.is_recoverable() => {
                    debug!(error = %err, "Rejected selection");
                    self.ui.show_error(&err)?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn reveal(
        &self,
        human: Move,
        computer: Move,
        outcome: Outcome,
        commitment: Commitment,
    ) -> RoundResult {
        let digest = commitment.digest().to_string();
        RoundResult {
            human_move: self.moves.name(human).to_string(),
            computer_move: self.moves.name(computer).to_string(),
            outcome,
            key: commitment.reveal(),
            digest,
        }
    }

    fn transition(&mut self, next: RoundState) {
        debug!(from = ?self.state, to = ?next, "Round state change");
        self.state = Some(next);
    }

    fn finish(&self, end: SessionEnd) -> SessionEnd {
        info!(?end, rounds = self.rounds_played, "Session ended");
        end
    }
}
