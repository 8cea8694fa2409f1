//! Interrupt handling and fatal setup failures

use rochambeau::{GameError, GameSession, MoveSet, RoundEnd, SessionEnd};
use crate::mocks::{BrokenKeys, CountingKeys, ScriptedMoves, ScriptedUi, UiEvent};

fn classic() -> MoveSet {
    MoveSet::new(["rock", "paper", "scissors"]).unwrap()
}

#[cfg(test)]
mod interrupt_tests {
    use super::*;

    #[test]
    fn test_interrupt_at_prompt_ends_session() {
        let ui = ScriptedUi::with_lines(["x"]).then_interrupt();
        let mut session = GameSession::new(
            classic(),
            ScriptedMoves::always("rock"),
            CountingKeys::starting_at(1),
            ui,
        );

        assert_eq!(session.run().unwrap(), SessionEnd::Interrupted);
        let ui = session.into_ui();
        assert_eq!(ui.errors().len(), 1);
        assert!(ui.results().is_empty());
        assert!(!ui.events.contains(&UiEvent::Exit));
    }

    #[test]
    fn test_interrupt_at_ack_ends_after_result() {
        let ui = ScriptedUi::with_lines(["2"]).interrupt_ack();
        let mut session = GameSession::new(
            classic(),
            ScriptedMoves::always("rock"),
            CountingKeys::starting_at(1),
            ui,
        );

        assert_eq!(session.run().unwrap(), SessionEnd::Interrupted);
        assert_eq!(session.rounds_played(), 1);
        assert_eq!(session.ui().results().len(), 1);
    }

    #[test]
    fn test_play_round_reports_interrupt() {
        let ui = ScriptedUi::default().then_interrupt();
        let mut session = GameSession::new(
            classic(),
            ScriptedMoves::always("rock"),
            CountingKeys::starting_at(1),
            ui,
        );

        assert_eq!(session.play_round().unwrap(), RoundEnd::Interrupted);
    }
}

#[cfg(test)]
mod fatal_error_tests {
    use super::*;

    #[test]
    fn test_entropy_failure_stops_before_menu() {
        let ui = ScriptedUi::with_lines(["1"]);
        let mut session = GameSession::new(classic(), ScriptedMoves::always("rock"), BrokenKeys, ui);

        let err = session.run().unwrap_err();
        assert!(matches!(err, GameError::EntropySourceUnavailable { .. }));
        assert!(session.ui().events.is_empty());
        assert_eq!(session.state(), None);
    }

    #[test]
    fn test_unknown_computer_move_is_contract_violation() {
        let ui = ScriptedUi::with_lines(["1"]);
        let mut session = GameSession::new(
            classic(),
            ScriptedMoves::always("lizard"),
            CountingKeys::starting_at(1),
            ui,
        );

        assert_eq!(
            session.play_round().unwrap_err(),
            GameError::InvalidMove("lizard".to_string())
        );
    }
}
