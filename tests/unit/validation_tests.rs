//! Unit tests for move-set validation and prompt parsing

use rochambeau::{GameError, MoveSet, MoveSetValidator, Selection};

#[cfg(test)]
mod move_set_validator_tests {
    use super::*;

    fn field_of(err: GameError) -> String {
        match err {
            GameError::Configuration { field, .. } => field,
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_two_moves() {
        let err = MoveSetValidator::validate(&["a", "b"]).unwrap_err();
        assert_eq!(field_of(err), "moves.len");
    }

    #[test]
    fn test_rejects_even_count() {
        let err = MoveSetValidator::validate(&["a", "b", "c", "d"]).unwrap_err();
        assert_eq!(err.to_string(), "Enter an odd number of moves!");
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let err = MoveSetValidator::validate(&["a", "b", "a"]).unwrap_err();
        assert_eq!(err.to_string(), "There should be no repetitive moves!");
    }

    #[test]
    fn test_accepts_valid_lists() {
        assert!(MoveSetValidator::validate(&["rock", "paper", "scissors"]).is_ok());
        assert!(MoveSetValidator::validate(&["a", "b", "c", "d", "e"]).is_ok());
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!(MoveSet::new(["Rock", "rock", "ROCK"]).is_ok());
    }

    #[test]
    fn test_size_checked_before_duplicates() {
        let err = MoveSetValidator::validate(&["a", "a"]).unwrap_err();
        assert_eq!(err.to_string(), "The number of moves must be at least 3!");
    }
}

#[cfg(test)]
mod selection_tests {
    use super::*;

    #[test]
    fn test_messages_match_menu_wording() {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();

        let parse = Selection::parse("rock", &moves).unwrap_err();
        assert_eq!(parse.to_string(), "Only number or '?'");

        let negative = Selection::parse("-2", &moves).unwrap_err();
        assert_eq!(negative.to_string(), "Only positive numbers!");

        let too_big = Selection::parse("4", &moves).unwrap_err();
        assert_eq!(too_big.to_string(), "Select move only from the menu");
    }

    #[test]
    fn test_huge_numbers_are_range_errors() {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        assert!(matches!(
            Selection::parse("-99999999999999999999", &moves),
            Err(GameError::InputRange { selection: i64::MIN, .. })
        ));
        assert!(matches!(
            Selection::parse("9223372036854775807", &moves),
            Err(GameError::InputRange { .. })
        ));
        assert!(matches!(
            Selection::parse("99999999999999999999", &moves),
            Err(GameError::InputRange { selection: i64::MAX, .. })
        ));
    }

    #[test]
    fn test_last_menu_entry_selects_last_move() {
        let moves = MoveSet::new(["a", "b", "c", "d", "e"]).unwrap();
        match Selection::parse("5", &moves).unwrap() {
            Selection::Play(mv) => assert_eq!(moves.name(mv), "e"),
            other => panic!("unexpected selection {other:?}"),
        }
    }
}
