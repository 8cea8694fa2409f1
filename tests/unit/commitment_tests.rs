//! Unit tests for commitment creation, reveal and verification

use rochambeau::commitment::{keyed_hash, verify, DEFAULT_KEY_LENGTH};
use rochambeau::{FairCommitment, GameError, OsEntropy};
use crate::mocks::{BrokenKeys, CountingKeys};

#[cfg(test)]
mod commit_reveal_tests {
    use super::*;

    #[test]
    fn test_digest_matches_keyed_hash_of_move() {
        let mut commitments = FairCommitment::new(CountingKeys::starting_at(9));
        let commitment = commitments.commit("scissors").unwrap();
        let digest = commitment.digest().to_string();
        let key = commitment.reveal();

        assert_eq!(keyed_hash(key.as_str(), "scissors"), digest);
        assert!(verify(key.as_str(), "scissors", &digest).unwrap());
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let mut commitments = FairCommitment::new(CountingKeys::starting_at(0));
        let commitment = commitments.commit("rock").unwrap();

        assert_eq!(commitment.digest().len(), 64);
        assert!(commitment
            .digest()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_revealed_key_decodes_to_requested_length() {
        let mut commitments =
            FairCommitment::with_key_length(CountingKeys::starting_at(0), 48).unwrap();
        let key = commitments.commit("rock").unwrap().reveal();

        assert_eq!(key.to_bytes().unwrap().len(), 48);
        assert_eq!(key.as_str().len(), 96);
    }

    #[test]
    fn test_wrong_move_fails_verification() {
        let mut commitments = FairCommitment::new(CountingKeys::starting_at(3));
        let commitment = commitments.commit("paper").unwrap();
        let digest = commitment.digest().to_string();
        let key = commitment.reveal();

        assert!(!verify(key.as_str(), "rock", &digest).unwrap());
        assert!(!verify("00", "paper", &digest).unwrap());
    }

    #[test]
    fn test_verify_tolerates_surrounding_whitespace() {
        let digest = keyed_hash("abc", "lizard");
        assert!(verify("abc", "lizard", &format!("  {}\n", digest)).unwrap());
    }

    #[test]
    fn test_every_commit_draws_a_key() {
        let mut keys = CountingKeys::starting_at(0);
        {
            let mut commitments = FairCommitment::new(&mut keys);
            for _ in 0..5 {
                commitments.commit("rock").unwrap();
            }
        }
        assert_eq!(keys.issued, 5);
    }

    #[test]
    fn test_os_entropy_never_repeats() {
        let mut commitments = FairCommitment::new(OsEntropy::new().unwrap());
        let first = commitments.commit("rock").unwrap();
        let second = commitments.commit("rock").unwrap();

        assert_ne!(first.digest(), second.digest());
        assert_ne!(first.reveal().as_str(), second.reveal().as_str());
    }

    #[test]
    fn test_missing_entropy_is_fatal() {
        let mut commitments = FairCommitment::new(BrokenKeys);
        let err = commitments.commit("rock").unwrap_err();

        assert!(matches!(err, GameError::EntropySourceUnavailable { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_default_key_is_256_bits() {
        assert_eq!(DEFAULT_KEY_LENGTH * 8, 256);
        let commitments = FairCommitment::new(CountingKeys::starting_at(0));
        assert_eq!(commitments.key_length(), DEFAULT_KEY_LENGTH);
    }
}
