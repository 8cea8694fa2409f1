//! HMAC commit-and-reveal for the computer's move
//!
//! Before the player chooses, the computer draws a fresh random key and
//! publishes `HMAC-SHA256(key, move)`. After the round the key is revealed, so
//! the player can recompute the digest for the announced move and confirm it
//! matches what was shown up front.
//!
//! The HMAC key is the hex text of the secret exactly as displayed, which lets
//! any off-the-shelf HMAC-SHA256 tool check a round from the printed values.

use std::fmt;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::{debug, instrument};
use crate::error::{GameError, GameResult};
use crate::game::KeyGenerator;

type HmacSha256 = Hmac<Sha256>;

/// Default secret size in bytes (256 bits)
pub const DEFAULT_KEY_LENGTH: usize = 32;

/// Hex-encoded secret key, withheld until the round is over
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    fn from_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Raw key bytes decoded from the hex text
    pub fn to_bytes(&self) -> GameResult<Vec<u8>> {
        Ok(hex::decode(&self.0)?)
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// A published digest together with the key that opens it
///
/// Revealing consumes the commitment, so a key can only ever back one round.
#[derive(Debug)]
pub struct Commitment {
    key: SecretKey,
    digest: String,
}

impl Commitment {
    /// Lowercase hex HMAC, safe to show before the player moves
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Give up the key once the round is decided
    pub fn reveal(self) -> SecretKey {
        self.key
    }
}

/// Commitment factory drawing a fresh key per call
pub struct FairCommitment<K> {
    keys: K,
    key_length: usize,
}

impl<K: KeyGenerator> FairCommitment<K> {
    pub fn new(keys: K) -> Self {
        Self {
            keys,
            key_length: DEFAULT_KEY_LENGTH,
        }
    }

    /// Use a longer key; anything under 256 bits is refused
    pub fn with_key_length(keys: K, key_length: usize) -> GameResult<Self> {
        if key_length < DEFAULT_KEY_LENGTH {
            return Err(GameError::configuration(
                format!("Key length must be at least {} bytes", DEFAULT_KEY_LENGTH),
                "game.key_length",
            ));
        }
        Ok(Self { keys, key_length })
    }

    pub fn key_length(&self) -> usize {
        self.key_length
    }

    /// Bind `message` to a brand-new secret key
    #[instrument(level = "debug", skip(self, message))]
    pub fn commit(&mut self, message: &str) -> GameResult<Commitment> {
        let mut raw = vec![0u8; self.key_length];
        self.keys.fill_key(&mut raw)?;

        let key = SecretKey::from_bytes(&raw);
        let digest = keyed_hash(key.as_str(), message);

        debug!(digest = %digest, "Commitment created");
        Ok(Commitment { key, digest })
    }
}

/// Lowercase hex `HMAC-SHA256(key, message)` with the key taken as text
pub fn keyed_hash(key: &str, message: &str) -> String {
    let mut mac = new_mac(key);
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Check a revealed key and move against the digest shown before the round
///
/// Comparison is constant time. A digest that is not valid hex is an error
/// rather than a mismatch.
pub fn verify(key: &str, message: &str, digest: &str) -> GameResult<bool> {
    let expected = hex::decode(digest.trim())?;
    let mut mac = new_mac(key);
    mac.update(message.as_bytes());
    Ok(mac.verify_slice(&expected).is_ok())
}

fn new_mac(key: &str) -> HmacSha256 {
    // HMAC accepts keys of any length, so construction cannot fail
    match HmacSha256::new_from_slice(key.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => unreachable!("HMAC-SHA256 accepts keys of any length"),
    }
}
