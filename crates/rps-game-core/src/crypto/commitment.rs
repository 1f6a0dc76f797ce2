//! Commitment to the computer's move for the commit-reveal scheme.

use super::key::SecretKey;
use super::{decode_hex32, CryptoError};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

// Keyed with the key's hex text, exactly as printed on reveal
fn keyed_mac(key: &SecretKey, move_label: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(key.to_hex().as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(move_label.as_bytes());
    mac
}

/// Commitment = HMAC-SHA256(hex(key), move)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Commitment(#[serde(with = "super::hex32")] [u8; 32]);

impl Commitment {
    /// Commit to a move label under the given key
    pub fn new(key: &SecretKey, move_label: &str) -> Self {
        let result = keyed_mac(key, move_label).finalize().into_bytes();
        Self(result.into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the given key and move produce this commitment.
    ///
    /// The comparison runs in constant time.
    pub fn verify(&self, key: &SecretKey, move_label: &str) -> bool {
        keyed_mac(key, move_label).verify_slice(&self.0).is_ok()
    }
}

impl FromStr for Commitment {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(decode_hex32(s)?))
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{OsRandom, KEY_LEN};

    fn random_key() -> SecretKey {
        SecretKey::generate(&mut OsRandom).unwrap()
    }

    #[test]
    fn test_commitment_verification() {
        let key = random_key();
        let commitment = Commitment::new(&key, "Rock");

        assert!(commitment.verify(&key, "Rock"));
    }

    #[test]
    fn test_commitment_is_deterministic() {
        let key = SecretKey::from_bytes([7; KEY_LEN]);
        let first = Commitment::new(&key, "Lizard");
        for _ in 0..5 {
            assert_eq!(Commitment::new(&key, "Lizard"), first);
        }
    }

    #[test]
    fn test_different_moves_different_commitments() {
        let key = SecretKey::from_bytes([7; KEY_LEN]);
        let pairs = [
            ("Rock", "Paper"),
            ("Paper", "Scissors"),
            ("Scissors", "Rock"),
            ("Lizard", "Spock"),
            ("a", "A"),
        ];

        for (a, b) in pairs {
            assert_ne!(Commitment::new(&key, a), Commitment::new(&key, b));
        }
    }

    #[test]
    fn test_different_keys_different_commitments() {
        let commitment1 = Commitment::new(&random_key(), "Rock");
        let commitment2 = Commitment::new(&random_key(), "Rock");

        assert_ne!(commitment1, commitment2);
    }

    #[test]
    fn test_wrong_move_fails_verification() {
        let key = random_key();
        let commitment = Commitment::new(&key, "Rock");

        assert!(!commitment.verify(&key, "Paper"));
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let key1 = random_key();
        let key2 = random_key();
        let commitment = Commitment::new(&key1, "Rock");

        assert!(!commitment.verify(&key2, "Rock"));
    }

    #[test]
    fn test_known_answer() {
        let key = SecretKey::from_bytes([0x0b; KEY_LEN]);
        assert_eq!(
            Commitment::new(&key, "Rock").to_string(),
            "ae2bea4afc2cd33c42bf76ffd3db4cce537e6e0191c9a693325cc983561d4c6e"
        );

        let key = SecretKey::from_bytes([0x11; KEY_LEN]);
        assert_eq!(
            Commitment::new(&key, "Paper").to_string(),
            "33dc4a35fe91f7eccfe35a57c41f2435fbb9c9a1803f3dbb59a46f4805c68ed0"
        );
    }

    #[test]
    fn test_keyed_with_printed_hex_not_raw_bytes() {
        let key = SecretKey::from_bytes([0x0b; KEY_LEN]);
        let commitment = Commitment::new(&key, "Rock");

        let mut raw = HmacSha256::new_from_slice(key.as_bytes()).unwrap();
        raw.update(b"Rock");
        let raw: [u8; 32] = raw.finalize().into_bytes().into();
        assert_ne!(commitment.as_bytes(), &raw);

        let mut printed = HmacSha256::new_from_slice(key.to_string().as_bytes()).unwrap();
        printed.update(b"Rock");
        assert!(printed.verify_slice(commitment.as_bytes()).is_ok());
    }

    #[test]
    fn test_hex_display_and_parse() {
        let key = random_key();
        let commitment = Commitment::new(&key, "Rock");
        let hex = commitment.to_string();

        assert_eq!(hex.len(), 64);
        assert_eq!(hex.parse::<Commitment>().unwrap(), commitment);
    }
}
