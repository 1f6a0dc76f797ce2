//! Cryptographic primitives for the commit-reveal scheme.
//!
//! This module provides:
//! - SecretKey, the per-round HMAC key revealed after the round
//! - Commitment, HMAC-SHA256 of the computer's move under that key
//! - RandomSource and its implementations

mod commitment;
mod key;
mod random;

pub use commitment::Commitment;
pub use key::{SecretKey, KEY_LEN};
pub use random::{EntropyError, FixedRandom, OsRandom, RandomSource, SeededRandom};

use thiserror::Error;

/// Errors when parsing hex-encoded keys and digests
#[derive(Debug, Error, PartialEq)]
pub enum CryptoError {
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Decode a 64-character hex string into 32 bytes
pub(crate) fn decode_hex32(s: &str) -> Result<[u8; 32], CryptoError> {
    let bytes = hex::decode(s.trim())?;
    if bytes.len() != 32 {
        return Err(CryptoError::InvalidLength {
            expected: 32,
            actual: bytes.len(),
        });
    }
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&bytes);
    Ok(arr)
}

/// Serde helper for 32-byte values carried as hex strings
pub(crate) mod hex32 {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        super::decode_hex32(&hex_str).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_hex32() {
        let encoded = "ab".repeat(32);
        assert_eq!(decode_hex32(&encoded).unwrap(), [0xab; 32]);
    }

    #[test]
    fn test_decode_hex32_wrong_length() {
        assert_eq!(
            decode_hex32("abcd"),
            Err(CryptoError::InvalidLength {
                expected: 32,
                actual: 2
            })
        );
    }

    #[test]
    fn test_decode_hex32_not_hex() {
        assert!(matches!(
            decode_hex32(&"zz".repeat(32)),
            Err(CryptoError::InvalidHex(_))
        ));
    }
}
