//! Per-round secret key used as the HMAC key.

use super::random::{EntropyError, RandomSource};
use super::{decode_hex32, CryptoError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of a secret key in bytes
pub const KEY_LEN: usize = 32;

/// Random HMAC key, generated fresh for every round and revealed at its end
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretKey(#[serde(with = "super::hex32")] [u8; KEY_LEN]);

impl SecretKey {
    /// Draw a new key from the given source
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Result<Self, EntropyError> {
        let mut bytes = [0u8; KEY_LEN];
        rng.fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex encoding, as shown to the player on reveal
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for SecretKey {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(decode_hex32(s)?))
    }
}

// Key material stays out of Debug output so it cannot leak into logs before reveal.
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(..)")
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
