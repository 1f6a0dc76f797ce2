//! Randomness sources for key generation and move selection.

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use std::collections::VecDeque;
use thiserror::Error;

/// Errors from a randomness source
#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("Entropy source unavailable: {0}")]
    Unavailable(String),

    #[error("Cannot pick from an empty range")]
    EmptyRange,

    #[error("Source returned index {index} for range of {upper}")]
    OutOfRange { index: usize, upper: usize },
}

impl From<rand::Error> for EntropyError {
    fn from(err: rand::Error) -> Self {
        EntropyError::Unavailable(err.to_string())
    }
}

/// Capability that supplies randomness to the commitment engine
pub trait RandomSource {
    /// Fill `dest` with random bytes
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Pick a uniformly random index in `0..upper`
    fn pick_index(&mut self, upper: usize) -> Result<usize, EntropyError>;
}

/// Operating system CSPRNG
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng.try_fill_bytes(dest)?;
        Ok(())
    }

    fn pick_index(&mut self, upper: usize) -> Result<usize, EntropyError> {
        if upper == 0 {
            return Err(EntropyError::EmptyRange);
        }
        // Uniform via rejection sampling over fallible draws
        let upper = upper as u64;
        let zone = u64::MAX - (u64::MAX % upper);
        loop {
            let mut bytes = [0u8; 8];
            OsRng.try_fill_bytes(&mut bytes)?;
            let draw = u64::from_le_bytes(bytes);
            if draw < zone {
                return Ok((draw % upper) as usize);
            }
        }
    }
}

/// Deterministic source seeded from a `u64`, for tests and reproducible demos
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.rng.try_fill_bytes(dest)?;
        Ok(())
    }

    fn pick_index(&mut self, upper: usize) -> Result<usize, EntropyError> {
        if upper == 0 {
            return Err(EntropyError::EmptyRange);
        }
        Ok(self.rng.gen_range(0..upper))
    }
}

/// Scripted source for tests that need a known key and computer move.
///
/// Every key is filled with `key_byte`. Indices are served from the script in
/// order; once it runs out the last index is repeated.
#[derive(Clone, Debug)]
pub struct FixedRandom {
    key_byte: u8,
    indices: VecDeque<usize>,
    last: usize,
}

impl FixedRandom {
    pub fn new(key_byte: u8, indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            key_byte,
            indices: indices.into_iter().collect(),
            last: 0,
        }
    }
}

impl RandomSource for FixedRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        dest.fill(self.key_byte);
        Ok(())
    }

    fn pick_index(&mut self, upper: usize) -> Result<usize, EntropyError> {
        if upper == 0 {
            return Err(EntropyError::EmptyRange);
        }
        if let Some(index) = self.indices.pop_front() {
            self.last = index;
        }
        Ok(self.last % upper)
    }
}
