//! Commitment engine: picks the computer's move and commits to it.

use super::round::CommittedRound;
use crate::crypto::{Commitment, EntropyError, OsRandom, RandomSource, SecretKey};
use crate::error::GameError;
use crate::games::MoveSet;
use tracing::{debug, error};

/// Produces binding, non-revealing commitments to randomly chosen moves.
///
/// All randomness flows through the injected `RandomSource`.
pub struct CommitmentEngine<R: RandomSource> {
    rng: R,
}

impl CommitmentEngine<OsRandom> {
    /// Engine backed by the operating system CSPRNG
    pub fn from_os() -> Self {
        Self::new(OsRandom)
    }
}

impl Default for CommitmentEngine<OsRandom> {
    fn default() -> Self {
        Self::from_os()
    }
}

impl<R: RandomSource> CommitmentEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Fresh 32-byte key. Entropy failure is fatal and never retried.
    pub fn generate_key(&mut self) -> Result<SecretKey, GameError> {
        SecretKey::generate(&mut self.rng).map_err(|e| {
            error!(error = %e, "Failed to obtain entropy for secret key");
            GameError::from(e)
        })
    }

    /// Uniformly random move from the set
    pub fn select_move<'m>(&mut self, moves: &'m MoveSet) -> Result<&'m str, GameError> {
        let upper = moves.len();
        let index = self.rng.pick_index(upper)?;
        moves
            .get(index)
            .ok_or(GameError::Entropy(EntropyError::OutOfRange { index, upper }))
    }

    /// HMAC-SHA256 of the move under the key
    pub fn commit(key: &SecretKey, move_label: &str) -> Commitment {
        Commitment::new(key, move_label)
    }

    /// Hand the key over for verification
    pub fn reveal(key: SecretKey) -> SecretKey {
        key
    }

    /// Generate a key, choose the computer's move and commit to it
    pub fn start_round(&mut self, moves: &MoveSet) -> Result<CommittedRound, GameError> {
        let key = self.generate_key()?;
        let computer_move = self.select_move(moves)?.to_string();
        let commitment = Self::commit(&key, &computer_move);
        let round = CommittedRound::new(key, computer_move, commitment);

        debug!(round = %round.id(), commitment = %commitment, "Round committed");
        Ok(round)
    }
}
