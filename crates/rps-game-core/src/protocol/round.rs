//! A single round, from commitment to reveal.

use super::types::{GameResult, RoundId};
use crate::crypto::{Commitment, SecretKey};
use crate::error::GameError;
use crate::games::{determine_winner, MoveSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A round whose computer move is fixed but not yet disclosed.
///
/// Only the id and commitment can be read until the round is played.
pub struct CommittedRound {
    id: RoundId,
    key: SecretKey,
    computer_move: String,
    commitment: Commitment,
}

impl CommittedRound {
    pub(crate) fn new(key: SecretKey, computer_move: String, commitment: Commitment) -> Self {
        Self {
            id: RoundId::new(),
            key,
            computer_move,
            commitment,
        }
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    /// Digest to show the player before they choose
    pub fn commitment(&self) -> Commitment {
        self.commitment
    }

    /// Resolve the round against the player's move and reveal everything.
    ///
    /// An unrecognized move hands the round back untouched so the caller can
    /// ask again under the same commitment.
    pub fn play(
        self,
        user_move: &str,
        moves: &MoveSet,
    ) -> Result<RevealedRound, (CommittedRound, GameError)> {
        let judged = determine_winner(user_move, &self.computer_move, moves);
        let result = match judged {
            Ok(result) => result,
            Err(e) => return Err((self, e)),
        };

        debug!(round = %self.id, result = %result, "Round resolved");
        Ok(RevealedRound {
            id: self.id,
            user_move: user_move.to_string(),
            computer_move: self.computer_move,
            result,
            commitment: self.commitment,
            key: self.key,
        })
    }
}

impl fmt::Debug for CommittedRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommittedRound")
            .field("id", &self.id)
            .field("commitment", &self.commitment)
            .finish_non_exhaustive()
    }
}

/// Everything about a finished round, including the key needed to check it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedRound {
    pub id: RoundId,
    pub user_move: String,
    pub computer_move: String,
    pub result: GameResult,
    /// HMAC shown before the player chose
    pub commitment: Commitment,
    /// HMAC key, disclosed only now
    pub key: SecretKey,
}

impl RevealedRound {
    /// Recompute the HMAC from the revealed key and computer move
    pub fn verify(&self) -> bool {
        self.commitment.verify(&self.key, &self.computer_move)
    }
}
