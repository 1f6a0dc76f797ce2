//! Error type for game operations.

use crate::crypto::EntropyError;
use crate::games::MoveSetError;
use thiserror::Error;

/// Errors from playing a round
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid move set: {0}")]
    InvalidMoveSet(#[from] MoveSetError),

    #[error("Unrecognized move: {0:?}")]
    UnrecognizedMove(String),

    #[error("Entropy failure: {0}")]
    Entropy(#[from] EntropyError),
}

impl GameError {
    /// Whether the session can carry on after this error.
    ///
    /// Only a bad move selection is recoverable; the player is asked again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::UnrecognizedMove(_))
    }
}
