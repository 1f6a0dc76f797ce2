//! Game configuration built from the command line.

use crate::cli::PlayArgs;
use rps_game_core::{MoveSet, MoveSetError};

/// Everything a session needs besides its randomness source
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Validated move list
    pub moves: MoveSet,
    /// Print a JSON transcript after every round
    pub transcript: bool,
}

impl GameConfig {
    pub fn from_args(args: &PlayArgs) -> Result<Self, MoveSetError> {
        Ok(Self {
            moves: MoveSet::new(args.moves.iter().cloned())?,
            transcript: args.transcript,
        })
    }
}
