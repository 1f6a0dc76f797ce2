//! Round protocol: commit, play, reveal.

mod engine;
mod round;
mod types;

pub use engine::CommitmentEngine;
pub use round::{CommittedRound, RevealedRound};
pub use types::{GameResult, Player, RoundId};
