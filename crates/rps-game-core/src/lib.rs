//! RPS Game Core Library
//!
//! Rock-paper-scissors generalized to any odd number of moves, with a
//! commit-reveal scheme that lets the player check the computer's move was
//! fixed before they chose theirs.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{Commitment, EntropyError, OsRandom, RandomSource, SecretKey};
pub use error::GameError;
pub use games::{determine_winner, MoveSet, MoveSetError, Outcome, OutcomeMatrix};
pub use protocol::{CommitmentEngine, CommittedRound, GameResult, Player, RevealedRound, RoundId};
