//! Winner determination for N moves arranged on a circle.
//!
//! A move beats the `N / 2` moves that precede it on the circle and loses to
//! the `N / 2` moves that follow it. With `[Rock, Paper, Scissors]` this is
//! the classic game: Paper beats Rock, Scissors beats Paper and Rock wraps
//! around to beat Scissors.

use super::moves::MoveSet;
use crate::error::GameError;
use crate::protocol::GameResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome from one move's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// The same pairing seen from the other side
    pub fn flip(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The half-circle rule for a circle of `size` moves.
///
/// Balanced only when `size` is odd; `MoveSet` guarantees that.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircleRule {
    size: usize,
}

impl CircleRule {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// How many moves each move beats (and loses to)
    pub fn half(&self) -> usize {
        self.size / 2
    }

    /// Outcome for the move at `attacker` against the move at `defender`.
    ///
    /// Indices must be below `size`.
    pub fn outcome(&self, attacker: usize, defender: usize) -> Outcome {
        debug_assert!(attacker < self.size && defender < self.size);
        if attacker == defender {
            return Outcome::Draw;
        }
        // Distance walking backwards from attacker to defender
        let diff = (attacker + self.size - defender) % self.size;
        if diff <= self.half() {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    /// Indices of the moves that `index` beats
    pub fn beats(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(move |&other| self.outcome(index, other) == Outcome::Win)
    }

    /// Indices of the moves that beat `index`
    pub fn beaten_by(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(move |&other| self.outcome(index, other) == Outcome::Lose)
    }
}

/// Decide a round from the two move labels.
///
/// Fails with `UnrecognizedMove` when either label is not in `moves`.
pub fn determine_winner(
    user_move: &str,
    computer_move: &str,
    moves: &MoveSet,
) -> Result<GameResult, GameError> {
    let user = moves
        .index_of(user_move)
        .ok_or_else(|| GameError::UnrecognizedMove(user_move.to_string()))?;
    let computer = moves
        .index_of(computer_move)
        .ok_or_else(|| GameError::UnrecognizedMove(computer_move.to_string()))?;

    Ok(moves.judge(user, computer))
}
