//! Protocol types.

use crate::games::Outcome;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique round identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    /// Create a new random round ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for RoundId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Debug for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundId({})", self.0)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    User,
    Computer,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::User => write!(f, "User"),
            Player::Computer => write!(f, "Computer"),
        }
    }
}

/// Result of a round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    UserWins,
    ComputerWins,
    Draw,
}

impl GameResult {
    /// Convert the user's outcome against the computer into a result
    pub fn from_user_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => GameResult::UserWins,
            Outcome::Lose => GameResult::ComputerWins,
            Outcome::Draw => GameResult::Draw,
        }
    }

    /// The winning side, if any
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::UserWins => Some(Player::User),
            GameResult::ComputerWins => Some(Player::Computer),
            GameResult::Draw => None,
        }
    }

    /// Outcome from the given player's point of view
    pub fn outcome_for(&self, player: Player) -> Outcome {
        match self.winner() {
            None => Outcome::Draw,
            Some(winner) if winner == player => Outcome::Win,
            Some(_) => Outcome::Lose,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameResult::UserWins => "User wins",
            GameResult::ComputerWins => "Computer wins",
            GameResult::Draw => "Draw",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
