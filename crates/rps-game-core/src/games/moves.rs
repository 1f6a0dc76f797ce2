//! The ordered set of moves a session is played with.

use super::resolver::{CircleRule, Outcome};
use crate::protocol::GameResult;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Minimum number of moves in a set
pub const MIN_MOVES: usize = 3;

/// Reasons a list of labels cannot form a move set
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveSetError {
    #[error("at least 3 moves are required, got {0}")]
    TooFew(usize),

    #[error("the number of moves must be odd, got {0}")]
    EvenCount(usize),

    #[error("move {0:?} appears more than once")]
    Duplicate(String),
}

/// Ordered, odd-sized list of unique move labels.
///
/// Position in the list defines the circle the winner rule walks around.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MoveSet {
    labels: Vec<String>,
}

impl MoveSet {
    /// Validate and build a move set
    pub fn new<I, S>(labels: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if labels.len() < MIN_MOVES {
            return Err(MoveSetError::TooFew(labels.len()));
        }
        if labels.len() % 2 == 0 {
            return Err(MoveSetError::EvenCount(labels.len()));
        }
        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(MoveSetError::Duplicate(label.clone()));
            }
        }

        Ok(Self { labels })
    }

    /// Number of moves
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false for a validated set
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Position of `label`, if it belongs to the set
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Iterate over labels in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// The winner rule for a circle of this size
    pub fn rule(&self) -> CircleRule {
        CircleRule::new(self.len())
    }

    /// Outcome for the move at `attacker` against the move at `defender`
    pub fn outcome(&self, attacker: usize, defender: usize) -> Outcome {
        self.rule().outcome(attacker, defender)
    }

    /// Judge a round by indices, user first
    pub fn judge(&self, user: usize, computer: usize) -> GameResult {
        GameResult::from_user_outcome(self.outcome(user, computer))
    }
}

impl TryFrom<Vec<String>> for MoveSet {
    type Error = MoveSetError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(labels)
    }
}

impl From<MoveSet> for Vec<String> {
    fn from(moves: MoveSet) -> Self {
        moves.labels
    }
}
