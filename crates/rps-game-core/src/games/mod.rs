//! Move sets and winner determination.

mod matrix;
mod moves;
mod resolver;

pub use matrix::OutcomeMatrix;
pub use moves::{MoveSet, MoveSetError, MIN_MOVES};
pub use resolver::{determine_winner, CircleRule, Outcome};
