//! Full pairwise outcome table, used for the in-game help.

use super::moves::MoveSet;
use super::resolver::Outcome;
use serde::Serialize;

/// N×N table of outcomes from the row move's point of view
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutcomeMatrix {
    labels: Vec<String>,
    cells: Vec<Outcome>,
}

impl OutcomeMatrix {
    /// Derive the table for every ordered pair of moves
    pub fn build(moves: &MoveSet) -> Self {
        let rule = moves.rule();
        let size = moves.len();
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| rule.outcome(row, col)))
            .collect();

        Self {
            labels: moves.iter().map(str::to_string).collect(),
            cells,
        }
    }

    pub fn size(&self) -> usize {
        self.labels.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Outcome of the row move against the column move
    pub fn outcome(&self, row: usize, col: usize) -> Outcome {
        self.cells[row * self.size() + col]
    }

    /// One row of the table
    pub fn row(&self, row: usize) -> &[Outcome] {
        let size = self.size();
        &self.cells[row * size..(row + 1) * size]
    }

    /// Rows paired with their move label
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Outcome])> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.cells.chunks(self.size()))
    }

    pub fn wins(&self, row: usize) -> usize {
        self.count(row, Outcome::Win)
    }

    pub fn losses(&self, row: usize) -> usize {
        self.count(row, Outcome::Lose)
    }

    fn count(&self, row: usize, outcome: Outcome) -> usize {
        self.row(row).iter().filter(|&&o| o == outcome).count()
    }
}
