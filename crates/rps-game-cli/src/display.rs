//! Console rendering for the game.

use crate::input::{EXIT, HELP};
use rps_game_core::{GameResult, MoveSet, OutcomeMatrix, RevealedRound};
use std::io::{self, Write};

pub const SEPARATOR: &str = "==================================";

/// Numbered move list plus the sentinel entries
pub fn write_menu<W: Write>(out: &mut W, moves: &MoveSet) -> io::Result<()> {
    writeln!(out, "Available moves:")?;
    for (index, label) in moves.iter().enumerate() {
        writeln!(out, "{} - {}", index + 1, label)?;
    }
    writeln!(out, "{EXIT} - exit")?;
    writeln!(out, "{HELP} - help")
}

pub fn verdict(result: GameResult) -> &'static str {
    match result {
        GameResult::UserWins => "You win!",
        GameResult::ComputerWins => "Computer wins.",
        GameResult::Draw => "It's a draw.",
    }
}

/// Both moves, the verdict and the revealed key
pub fn write_reveal<W: Write>(out: &mut W, round: &RevealedRound) -> io::Result<()> {
    writeln!(out, "Your move: {}", round.user_move)?;
    writeln!(out, "Computer move: {}", round.computer_move)?;
    writeln!(out, "{}", verdict(round.result))?;
    writeln!(out, "HMAC key: {}", round.key)
}

/// Outcome table, rows from the row move's point of view.
///
/// ```text
/// | v Move \ Against > | Rock | Paper | Scissors |
/// |--------------------|------|-------|----------|
/// | Rock               | Draw | Lose  | Win      |
/// ```
pub fn write_matrix<W: Write>(out: &mut W, matrix: &OutcomeMatrix) -> io::Result<()> {
    const CORNER: &str = "v Move \\ Against >";

    let first_width = matrix
        .labels()
        .iter()
        .map(|l| l.chars().count())
        .chain([CORNER.len()])
        .max()
        .unwrap_or(CORNER.len());
    // Every column must also fit the longest outcome word
    let widths: Vec<usize> = matrix
        .labels()
        .iter()
        .map(|l| l.chars().count().max("Draw".len()))
        .collect();

    write!(out, "| {:<first_width$} |", CORNER)?;
    for (label, width) in matrix.labels().iter().zip(&widths) {
        write!(out, " {:<width$} |", label, width = *width)?;
    }
    writeln!(out)?;

    write!(out, "|{}|", "-".repeat(first_width + 2))?;
    for width in &widths {
        write!(out, "{}|", "-".repeat(width + 2))?;
    }
    writeln!(out)?;

    for (label, row) in matrix.rows() {
        write!(out, "| {:<first_width$} |", label)?;
        for (outcome, width) in row.iter().zip(&widths) {
            write!(out, " {:<width$} |", outcome, width = *width)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
