//! Subcommand implementations.

use crate::cli::{PlayArgs, TableArgs, VerifyArgs};
use crate::config::GameConfig;
use crate::display;
use crate::session::{Session, SessionSummary};
use anyhow::Context;
use rps_game_core::{Commitment, CommitmentEngine, MoveSet, MoveSetError, OutcomeMatrix, SecretKey};
use std::io::{self, Write};
use tracing::info;

/// Printed when the move list cannot be played with
pub fn usage_error(err: &MoveSetError) -> String {
    format!(
        "Invalid input. Please provide an odd number of unique moves.\n\
         Reason: {err}\n\
         Example: rps-game play Rock Paper Scissors"
    )
}

/// Run the interactive game on stdin/stdout
pub fn play(args: &PlayArgs) -> anyhow::Result<SessionSummary> {
    let config = GameConfig::from_args(args).map_err(|e| anyhow::anyhow!(usage_error(&e)))?;
    let mut session = Session::new(config, CommitmentEngine::from_os());

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session.run(stdin.lock(), &mut stdout)
}

/// Print the outcome table for a move list
pub fn table<W: Write>(args: &TableArgs, out: &mut W) -> anyhow::Result<()> {
    let moves = MoveSet::new(args.moves.iter().cloned()).map_err(|e| anyhow::anyhow!(usage_error(&e)))?;
    display::write_matrix(out, &OutcomeMatrix::build(&moves))?;
    Ok(())
}

/// Recompute the HMAC from a revealed key and report whether it matches
pub fn verify<W: Write>(args: &VerifyArgs, out: &mut W) -> anyhow::Result<bool> {
    let key: SecretKey = args.key.parse().context("invalid --key")?;
    let hmac: Commitment = args.hmac.parse().context("invalid --hmac")?;
    let recomputed = Commitment::new(&key, &args.move_label);

    let matches = hmac.verify(&key, &args.move_label);
    info!(matches, "Verified commitment");

    writeln!(out, "Recomputed HMAC: {recomputed}")?;
    if matches {
        writeln!(out, "OK: the computer committed to {:?} before you moved.", args.move_label)?;
    } else {
        writeln!(out, "MISMATCH: the HMAC was not made over {:?} with this key.", args.move_label)?;
    }
    Ok(matches)
}
