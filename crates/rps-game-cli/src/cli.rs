//! Command-line arguments.

use clap::{Args, Parser, Subcommand};

/// Provably fair rock-paper-scissors for any odd number of moves
#[derive(Parser, Debug)]
#[command(name = "rps-game")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Provably fair rock-paper-scissors for any odd number of moves", long_about = None)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn", env = "RPS_GAME_LOG")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play against the computer
    Play(PlayArgs),

    /// Print who beats whom for a move list
    Table(TableArgs),

    /// Check a revealed key against the HMAC shown before the round
    Verify(VerifyArgs),
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Odd number (at least 3) of unique moves, e.g. Rock Paper Scissors
    #[arg(required = true, num_args = 1..)]
    pub moves: Vec<String>,

    /// Print a JSON transcript of every finished round
    #[arg(long)]
    pub transcript: bool,
}

#[derive(Args, Debug)]
pub struct TableArgs {
    /// Odd number (at least 3) of unique moves
    #[arg(required = true, num_args = 1..)]
    pub moves: Vec<String>,
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Revealed HMAC key (hex)
    #[arg(long)]
    pub key: String,

    /// HMAC shown at the start of the round (hex)
    #[arg(long)]
    pub hmac: String,

    /// Move the computer claimed to have played
    #[arg(long = "move")]
    pub move_label: String,
}
