//! RPS Game CLI
//!
//! Rock-paper-scissors against the computer with any odd number of moves.
//! Before every round the computer prints an HMAC of its move; after the
//! round it prints the key, so the player can check the move was not changed.
//!
//! # Usage
//!
//! ```bash
//! # Classic game
//! rps-game play Rock Paper Scissors
//!
//! # Seven moves, with a JSON transcript after every round
//! rps-game play Rock Gun Lightning Devil Dragon Water Air --transcript
//!
//! # Who beats whom
//! rps-game table Rock Paper Scissors Lizard Spock
//!
//! # Check a finished round
//! rps-game verify --key <hex> --hmac <hex> --move Rock
//! ```

use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::error;

mod cli;
mod commands;
mod config;
mod display;
mod input;
mod logging;
mod session;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.log_level) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    let outcome = match &cli.command {
        Commands::Play(args) => commands::play(args).map(|_| true),
        Commands::Table(args) => commands::table(args, &mut io::stdout().lock()).map(|_| true),
        Commands::Verify(args) => commands::verify(args, &mut io::stdout().lock()),
    };

    ExitCode::from(exit_status(&outcome))
}

/// Process status for a command result: 0 only when it ran and succeeded
fn exit_status(outcome: &anyhow::Result<bool>) -> u8 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            eprintln!("{e:#}");
            1
        }
    }
}
