//! Interactive session: one committed round after another until the player exits.

use crate::config::GameConfig;
use crate::display::{self, SEPARATOR};
use crate::input::Selection;
use anyhow::Context;
use rps_game_core::{CommitmentEngine, OutcomeMatrix, RandomSource};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// How a session ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds played to completion
    pub rounds: usize,
}

pub struct Session<R: RandomSource> {
    config: GameConfig,
    engine: CommitmentEngine<R>,
}

impl<R: RandomSource> Session<R> {
    pub fn new(config: GameConfig, engine: CommitmentEngine<R>) -> Self {
        Self { config, engine }
    }

    /// Play rounds reading one line per prompt from `input`.
    ///
    /// Ends on the exit sentinel or end of input. Failure to obtain entropy
    /// aborts the session.
    pub fn run<I: BufRead, O: Write>(
        &mut self,
        mut input: I,
        out: &mut O,
    ) -> anyhow::Result<SessionSummary> {
        let moves = &self.config.moves;
        let mut rounds = 0;
        let mut line = String::new();

        info!(moves = moves.len(), "Session started");

        'session: loop {
            let mut round = self
                .engine
                .start_round(moves)
                .context("could not commit to a computer move")?;

            writeln!(out, "HMAC: {}", round.commitment())?;
            display::write_menu(out, moves)?;

            loop {
                write!(out, "Enter your move: ")?;
                out.flush()?;

                line.clear();
                if input.read_line(&mut line)? == 0 {
                    debug!(round = %round.id(), "Input closed");
                    writeln!(out)?;
                    break 'session;
                }

                let label = match Selection::parse(&line, moves) {
                    Selection::Exit => break 'session,
                    Selection::Help => {
                        display::write_matrix(out, &OutcomeMatrix::build(moves))?;
                        continue;
                    }
                    Selection::Invalid(text) => {
                        warn!(input = %text, "Rejected move selection");
                        writeln!(out, "Invalid input. Please enter a valid move.")?;
                        continue;
                    }
                    Selection::Move(index) => moves.get(index).unwrap_or_default(),
                };

                match round.play(label, moves) {
                    Ok(revealed) => {
                        display::write_reveal(out, &revealed)?;
                        if self.config.transcript {
                            writeln!(out, "Transcript: {}", serde_json::to_string(&revealed)?)?;
                        }
                        writeln!(out, "\n{SEPARATOR}\n")?;
                        rounds += 1;
                        continue 'session;
                    }
                    Err((unplayed, e)) => {
                        warn!(error = %e, "Move rejected by resolver");
                        writeln!(out, "Invalid input. Please enter a valid move.")?;
                        round = unplayed;
                    }
                }
            }
        }

        writeln!(out, "Quitting game...")?;
        info!(rounds, "Session ended");
        Ok(SessionSummary { rounds })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_game_core::crypto::{Commitment, FixedRandom, SecretKey, KEY_LEN};
    use rps_game_core::{EntropyError, MoveSet, RevealedRound};
    use std::io::Cursor;

    fn config(transcript: bool) -> GameConfig {
        GameConfig {
            moves: MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap(),
            transcript,
        }
    }

    fn play(script: &str, rng: FixedRandom, transcript: bool) -> (SessionSummary, String) {
        let mut session = Session::new(config(transcript), CommitmentEngine::new(rng));
        let mut out = Vec::new();
        let summary = session.run(Cursor::new(script), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_exit_immediately() {
        let (summary, out) = play("0\n", FixedRandom::new(1, [0]), false);
        assert_eq!(summary.rounds, 0);
        assert!(out.starts_with("HMAC: "));
        assert!(out.contains("1 - Rock\n2 - Paper\n3 - Scissors\n0 - exit\n? - help\n"));
        assert!(out.ends_with("Quitting game...\n"));
    }

    #[test]
    fn test_round_reveals_key_matching_hmac() {
        let (summary, out) = play("1\n0\n", FixedRandom::new(0x0b, [2]), false);
        assert_eq!(summary.rounds, 1);

        let key = SecretKey::from_bytes([0x0b; KEY_LEN]);
        let hmac = Commitment::new(&key, "Scissors");
        assert!(out.contains(&format!("HMAC: {hmac}\n")));
        assert!(out.contains("Your move: Rock\n"));
        assert!(out.contains("Computer move: Scissors\n"));
        assert!(out.contains("You win!\n"));
        assert!(out.contains(&format!("HMAC key: {key}\n")));
        assert!(out.contains(SEPARATOR));
    }

    #[test]
    fn test_rounds_use_fresh_commitments() {
        let (summary, out) = play("Rock\nPaper\n0\n", FixedRandom::new(0x22, [1, 0]), false);
        assert_eq!(summary.rounds, 2);
        assert_eq!(out.matches("HMAC: ").count(), 3);
        assert!(out.contains("Computer wins.\n"));
        assert!(out.contains("You win!\n"));
    }

    #[test]
    fn test_help_and_invalid_keep_the_round() {
        let (summary, out) = play("?\nLizard\n7\n2\n", FixedRandom::new(0x22, [1]), false);
        assert_eq!(summary.rounds, 1);
        assert!(out.contains("| Rock "));
        assert_eq!(
            out.matches("Invalid input. Please enter a valid move.").count(),
            2
        );
        // Help and bad input did not start new rounds: one for the play, one
        // started afterwards and closed by end of input
        assert_eq!(out.matches("HMAC: ").count(), 2);
        assert!(out.contains("It's a draw.\n"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let (summary, out) = play("", FixedRandom::new(0, [0]), false);
        assert_eq!(summary.rounds, 0);
        assert!(out.ends_with("Quitting game...\n"));
    }

    #[test]
    fn test_transcript_line() {
        let (_, out) = play("3\n0\n", FixedRandom::new(0x0b, [0]), true);
        let json = out
            .lines()
            .find_map(|l| l.strip_prefix("Transcript: "))
            .unwrap();
        let revealed: RevealedRound = serde_json::from_str(json).unwrap();
        assert_eq!(revealed.user_move, "Scissors");
        assert_eq!(revealed.computer_move, "Rock");
        assert!(revealed.verify());
    }

    #[test]
    fn test_entropy_failure_aborts_session() {
        struct Dry;

        impl RandomSource for Dry {
            fn fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), EntropyError> {
                Err(EntropyError::Unavailable("dry".into()))
            }

            fn pick_index(&mut self, _upper: usize) -> Result<usize, EntropyError> {
                Err(EntropyError::Unavailable("dry".into()))
            }
        }

        let mut session = Session::new(config(false), CommitmentEngine::new(Dry));
        let mut out = Vec::new();
        let err = session.run(Cursor::new("1\n"), &mut out).unwrap_err();
        assert!(err.to_string().contains("could not commit"));
        assert!(out.is_empty());
    }
}
