//! Parsing of one line of player input.

use rps_game_core::MoveSet;

/// Input that ends the session
pub const EXIT: &str = "0";
/// Input that shows the outcome table
pub const HELP: &str = "?";

/// What the player asked for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Play the move at this index
    Move(usize),
    Help,
    Exit,
    Invalid(String),
}

impl Selection {
    /// Interpret a line as a 1-based menu number, a sentinel or a move label
    pub fn parse(line: &str, moves: &MoveSet) -> Self {
        let input = line.trim();

        match input {
            EXIT => return Selection::Exit,
            HELP => return Selection::Help,
            _ => {}
        }

        if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
            return match input.parse::<usize>() {
                Ok(n) if (1..=moves.len()).contains(&n) => Selection::Move(n - 1),
                _ => Selection::Invalid(input.to_string()),
            };
        }

        match moves.index_of(input) {
            Some(index) => Selection::Move(index),
            None => Selection::Invalid(input.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rps() -> MoveSet {
        MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap()
    }

    #[test]
    fn test_menu_numbers() {
        let moves = rps();
        assert_eq!(Selection::parse("1", &moves), Selection::Move(0));
        assert_eq!(Selection::parse("3\n", &moves), Selection::Move(2));
        assert_eq!(Selection::parse(" 2 ", &moves), Selection::Move(1));
    }

    #[test]
    fn test_sentinels() {
        let moves = rps();
        assert_eq!(Selection::parse("0", &moves), Selection::Exit);
        assert_eq!(Selection::parse("?\n", &moves), Selection::Help);
    }

    #[test]
    fn test_out_of_range_numbers() {
        let moves = rps();
        assert_eq!(
            Selection::parse("4", &moves),
            Selection::Invalid("4".to_string())
        );
        assert_eq!(
            Selection::parse("99999999999999999999999", &moves),
            Selection::Invalid("99999999999999999999999".to_string())
        );
    }

    #[test]
    fn test_labels() {
        let moves = rps();
        assert_eq!(Selection::parse("Paper", &moves), Selection::Move(1));
        assert_eq!(
            Selection::parse("paper", &moves),
            Selection::Invalid("paper".to_string())
        );
    }

    #[test]
    fn test_garbage_and_empty() {
        let moves = rps();
        assert_eq!(
            Selection::parse("-1", &moves),
            Selection::Invalid("-1".to_string())
        );
        assert_eq!(Selection::parse("", &moves), Selection::Invalid(String::new()));
    }

    #[test]
    fn test_numeric_labels_lose_to_menu_numbers() {
        let moves = MoveSet::new(["3", "2", "1"]).unwrap();
        assert_eq!(Selection::parse("1", &moves), Selection::Move(0));
    }
}
