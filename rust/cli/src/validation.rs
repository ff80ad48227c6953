//! Input parsing for the interactive `play` command.
//!
//! Parsing is purely lexical. Whether a command fits the current phase is
//! decided later against the session.

use liarsclub_engine::hand::HAND_SIZE;

/// A command typed at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    /// Toggle the card at this 1-based hand position
    Toggle(usize),
    Play,
    Bluff,
    Pass,
    New,
}

/// Result of parsing one line of user input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Command(PlayCommand),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a line typed at the table.
///
/// Accepts (case-insensitive):
/// - `1`..`5` or `t N` / `toggle N` → toggle the card at position N
/// - `play` or `p` → submit the selection
/// - `bluff` or `b` → call bluff on the pending play
/// - `pass` → accept the pending play
/// - `new` → start a new game
/// - `q` or `quit` → leave
///
/// # Example
///
/// ```rust
/// # use liarsclub_cli::validation::{parse_play_input, ParseResult, PlayCommand};
/// assert_eq!(parse_play_input("3"), ParseResult::Command(PlayCommand::Toggle(3)));
/// assert_eq!(parse_play_input("T 1"), ParseResult::Command(PlayCommand::Toggle(1)));
/// assert_eq!(parse_play_input("bluff"), ParseResult::Command(PlayCommand::Bluff));
/// assert_eq!(parse_play_input("q"), ParseResult::Quit);
/// assert!(matches!(parse_play_input("6"), ParseResult::Invalid(_)));
/// ```
pub fn parse_play_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(first) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match (*first, parts.len()) {
        ("q" | "quit", 1) => ParseResult::Quit,
        ("play" | "p", 1) => ParseResult::Command(PlayCommand::Play),
        ("bluff" | "b", 1) => ParseResult::Command(PlayCommand::Bluff),
        ("pass", 1) => ParseResult::Command(PlayCommand::Pass),
        ("new", 1) => ParseResult::Command(PlayCommand::New),
        ("t" | "toggle", 2) => parse_position(parts[1]),
        ("t" | "toggle", _) => {
            ParseResult::Invalid("Toggle requires a position (e.g., 't 2')".to_string())
        }
        (pos, 1) if pos.chars().all(|c| c.is_ascii_digit()) => parse_position(pos),
        _ => ParseResult::Invalid(format!(
            "Unrecognized command '{}'. Valid commands: 1-{}, t <n>, play, bluff, pass, new, q",
            input, HAND_SIZE
        )),
    }
}

fn parse_position(raw: &str) -> ParseResult {
    match raw.parse::<usize>() {
        Ok(n) if (1..=HAND_SIZE).contains(&n) => ParseResult::Command(PlayCommand::Toggle(n)),
        Ok(_) => ParseResult::Invalid(format!("Card position must be 1-{}", HAND_SIZE)),
        Err(_) => ParseResult::Invalid(format!("Invalid card position '{}'", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(input: &str) -> Option<PlayCommand> {
        match parse_play_input(input) {
            ParseResult::Command(cmd) => Some(cmd),
            _ => None,
        }
    }

    fn is_invalid(input: &str) -> bool {
        matches!(parse_play_input(input), ParseResult::Invalid(_))
    }

    #[test]
    fn accepts_every_command_word() {
        assert_eq!(command("play"), Some(PlayCommand::Play));
        assert_eq!(command("P"), Some(PlayCommand::Play));
        assert_eq!(command("b"), Some(PlayCommand::Bluff));
        assert_eq!(command("pass"), Some(PlayCommand::Pass));
        assert_eq!(command(" NEW "), Some(PlayCommand::New));
        assert_eq!(parse_play_input("quit"), ParseResult::Quit);
    }

    #[test]
    fn positions_are_bounded_by_hand_size() {
        assert_eq!(command("1"), Some(PlayCommand::Toggle(1)));
        assert_eq!(command("toggle 5"), Some(PlayCommand::Toggle(5)));
        assert!(is_invalid("0"));
        assert!(is_invalid("t 9"));
        assert!(is_invalid("t x"));
        assert!(is_invalid("t"));
    }

    #[test]
    fn rejects_empty_and_unknown_input() {
        let empty = ParseResult::Invalid("Empty input".to_string());
        assert_eq!(parse_play_input("   "), empty);
        match parse_play_input("fold") {
            ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
            other => panic!("expected Invalid, got {:?}", other),
        }
        assert!(is_invalid("play now"));
    }
}
