//! Parsing of interactive input lines.

use derive_more::Display;
use tracing::instrument;
use unbeatable_tictactoe::Position;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Play the square at this board index (0-8).
    Move(usize),
    /// Start a fresh game with the same players.
    Restart,
    /// Leave the program.
    Quit,
    /// Show the help text.
    Help,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Blank line.
    #[display("Enter a square (1-9), 'restart', 'help' or 'quit'")]
    Empty,
    /// Neither a command nor a square.
    #[display("Unrecognized input '{}'", _0)]
    Unrecognized(String),
}

impl std::error::Error for InputError {}

/// Help text shown for `help`.
pub const HELP: &str = "\
Squares are numbered 1-9 from the top left:
  1 | 2 | 3
  4 | 5 | 6
  7 | 8 | 9
Enter a number or a name such as 'center' or 'top left'.
Commands: restart, help, quit";

/// Parses a line typed by the player.
#[instrument]
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => Err(InputError::Empty),
        "q" | "quit" | "exit" => Ok(Input::Quit),
        "r" | "restart" => Ok(Input::Restart),
        "h" | "help" | "?" => Ok(Input::Help),
        _ => Position::from_label_or_number(trimmed)
            .map(|pos| Input::Move(pos.to_index()))
            .ok_or_else(|| InputError::Unrecognized(trimmed.to_string())),
    }
}
