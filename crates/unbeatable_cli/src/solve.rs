//! One-shot analysis of a position given on the command line.

use derive_more::Display;
use std::fmt::Write;
use tracing::instrument;
use unbeatable_tictactoe::{
    BOARD_SIZE, Board, Mark, MinimaxEngine, Position, SearchReport, Square,
};

/// A board string that does not describe nine squares.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// Not exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),
    /// A character that is not X, O or an empty marker.
    #[display("Square {} has unknown symbol '{}'", index, found)]
    BadSquare {
        /// Board index (0-8).
        index: usize,
        /// Offending character.
        found: char,
    },
}

impl std::error::Error for BoardParseError {}

/// Parses a board such as `XX.O.....`.
///
/// `X` and `O` (any case) are marks; `.`, `-`, `_` and digits are empty.
/// Whitespace and `|` separators are ignored.
#[instrument]
pub fn parse_board(s: &str) -> Result<Board, BoardParseError> {
    let symbols: Vec<char> = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '|')
        .collect();
    if symbols.len() != BOARD_SIZE {
        return Err(BoardParseError::WrongLength(symbols.len()));
    }

    let mut squares = [Square::Empty; BOARD_SIZE];
    for (index, symbol) in symbols.into_iter().enumerate() {
        squares[index] = match symbol.to_ascii_uppercase() {
            'X' => Square::Occupied(Mark::X),
            'O' => Square::Occupied(Mark::O),
            '.' | '-' | '_' => Square::Empty,
            c if c.is_ascii_digit() => Square::Empty,
            _ => return Err(BoardParseError::BadSquare { index, found: symbol }),
        };
    }
    Ok(Board::from_squares(squares))
}

/// Runs the engine and formats the result for the terminal.
#[instrument(skip(board))]
pub fn solve(board: &Board, to_move: Mark) -> String {
    let mut out = format!("{board}\n\n");
    match MinimaxEngine::new().analyze(board, to_move) {
        None => out.push_str("Position is already decided; no move to make.\n"),
        Some(report) => write_report(&mut out, &report, to_move),
    }
    out
}

fn write_report(out: &mut String, report: &SearchReport, to_move: Mark) {
    let best = report.best();
    let label = Position::from_index(best.index).map_or("?", |pos| pos.label());
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "Best move for {to_move}: {} ({label}), score {}",
        best.index + 1,
        best.score
    );
    for candidate in report.candidates() {
        let _ = writeln!(out, "  square {}: {}", candidate.index + 1, candidate.score);
    }
    let _ = writeln!(out, "Positions searched: {}", report.nodes_visited());
}
