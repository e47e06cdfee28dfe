//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};
use tracing::instrument;

/// The eight winning index triples: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns true if `mark` occupies all three squares of any line.
#[instrument(level = "trace")]
pub fn is_winning_for(board: &Board, mark: Mark) -> bool {
    let target = Some(Square::Occupied(mark));
    LINES
        .iter()
        .any(|line| line.iter().all(|&index| board.get(index) == target))
}

/// Returns the mark that owns a full line, if any.
///
/// X is checked first. A legal game never has both lines, so the order
/// only matters for hand-built boards; the engine's terminal scoring
/// checks O first and the two need not agree there.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| is_winning_for(board, mark))
}
