//! Full-board detection for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (no empty squares remain).
///
/// A full board with no winner is a tie.
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.empty_indices().is_empty()
}
