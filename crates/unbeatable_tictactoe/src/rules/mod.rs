//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. They never mutate it, so the
//! controller and the engine can share them freely.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, is_winning_for};

use super::{Board, Mark};
use tracing::instrument;

/// Terminal classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// A mark owns a full line.
    Won(Mark),
    /// Board is full and nobody owns a line.
    Tie,
    /// Moves remain and nobody has won yet.
    InProgress,
}

impl Classification {
    /// Returns true for `Won` and `Tie`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Classification::InProgress)
    }
}

/// Classifies a board. A win outranks a full board.
#[instrument(level = "trace")]
pub fn classify(board: &Board) -> Classification {
    if let Some(mark) = check_winner(board) {
        Classification::Won(mark)
    } else if is_full(board) {
        Classification::Tie
    } else {
        Classification::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: [Option<Mark>; 9]) -> Board {
        let mut board = Board::new();
        for (index, mark) in marks.into_iter().enumerate() {
            if let Some(mark) = mark {
                board.place(index, mark);
            }
        }
        board
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(classify(&Board::new()), Classification::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        use Mark::{O, X};
        // X O X / X O O / O X X
        #[rustfmt::skip]
        let board = board_from([
            Some(X), Some(O), Some(X),
            Some(X), Some(O), Some(O),
            Some(O), Some(X), Some(X),
        ]);
        assert_eq!(classify(&board), Classification::Tie);
        assert!(classify(&board).is_terminal());
    }

    #[test]
    fn test_win_on_full_board_outranks_tie() {
        use Mark::{O, X};
        // X X X / O O X / X O O
        #[rustfmt::skip]
        let board = board_from([
            Some(X), Some(X), Some(X),
            Some(O), Some(O), Some(X),
            Some(X), Some(O), Some(O),
        ]);
        assert_eq!(classify(&board), Classification::Won(X));
    }
}
