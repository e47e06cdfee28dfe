//! Move records and move errors.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A successful placement: a mark claiming a square.
///
/// The session keeps these in order, so the history can be logged or
/// checked against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Board index (0-8) of the square.
    pub index: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match Position::from_index(self.index) {
            Some(pos) => write!(f, "{} -> {}", self.mark, pos.label()),
            None => write!(f, "{} -> #{}", self.mark, self.index),
        }
    }
}

/// Error returned when a submitted move cannot be applied.
///
/// Both variants leave the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The targeted square already holds a mark.
    #[display("Board index {} is already occupied", _0)]
    OccupiedCell(usize),

    /// The index is outside 0-8.
    #[display("Index {} is outside the board (0-8)", _0)]
    InvalidIndex(usize),
}

impl std::error::Error for MoveError {}
