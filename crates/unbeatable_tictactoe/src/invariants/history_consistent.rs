//! History consistency invariant: history matches occupied squares.

use super::super::{GameSession, Square};
use super::Invariant;

/// Invariant: every recorded move owns its square, and no square is
/// filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        session.history().len() == board.filled_count()
            && session
                .history()
                .iter()
                .all(|mv| board.get(mv.index) == Some(Square::Occupied(mv.mark)))
    }

    fn description() -> &'static str {
        "History length matches occupied squares and each move owns its square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Move, Player, Seat};

    #[test]
    fn test_move_without_square_violates() {
        let mut session = GameSession::new(
            Player::human("A", Mark::X),
            Player::human("B", Mark::O),
            Seat::Player1,
        );
        session.history.push(Move::new(Mark::X, 4));
        assert!(!HistoryConsistentInvariant::holds(&session));

        session.board.place(4, Mark::X);
        assert!(HistoryConsistentInvariant::holds(&session));
    }
}
