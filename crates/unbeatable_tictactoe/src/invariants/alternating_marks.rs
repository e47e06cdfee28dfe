//! Alternating marks invariant: no mark moves twice in a row.

use super::super::GameSession;
use super::Invariant;

/// Invariant: consecutive moves use different marks, and while the game
/// is in progress the player to move is not the one who just moved.
pub struct AlternatingMarksInvariant;

impl Invariant<GameSession> for AlternatingMarksInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();
        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        match history.last() {
            Some(last) if !session.status().is_terminal() => {
                session.active_player().mark() != last.mark
            }
            _ => true,
        }
    }

    fn description() -> &'static str {
        "Marks alternate and the last mover is not to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Move, Player, Seat};

    #[test]
    fn test_same_mark_twice_violates() {
        let mut session = GameSession::new(
            Player::human("A", Mark::X),
            Player::human("B", Mark::O),
            Seat::Player2,
        );
        session.history.push(Move::new(Mark::X, 0));
        assert!(AlternatingMarksInvariant::holds(&session));

        session.history.push(Move::new(Mark::X, 1));
        assert!(!AlternatingMarksInvariant::holds(&session));
    }
}
