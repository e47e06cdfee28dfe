//! Session invariants.
//!
//! Logical properties that must hold after every successful move. The
//! controller checks them in debug builds, and each one can be tested on
//! its own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together. Implemented for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<InvariantViolation> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_marks;
pub mod history_consistent;
pub mod round_tracks_board;

pub use alternating_marks::AlternatingMarksInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use round_tracks_board::RoundTracksBoardInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    RoundTracksBoardInvariant,
    HistoryConsistentInvariant,
    AlternatingMarksInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameSession, Mark, Move, Player, Seat, Square};

    fn session() -> GameSession {
        GameSession::new(
            Player::human("Ada", Mark::X),
            Player::computer("Computer", Mark::O),
            Seat::Player1,
        )
    }

    #[test]
    fn test_fresh_session_holds() {
        assert!(SessionInvariants::check_all(&session()).is_ok());
    }

    #[test]
    fn test_corruption_reports_every_violation() {
        let mut game = session();
        // Board changed behind the session's back.
        game.board = crate::Board::from_squares([Square::Occupied(Mark::O); 9]);
        game.history.push(Move::new(Mark::X, 0));

        let violations = SessionInvariants::check_all(&game).unwrap_err();
        assert!(violations.len() >= 2);
        assert!(violations
            .iter()
            .any(|v| v.description == RoundTracksBoardInvariant::description()));
    }
}
