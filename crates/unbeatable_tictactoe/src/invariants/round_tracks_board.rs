//! Round invariant: the round counter follows the number of filled squares.

use super::super::GameSession;
use super::Invariant;

/// Invariant: while the game is in progress, `round` is one more than the
/// number of filled squares; once it ends, `round` equals that number.
pub struct RoundTracksBoardInvariant;

impl Invariant<GameSession> for RoundTracksBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let filled = session.board().filled_count();
        let round = usize::from(session.round());
        if session.status().is_terminal() {
            round == filled
        } else {
            round == filled + 1
        }
    }

    fn description() -> &'static str {
        "Round equals filled squares + 1 while in progress"
    }
}
