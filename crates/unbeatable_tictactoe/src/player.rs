//! Players: humans wait for input, computers ask the engine.

use super::engine::MinimaxEngine;
use super::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Kind of player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayerKind {
    /// Moves arrive from external input.
    Human,
    /// Moves come from the minimax engine.
    Computer,
}

/// Name and mark shared by every kind of player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_getters::Getters, derive_new::new)]
pub struct Identity {
    /// Display name used in notifications.
    #[new(into)]
    name: String,
    /// Mark this player places.
    mark: Mark,
}

/// A participant in a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Player {
    /// A human player.
    Human(Identity),
    /// The computer opponent.
    Computer(Identity),
}

impl Player {
    /// Creates a human player.
    pub fn human(name: impl Into<String>, mark: Mark) -> Self {
        Player::Human(Identity::new(name, mark))
    }

    /// Creates a computer player.
    pub fn computer(name: impl Into<String>, mark: Mark) -> Self {
        Player::Computer(Identity::new(name, mark))
    }

    /// Creates a player of the given kind.
    pub fn with_kind(kind: PlayerKind, name: impl Into<String>, mark: Mark) -> Self {
        match kind {
            PlayerKind::Human => Self::human(name, mark),
            PlayerKind::Computer => Self::computer(name, mark),
        }
    }

    /// Returns the shared identity.
    pub fn identity(&self) -> &Identity {
        match self {
            Player::Human(identity) | Player::Computer(identity) => identity,
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        self.identity().name()
    }

    /// Returns the mark.
    pub fn mark(&self) -> Mark {
        *self.identity().mark()
    }

    /// Returns the kind of player.
    pub fn kind(&self) -> PlayerKind {
        match self {
            Player::Human(_) => PlayerKind::Human,
            Player::Computer(_) => PlayerKind::Computer,
        }
    }

    /// Chooses a move for this player.
    ///
    /// Humans never choose on their own and return `None`. Computers
    /// return `None` only when the board has no move left.
    #[instrument(skip(self, board), fields(player = %self.name(), mark = %self.mark()))]
    pub fn decide_move(&self, board: &Board) -> Option<usize> {
        match self {
            Player::Human(_) => None,
            Player::Computer(identity) => {
                let choice = MinimaxEngine::new().best_move(board, *identity.mark())?;
                debug!(index = choice.index, score = choice.score, "Computer chose move");
                Some(choice.index)
            }
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.mark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_never_decides() {
        let player = Player::human("Ada", Mark::X);
        assert_eq!(player.kind(), PlayerKind::Human);
        assert_eq!(player.decide_move(&Board::new()), None);
    }

    #[test]
    fn test_computer_delegates_to_engine() {
        let mut board = Board::new();
        board.place(0, Mark::X);
        board.place(1, Mark::X);
        board.place(3, Mark::O);

        let player = Player::computer("Computer", Mark::O);
        assert_eq!(player.decide_move(&board), Some(2));
    }

    #[test]
    fn test_kind_parses_case_insensitively() {
        assert_eq!("Computer".parse::<PlayerKind>(), Ok(PlayerKind::Computer));
        assert_eq!("human".parse::<PlayerKind>(), Ok(PlayerKind::Human));
        assert!("robot".parse::<PlayerKind>().is_err());
    }

    #[test]
    fn test_identity_accessors() {
        let player = Player::with_kind(PlayerKind::Computer, "Deep Tac", Mark::O);
        assert_eq!(player.name(), "Deep Tac");
        assert_eq!(player.mark(), Mark::O);
        assert_eq!(player.to_string(), "Deep Tac (O)");
    }
}
