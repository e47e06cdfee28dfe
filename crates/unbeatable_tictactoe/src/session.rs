//! Per-game state.
//!
//! A `GameSession` is a plain value: one per game, owned by whoever
//! drives it. There is no process-wide board.

use super::action::Move;
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which seat holds the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The first player passed to `start`.
    Player1,
    /// The second player passed to `start`.
    Player2,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::Player1 => Seat::Player2,
            Seat::Player2 => Seat::Player1,
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// The board filled up with no line.
    Tied,
}

impl GameStatus {
    /// Returns true once the game is won or tied.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if there is one.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Tied => None,
        }
    }
}

/// Complete state of one game.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) player1: Player,
    pub(crate) player2: Player,
    pub(crate) active: Seat,
    pub(crate) round: u8,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameSession {
    /// Creates a fresh session with `first` to move.
    #[instrument(skip(player1, player2), fields(player1 = %player1, player2 = %player2))]
    pub fn new(player1: Player, player2: Player, first: Seat) -> Self {
        Self {
            board: Board::new(),
            player1,
            player2,
            active: first,
            round: 1,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Clears the board and history, keeping both players.
    pub(crate) fn reset(&mut self, first: Seat) {
        self.board.clear();
        self.active = first;
        self.round = 1;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player seated at `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::Player1 => &self.player1,
            Seat::Player2 => &self.player2,
        }
    }

    /// Returns the seat that holds the turn.
    pub fn active_seat(&self) -> Seat {
        self.active
    }

    /// Returns the player whose turn it is.
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    /// Returns the current round (1-9).
    pub fn round(&self) -> u8 {
        self.round
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the successful moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}
