//! Unbeatable tic-tac-toe.
//!
//! A two-player tic-tac-toe rules engine with an optional computer
//! opponent that searches the whole game tree.
//!
//! # Architecture
//!
//! - **Board / rules**: nine squares and the eight winning lines
//! - **Engine**: exhaustive, depth-aware minimax
//! - **Player**: human or computer; computers ask the engine
//! - **Controller**: turn state machine over one [`GameSession`]
//! - **Orchestrator**: schedules computer moves after a configurable latency
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{FirstPlayer, GameController, Mark, NullObserver, Player};
//!
//! let mut game = GameController::start(
//!     Player::human("Ada", Mark::X),
//!     Player::computer("Computer", Mark::O),
//!     FirstPlayer::Player1,
//!     Box::new(NullObserver),
//! );
//! game.play_round(4).unwrap();
//! game.play_computer_turn().unwrap().unwrap();
//! assert_eq!(game.session().board().filled_count(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod engine;
mod invariants;
mod observer;
mod orchestrator;
mod player;
mod position;
mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use controller::{FirstPlayer, GameController, RoundOutcome};
pub use engine::{MinimaxEngine, ScoredMove, SearchReport, WIN_SCORE};
pub use invariants::{
    AlternatingMarksInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, RoundTracksBoardInvariant, SessionInvariants,
};
pub use observer::{
    ChannelObserver, GameEvent, GameObserver, NullObserver, TIE_MESSAGE, win_message,
};
pub use orchestrator::Orchestrator;
pub use player::{Identity, Player, PlayerKind};
pub use position::Position;
pub use rules::{Classification, LINES, check_winner, classify, is_full, is_winning_for};
pub use session::{GameSession, GameStatus, Seat};
pub use types::{BOARD_SIZE, Board, Mark, Square};
