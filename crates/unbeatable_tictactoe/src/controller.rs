//! Turn state machine.
//!
//! `play_round` is the only way a mark reaches the board. Computer moves
//! take the same path through [`GameController::play_computer_turn`].

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, SessionInvariants};
use super::observer::{GameObserver, TIE_MESSAGE, win_message};
use super::rules::is_winning_for;
use super::session::{GameSession, GameStatus, Seat};
use super::types::BOARD_SIZE;
use super::{Player, PlayerKind};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who moves first in a new or restarted game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FirstPlayer {
    /// The first player passed to `start` always opens.
    #[default]
    Player1,
    /// A coin flip picks the opener on every start and restart.
    Random,
}

impl FirstPlayer {
    /// Resolves the policy to a seat.
    #[instrument]
    pub fn pick(self) -> Seat {
        match self {
            FirstPlayer::Player1 => Seat::Player1,
            FirstPlayer::Random => {
                if rand::thread_rng().gen_bool(0.5) {
                    Seat::Player1
                } else {
                    Seat::Player2
                }
            }
        }
    }
}

/// What a call to [`GameController::play_round`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The move was applied and the turn passed to `next`.
    Continue {
        /// Seat now to move.
        next: Seat,
    },
    /// The move completed a line.
    Won(Player),
    /// The move filled the board with no line.
    Tied,
    /// The game was already over; nothing happened.
    Ignored,
}

/// Owns one game session and drives it turn by turn.
pub struct GameController {
    session: GameSession,
    first_player: FirstPlayer,
    observer: Box<dyn GameObserver>,
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("session", &self.session)
            .field("first_player", &self.first_player)
            .finish_non_exhaustive()
    }
}

impl GameController {
    /// Starts a new game.
    ///
    /// # Panics
    ///
    /// Panics if both players use the same mark.
    #[instrument(skip_all, fields(player1 = %player1, player2 = %player2, ?first_player))]
    pub fn start(
        player1: Player,
        player2: Player,
        first_player: FirstPlayer,
        observer: Box<dyn GameObserver>,
    ) -> Self {
        assert_ne!(
            player1.mark(),
            player2.mark(),
            "players must use different marks"
        );

        let session = GameSession::new(player1, player2, first_player.pick());
        info!(first = %session.active_player(), "Game started");

        let mut controller = Self {
            session,
            first_player,
            observer,
        };
        controller.announce_active_player();
        controller
    }

    /// Resets to a fresh game with the same two players.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.session.reset(self.first_player.pick());
        info!(first = %self.session.active_player(), "Game restarted");
        self.announce_active_player();
    }

    /// Plays the active player's mark at `index`.
    ///
    /// A finished game ignores the call. A rejected move changes nothing
    /// and fires no notification.
    #[instrument(skip(self), fields(round = self.session.round))]
    pub fn play_round(&mut self, index: usize) -> Result<RoundOutcome, MoveError> {
        if self.session.status.is_terminal() {
            debug!("Game already over, ignoring move");
            return Ok(RoundOutcome::Ignored);
        }

        if index >= BOARD_SIZE {
            warn!(index, "Move outside the board");
            return Err(MoveError::InvalidIndex(index));
        }

        let mark = self.session.active_player().mark();
        if !self.session.board.place(index, mark) {
            warn!(index, %mark, "Square already occupied");
            return Err(MoveError::OccupiedCell(index));
        }

        self.session.history.push(Move::new(mark, index));
        debug!(index, %mark, "Mark placed");
        self.observer.on_mark_placed(index, mark);

        let outcome = if is_winning_for(&self.session.board, mark) {
            let winner = self.session.active_player().clone();
            info!(winner = %winner, round = self.session.round, "Game won");
            self.session.status = GameStatus::Won(winner.clone());
            self.observer.on_game_result(&win_message(winner.name()));
            RoundOutcome::Won(winner)
        } else if usize::from(self.session.round) == BOARD_SIZE {
            info!("Game tied");
            self.session.status = GameStatus::Tied;
            self.observer.on_game_result(TIE_MESSAGE);
            RoundOutcome::Tied
        } else {
            self.session.round += 1;
            self.session.active = self.session.active.other();
            self.announce_active_player();
            RoundOutcome::Continue {
                next: self.session.active,
            }
        };

        debug_assert!(
            SessionInvariants::check_all(&self.session).is_ok(),
            "session invariants violated: {:?}",
            SessionInvariants::check_all(&self.session)
        );

        Ok(outcome)
    }

    /// Returns true if the game is in progress and a computer holds the turn.
    pub fn computer_to_move(&self) -> bool {
        !self.session.status.is_terminal()
            && self.session.active_player().kind() == PlayerKind::Computer
    }

    /// Lets a computer player take its turn.
    ///
    /// Returns `None` when the game is over or a human is to move. The
    /// chosen index goes through [`Self::play_round`] like any other move.
    #[instrument(skip(self))]
    pub fn play_computer_turn(&mut self) -> Option<Result<RoundOutcome, MoveError>> {
        if !self.computer_to_move() {
            return None;
        }

        let index = self
            .session
            .active_player()
            .decide_move(&self.session.board)?;
        Some(self.play_round(index))
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the first-player policy.
    pub fn first_player(&self) -> FirstPlayer {
        self.first_player
    }

    fn announce_active_player(&mut self) {
        let name = self.session.active_player().name().to_string();
        debug!(player = %name, "Active player changed");
        self.observer.on_active_player_changed(&name);
    }
}
