//! Scheduling of computer moves.
//!
//! The controller never plays for the computer by itself. The
//! orchestrator waits `move_latency` after each turn change so a renderer
//! can draw the previous move, then feeds the computer's choice back
//! through `play_round`.

use super::action::MoveError;
use super::controller::{GameController, RoundOutcome};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, instrument};

/// Drives a [`GameController`], answering for computer players.
#[derive(Debug)]
pub struct Orchestrator {
    controller: GameController,
    move_latency: Duration,
}

impl Orchestrator {
    /// Wraps a controller. Zero latency plays computer moves immediately.
    pub fn new(controller: GameController, move_latency: Duration) -> Self {
        Self {
            controller,
            move_latency,
        }
    }

    /// Plays computer turns until the game ends or a human is to move.
    ///
    /// Call once after construction in case the computer opens.
    #[instrument(skip(self))]
    pub async fn run_computer_turns(&mut self) -> Result<Option<RoundOutcome>, MoveError> {
        let mut last = None;
        while self.controller.computer_to_move() {
            debug!(latency = ?self.move_latency, "Scheduling computer move");
            if !self.move_latency.is_zero() {
                sleep(self.move_latency).await;
            }
            match self.controller.play_computer_turn() {
                Some(outcome) => last = Some(outcome?),
                None => break,
            }
        }
        Ok(last)
    }

    /// Submits an externally chosen move, then lets any computer reply.
    ///
    /// Pending computer turns are played first, so `index` always lands
    /// with a human's mark. Returns the outcome of the last move applied.
    /// A rejected move is returned as an error and no computer move
    /// follows it.
    #[instrument(skip(self))]
    pub async fn submit(&mut self, index: usize) -> Result<RoundOutcome, MoveError> {
        self.run_computer_turns().await?;
        let outcome = self.controller.play_round(index)?;
        if !matches!(outcome, RoundOutcome::Continue { .. }) {
            return Ok(outcome);
        }

        Ok(self.run_computer_turns().await?.unwrap_or(outcome))
    }

    /// Restarts the game, letting the computer open if the policy says so.
    #[instrument(skip(self))]
    pub async fn restart(&mut self) -> Result<Option<RoundOutcome>, MoveError> {
        info!("Restarting game");
        self.controller.restart();
        self.run_computer_turns().await
    }

    /// Returns the controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Returns the configured latency.
    pub fn move_latency(&self) -> Duration {
        self.move_latency
    }
}
