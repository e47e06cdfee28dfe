//! Outbound notifications for renderers.

use super::Mark;
use tokio::sync::mpsc;
use tracing::warn;

/// Message announced when the board fills with no winner.
pub const TIE_MESSAGE: &str = "It's a tie";

/// Builds the message announced for a winner.
pub fn win_message(name: &str) -> String {
    format!("{name} wins")
}

/// Receives game notifications. Every method defaults to doing nothing.
pub trait GameObserver: Send {
    /// A mark was placed at `index`.
    fn on_mark_placed(&mut self, _index: usize, _mark: Mark) {}

    /// The turn passed to the player called `name`.
    fn on_active_player_changed(&mut self, _name: &str) {}

    /// The game ended; `message` is `"<name> wins"` or `"It's a tie"`.
    fn on_game_result(&mut self, _message: &str) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// Notification forwarded by [`ChannelObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed.
    MarkPlaced {
        /// Board index (0-8).
        index: usize,
        /// Mark placed.
        mark: Mark,
    },
    /// The turn changed hands.
    ActivePlayerChanged {
        /// Name of the player now to move.
        name: String,
    },
    /// The game ended.
    GameResult {
        /// Result message.
        message: String,
    },
}

/// Forwards notifications as [`GameEvent`]s over an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl ChannelObserver {
    /// Creates an observer and the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        (Self { event_tx }, event_rx)
    }

    fn send(&self, event: GameEvent) {
        if self.event_tx.send(event).is_err() {
            warn!("Event receiver dropped");
        }
    }
}

impl GameObserver for ChannelObserver {
    fn on_mark_placed(&mut self, index: usize, mark: Mark) {
        self.send(GameEvent::MarkPlaced { index, mark });
    }

    fn on_active_player_changed(&mut self, name: &str) {
        self.send(GameEvent::ActivePlayerChanged {
            name: name.to_string(),
        });
    }

    fn on_game_result(&mut self, message: &str) {
        self.send(GameEvent::GameResult {
            message: message.to_string(),
        });
    }
}
