//! Terminal renderer for game notifications.

use std::io::Write;
use tracing::warn;
use unbeatable_tictactoe::{GameObserver, Mark, Position};

/// Writes one line per notification.
pub struct TerminalRenderer {
    out: Box<dyn Write + Send>,
}

impl TerminalRenderer {
    /// Renders to standard output.
    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    /// Renders to any writer.
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out }
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            warn!(error = %e, "Failed to write notification");
        }
    }
}

impl GameObserver for TerminalRenderer {
    fn on_mark_placed(&mut self, index: usize, mark: Mark) {
        let square = Position::from_index(index).map_or("?", |pos| pos.label());
        self.line(&format!("{mark} takes {square}"));
    }

    fn on_active_player_changed(&mut self, name: &str) {
        self.line(&format!("{name} to move"));
    }

    fn on_game_result(&mut self, message: &str) {
        self.line(&format!("*** {message} ***"));
    }
}
