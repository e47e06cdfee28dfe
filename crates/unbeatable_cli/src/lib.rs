//! Terminal front end for unbeatable tic-tac-toe.
//!
//! Wires the core game to standard input and output: configuration,
//! command-line parsing, rendering, and the interactive loop.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod play;
mod render;
mod solve;

pub use cli::{Cli, Command, PlayArgs, parse_mark};
pub use config::{ConfigError, GameConfig};
pub use input::{HELP, Input, InputError, parse_input};
pub use play::{build_game, play};
pub use render::TerminalRenderer;
pub use solve::{BoardParseError, parse_board, solve};
