//! Command-line interface for unbeatable.

use clap::{Args, Parser, Subcommand};
use unbeatable_tictactoe::{FirstPlayer, Mark, PlayerKind};

/// Unbeatable - tic-tac-toe against a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "unbeatable")]
#[command(about = "Tic-tac-toe with an unbeatable computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play(PlayArgs),

    /// Print the engine's move for a position
    Solve {
        /// Nine squares in row-major order: X, O, and `.` for empty
        board: String,

        /// Mark to move
        #[arg(short, long, default_value = "O", value_parser = parse_mark)]
        mark: Mark,
    },
}

/// Options for an interactive game.
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Path to the game config file
    #[arg(short, long, default_value = "unbeatable.toml")]
    pub config: std::path::PathBuf,

    /// Name of the first player (X)
    #[arg(long)]
    pub player1: Option<String>,

    /// Name of the second player (O)
    #[arg(long)]
    pub player2: Option<String>,

    /// Second player kind: human or computer
    #[arg(long)]
    pub opponent: Option<PlayerKind>,

    /// Who opens: player1 or random
    #[arg(long)]
    pub first: Option<FirstPlayer>,

    /// Delay before computer moves, in milliseconds
    #[arg(long)]
    pub latency_ms: Option<u64>,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            config: "unbeatable.toml".into(),
            player1: None,
            player2: None,
            opponent: None,
            first: None,
            latency_ms: None,
        }
    }
}

/// Parses `X` or `O`, case-insensitively.
pub fn parse_mark(s: &str) -> Result<Mark, String> {
    match s.trim().to_ascii_uppercase().as_str() {
        "X" => Ok(Mark::X),
        "O" => Ok(Mark::O),
        other => Err(format!("unknown mark '{other}', expected X or O")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["unbeatable"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_play_flags() {
        let cli = Cli::try_parse_from([
            "unbeatable",
            "play",
            "--opponent",
            "human",
            "--first",
            "random",
            "--latency-ms",
            "0",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Play(args)) => {
                assert_eq!(args.opponent, Some(PlayerKind::Human));
                assert_eq!(args.first, Some(FirstPlayer::Random));
                assert_eq!(args.latency_ms, Some(0));
                assert_eq!(args.config, std::path::PathBuf::from("unbeatable.toml"));
            }
            other => panic!("expected play, got {other:?}"),
        }
    }

    #[test]
    fn test_solve_mark_defaults_to_o() {
        let cli = Cli::try_parse_from(["unbeatable", "solve", "XX.O....."]).unwrap();
        match cli.command {
            Some(Command::Solve { board, mark }) => {
                assert_eq!(board, "XX.O.....");
                assert_eq!(mark, Mark::O);
            }
            other => panic!("expected solve, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_mark() {
        assert_eq!(parse_mark("x"), Ok(Mark::X));
        assert!(parse_mark("z").is_err());
    }
}
