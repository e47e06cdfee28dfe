//! Unbeatable - tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use tokio::io::BufReader;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use unbeatable_cli::{
    Cli, Command, GameConfig, PlayArgs, TerminalRenderer, build_game, parse_board, play, solve,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(args) => run_play(args).await,
        Command::Solve { board, mark } => {
            let board = parse_board(&board)?;
            print!("{}", solve(&board, mark));
            Ok(())
        }
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all, fields(config_path = %args.config.display()))]
async fn run_play(args: PlayArgs) -> Result<()> {
    let config = GameConfig::load_or_default(&args.config)?.with_overrides(
        args.player1,
        args.player2,
        args.opponent,
        args.first,
        args.latency_ms,
    );
    info!(?config, "Configuration resolved");

    let mut game = build_game(&config, TerminalRenderer::stdout());
    let input = BufReader::new(tokio::io::stdin());
    play(&mut game, input, std::io::stdout()).await
}

fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
