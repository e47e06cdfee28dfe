//! Interactive game loop.

use super::config::GameConfig;
use super::input::{HELP, Input, parse_input};
use super::render::TerminalRenderer;
use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, instrument};
use unbeatable_tictactoe::{GameController, Mark, Orchestrator, Player, Position, RoundOutcome};

/// Builds the orchestrator described by `config`.
///
/// The first player is always a human playing X; the second plays O and
/// is a human or the computer.
#[instrument(skip(config, renderer))]
pub fn build_game(config: &GameConfig, renderer: TerminalRenderer) -> Orchestrator {
    let player1 = Player::human(config.player1_name().clone(), Mark::X);
    let player2 = Player::with_kind(*config.opponent(), config.player2_name().clone(), Mark::O);
    let controller =
        GameController::start(player1, player2, *config.first_player(), Box::new(renderer));
    Orchestrator::new(controller, config.move_latency())
}

/// Runs a game reading commands from `input` and drawing to `out`.
///
/// Returns when the player quits or the input ends.
#[instrument(skip_all)]
pub async fn play<R, W>(game: &mut Orchestrator, input: R, mut out: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    info!("Starting interactive game");
    writeln!(out, "{HELP}\n")?;
    game.run_computer_turns().await?;
    show(game, &mut out)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        debug!(line = %line, "Input received");
        match parse_input(&line) {
            Ok(Input::Move(index)) => match game.submit(index).await {
                Ok(RoundOutcome::Ignored) => {
                    writeln!(out, "The game is over. Type 'restart' or 'quit'.")?;
                    continue;
                }
                Ok(_) => {}
                Err(e) => {
                    writeln!(out, "{e}")?;
                    continue;
                }
            },
            Ok(Input::Restart) => {
                game.restart().await?;
            }
            Ok(Input::Quit) => break,
            Ok(Input::Help) => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        }
        show(game, &mut out)?;
    }

    info!("Leaving game");
    Ok(())
}

fn show<W: Write>(game: &Orchestrator, out: &mut W) -> Result<()> {
    let session = game.controller().session();
    writeln!(out, "\n{}\n", session.board())?;
    if session.status().is_terminal() {
        writeln!(out, "Game over. Type 'restart' or 'quit'.")?;
    } else {
        let player = session.active_player();
        writeln!(out, "Round {}: {player}, choose a square.", session.round())?;
        let open: Vec<&str> = Position::valid_moves(session.board())
            .into_iter()
            .map(|pos| pos.label())
            .collect();
        writeln!(out, "Open squares: {}", open.join(", "))?;
    }
    out.flush()?;
    Ok(())
}
