//! Command implementations, generic over their I/O streams.

use crate::analyze::analyze;
use crate::config::{FirstPlayer, GameConfig};
use crate::orchestrator::{Orchestrator, Timings};
use crate::players::{ComputerPlayer, HumanPlayer, Player};
use anyhow::{Context, Result};
use perfect_tictactoe::GameStatus;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Human against the computer. Returns the final status.
#[instrument(skip_all, fields(first_player = config.first_player().label()))]
pub fn play<R, W>(config: &GameConfig, input: R, out: W) -> Result<GameStatus>
where
    R: BufRead + 'static,
    W: Write,
{
    let human: Box<dyn Player> = Box::new(HumanPlayer::new("You", input));
    let computer: Box<dyn Player> = Box::new(ComputerPlayer::new("The computer"));
    let (player_x, player_o) = match config.first_player() {
        FirstPlayer::Human => (human, computer),
        FirstPlayer::Computer => (computer, human),
    };

    let timings = if *config.show_timings() {
        Timings::PerPlayer
    } else {
        Timings::Hidden
    };
    let status = Orchestrator::new(player_x, player_o, out)
        .with_timings(timings)
        .run()?;
    info!(?status, "Game over");
    Ok(status)
}

/// Computer against itself from the empty board.
#[instrument(skip_all)]
pub fn watch<W: Write>(config: &GameConfig, out: W) -> Result<GameStatus> {
    let timings = if *config.show_timings() {
        Timings::Total
    } else {
        Timings::Hidden
    };
    Orchestrator::new(
        Box::new(ComputerPlayer::new("X")),
        Box::new(ComputerPlayer::new("O")),
        out,
    )
    .with_timings(timings)
    .run()
}

/// Prints the analysis of `snapshot` as text or JSON.
#[instrument(skip(out))]
pub fn analyze_board<W: Write>(snapshot: &str, json: bool, mut out: W) -> Result<()> {
    let analysis = analyze(snapshot)?;
    if json {
        serde_json::to_writer_pretty(&mut out, &analysis).context("Failed to encode analysis")?;
        writeln!(out)?;
    } else {
        write!(out, "{analysis}")?;
    }
    Ok(())
}
