//! Game orchestration between two players.

use crate::players::Player;
use crate::stopwatch::Stopwatch;
use anyhow::{Context, Result};
use perfect_tictactoe::{Game, GameStatus, Player as Mark};
use std::io::Write;
use tracing::{debug, info, instrument};

/// Which timings are reported when the game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timings {
    /// One line per player, e.g. "You took 3 s.".
    PerPlayer,
    /// A single line for the whole game, e.g. "Took 40 ms.".
    Total,
    /// No timing lines.
    Hidden,
}

/// Runs a game between two players, writing the transcript to `out`.
pub struct Orchestrator<W> {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    clock_x: Stopwatch,
    clock_o: Stopwatch,
    total: Stopwatch,
    timings: Timings,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>, out: W) -> Self {
        let clock_x = Stopwatch::named(player_x.name());
        let clock_o = Stopwatch::named(player_o.name());
        Self {
            game: Game::new(),
            player_x,
            player_o,
            clock_x,
            clock_o,
            total: Stopwatch::new(),
            timings: Timings::PerPlayer,
            out,
        }
    }

    /// Sets which timings are reported.
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// The game as played so far.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the orchestrator, returning the output stream.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Plays until a player wins or the board is full.
    #[instrument(skip(self), fields(x = self.player_x.name(), o = self.player_o.name()))]
    pub fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game");
        self.total.start();
        writeln!(self.out, "{}\n", self.game.board())?;

        while !self.game.is_over() {
            let mark = self.game.to_move();
            let (player, clock) = match mark {
                Mark::X => (&mut self.player_x, &mut self.clock_x),
                Mark::O => (&mut self.player_o, &mut self.clock_o),
            };

            debug!(player = player.name(), %mark, "Waiting for move");
            clock.start();
            let position = player.choose_move(&self.game, &mut self.out)?;
            clock.pause();

            self.game
                .make_move(position)
                .with_context(|| format!("{} chose an illegal move", player.name()))?;
            writeln!(self.out, "{} played {}.\n", player.name(), position)?;
            writeln!(self.out, "{}\n", self.game.board())?;
        }
        self.total.pause();

        let status = self.game.status();
        self.announce(status)?;
        self.report_timings()?;
        Ok(status)
    }

    fn announce(&mut self, status: GameStatus) -> Result<()> {
        match status {
            GameStatus::Won(mark) => {
                let winner = match mark {
                    Mark::X => self.player_x.name(),
                    Mark::O => self.player_o.name(),
                };
                info!(winner, "Game won");
                writeln!(self.out, "{winner} won as {mark}.")?;
            }
            GameStatus::Draw => writeln!(self.out, "Draw.")?,
            GameStatus::InProgress => {}
        }
        Ok(())
    }

    fn report_timings(&mut self) -> Result<()> {
        match self.timings {
            Timings::PerPlayer => {
                writeln!(self.out, "{}", self.clock_x.report())?;
                writeln!(self.out, "{}", self.clock_o.report())?;
            }
            Timings::Total => writeln!(self.out, "{}", self.total.report())?,
            Timings::Hidden => {}
        }
        Ok(())
    }
}
