//! Perfect-play computer opponent.

use super::Player;
use anyhow::{Context, Result};
use perfect_tictactoe::{Game, Position, best_move};
use std::io::Write;
use tracing::debug;

/// Plays the minimax-optimal move.
pub struct ComputerPlayer {
    name: String,
}

impl ComputerPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for ComputerPlayer {
    fn choose_move(&mut self, game: &Game, _out: &mut dyn Write) -> Result<Position> {
        let mut board = *game.board();
        let position = best_move(&mut board).context("No free square left")?;
        debug!(player = %self.name, %position, "Computer chose move");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
