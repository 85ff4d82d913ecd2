//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, parse_move};

use anyhow::Result;
use perfect_tictactoe::{Game, Position};
use std::io::Write;

/// Something that can choose moves.
pub trait Player {
    /// Chooses a free position for the side to move.
    ///
    /// Prompts and feedback go to `out`, the same stream that carries the
    /// game transcript.
    fn choose_move(&mut self, game: &Game, out: &mut dyn Write) -> Result<Position>;

    /// Name used in the transcript, e.g. "You" or "The computer".
    fn name(&self) -> &str;
}
