//! Winner parity invariant: the winner made the last move.

use super::Invariant;
use crate::{Board, Player};

/// Invariant: a completed line belongs to the side that moved last.
///
/// X wins only with one mark more than O, and O wins only with equal
/// counts. Anything else means play continued after the game ended.
pub struct WinnerParityInvariant;

impl Invariant<Board> for WinnerParityInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        match board.winner() {
            Some(Player::X) => x == o + 1,
            Some(Player::O) => x == o,
            None => true,
        }
    }

    fn description() -> &'static str {
        "The winner made the last move"
    }
}
