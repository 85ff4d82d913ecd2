//! Single winner invariant: at most one player owns a completed line.

use super::Invariant;
use crate::rules::completed_lines;
use crate::{Board, Player};

/// Invariant: no board has completed lines for both players.
///
/// Play stops at the first completed line, so a second owner can only
/// appear on a hand-made snapshot.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let mut owners = completed_lines(board);
        match owners.next() {
            Some(first) => owners.all(|owner: Player| owner == first),
            None => true,
        }
    }

    fn description() -> &'static str {
        "At most one player has a completed line"
    }
}
