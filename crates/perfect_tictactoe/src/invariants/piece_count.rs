//! Piece count invariant: X has as many marks as O, or one more.

use super::Invariant;
use crate::{Board, Player};

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X always moves first and players alternate, so any other difference
/// means the board was not reached by play.
pub struct PieceCountInvariant;

impl Invariant<Board> for PieceCountInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holds(snapshot: &str) -> bool {
        PieceCountInvariant::holds(&snapshot.parse().unwrap())
    }

    #[test]
    fn test_balanced_boards_hold() {
        assert!(holds("_________"));
        assert!(holds("X________"));
        assert!(holds("XO_______"));
        assert!(holds("XOXOXXOXO"));
    }

    #[test]
    fn test_unbalanced_boards_violate() {
        assert!(!holds("O________"));
        assert!(!holds("XX_______"));
        assert!(!holds("XXXO_____"));
    }
}
