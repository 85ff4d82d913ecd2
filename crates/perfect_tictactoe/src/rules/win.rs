//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position};

/// The 8 winning lines, scanned in this order: rows, then columns, then
/// diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Owners of every completed line, in [`LINES`] order.
pub fn completed_lines(board: &Board) -> impl Iterator<Item = Player> + '_ {
    LINES.iter().filter_map(|&[a, b, c]| {
        let owner = board.get(a).player()?;
        (board.get(b).player() == Some(owner) && board.get(c).player() == Some(owner))
            .then_some(owner)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first completed line in [`LINES`] order.
/// Boards reached by alternating play have at most one winner; for
/// arbitrary snapshots with lines for both players the first match wins,
/// which is an implementation-defined tie-break.
pub fn check_winner(board: &Board) -> Option<Player> {
    completed_lines(board).next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX_O_O__".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "XO_XO__OX".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O_X_OX__O".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "OOX_X_X__".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX_OO____".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_completed_line_wins() {
        // Not reachable by play: X owns the first column, O the other two.
        let both: Board = "XOOXOOXOO".parse().unwrap();
        assert_eq!(
            completed_lines(&both).collect::<Vec<_>>(),
            [Player::X, Player::O, Player::O]
        );
        assert_eq!(check_winner(&both), Some(Player::X));
    }
}
