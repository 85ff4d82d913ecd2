//! The 3x3 board.
//!
//! A [`Board`] is a plain array of nine [`Square`]s in row-major order. It
//! does not track whose turn it is: the player to move is derived from the
//! number of free squares, since X always moves first and moves alternate.

use crate::rules;
use crate::{Player, Position, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Number of squares on the board.
pub const SQUARES: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Serializes as its 9-character snapshot (see [`Board::to_snapshot`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; SQUARES],
}

impl Board {
    /// Creates a new empty board.
    pub const fn new() -> Self {
        Self {
            squares: [Square::Empty; SQUARES],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Overwrites the square at the given position.
    ///
    /// No legality check is made: callers playing a real move must only
    /// set free squares. Setting [`Square::Empty`] clears the square.
    pub fn set(&mut self, pos: Position, square: impl Into<Square>) {
        self.squares[pos.to_index()] = square.into();
    }

    /// Clears the square at the given position.
    pub fn unset(&mut self, pos: Position) {
        self.set(pos, Square::Empty);
    }

    /// Checks if a square is empty.
    pub fn is_free(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// True when no square is free.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Free positions in ascending index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&pos| self.is_free(pos))
    }

    /// Number of free squares.
    pub fn count_free(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Number of squares occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// The side whose turn it is.
    ///
    /// X moves when the number of free squares is odd (equivalently, when
    /// the number of occupied squares is even), O otherwise.
    pub fn player_to_move(&self) -> Player {
        if self.count_free() % 2 == 1 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Owner of a completed line, if any. See [`rules::check_winner`] for
    /// the scan order used on boards with more than one completed line.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; SQUARES] {
        &self.squares
    }

    /// Resets every square to empty.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// The 9-character snapshot: `X`, `O` and `_` in row-major order.
    pub fn to_snapshot(&self) -> String {
        self.squares.iter().map(|s| s.symbol()).collect()
    }
}

/// Three rows of space-separated symbols, e.g. `"X O _"`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, squares) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let [a, b, c] = [squares[0], squares[1], squares[2]].map(Square::symbol);
            write!(f, "{a} {b} {c}")?;
        }
        Ok(())
    }
}

/// Error returned when a board snapshot cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The snapshot does not have exactly nine symbols.
    #[display("expected {expected} squares, found {got}")]
    WrongLength {
        /// Required number of symbols.
        expected: usize,
        /// Number of symbols found.
        got: usize,
    },
    /// A symbol outside the `X`, `O`, `_` alphabet.
    #[display("invalid symbol {symbol:?} at index {index} (expected 'X', 'O' or '_')")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Its index in the snapshot.
        index: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    #[instrument(level = "debug")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let got = s.chars().count();
        if got != SQUARES {
            return Err(ParseBoardError::WrongLength {
                expected: SQUARES,
                got,
            });
        }

        let mut board = Board::new();
        for (index, (pos, symbol)) in Position::ALL.into_iter().zip(s.chars()).enumerate() {
            let square =
                Square::from_symbol(symbol).ok_or(ParseBoardError::InvalidSymbol { symbol, index })?;
            board.set(pos, square);
        }
        Ok(board)
    }
}

impl TryFrom<String> for Board {
    type Error = ParseBoardError;

    fn try_from(snapshot: String) -> Result<Self, Self::Error> {
        snapshot.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_snapshot()
    }
}
