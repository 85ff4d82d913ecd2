//! The eight symmetries of the square board (the dihedral group D4).

use crate::{Board, Position};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A rotation or reflection of the board.
///
/// Iterate all eight with [`strum::IntoEnumIterator`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Symmetry {
    /// Leaves the board unchanged.
    Identity,
    /// Quarter turn clockwise.
    Rotate90,
    /// Half turn.
    Rotate180,
    /// Quarter turn counter-clockwise.
    Rotate270,
    /// Mirror left to right.
    FlipHorizontal,
    /// Mirror top to bottom.
    FlipVertical,
    /// Mirror across the top-left to bottom-right diagonal.
    FlipDiagonal,
    /// Mirror across the top-right to bottom-left diagonal.
    FlipAntiDiagonal,
}

impl Symmetry {
    /// Where `pos` ends up under this symmetry.
    pub fn apply(self, pos: Position) -> Position {
        let (row, col) = (pos.row(), pos.col());
        let (row, col) = match self {
            Symmetry::Identity => (row, col),
            Symmetry::Rotate90 => (col, 2 - row),
            Symmetry::Rotate180 => (2 - row, 2 - col),
            Symmetry::Rotate270 => (2 - col, row),
            Symmetry::FlipHorizontal => (row, 2 - col),
            Symmetry::FlipVertical => (2 - row, col),
            Symmetry::FlipDiagonal => (col, row),
            Symmetry::FlipAntiDiagonal => (2 - col, 2 - row),
        };
        Position::ALL[row * 3 + col]
    }

    /// The symmetry that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Symmetry::Rotate90 => Symmetry::Rotate270,
            Symmetry::Rotate270 => Symmetry::Rotate90,
            other => other,
        }
    }

    /// A copy of `board` with every square moved by this symmetry.
    pub fn transform(self, board: &Board) -> Board {
        let mut transformed = Board::new();
        for pos in Position::ALL {
            transformed.set(self.apply(pos), board.get(pos));
        }
        transformed
    }
}
