//! Tic-tac-toe with a perfect computer player.
//!
//! The crate provides a compact 3x3 [`Board`] and an exhaustive minimax
//! search over it. The search never loses: from any position it finds the
//! fastest win available, or failing that the slowest loss or a draw.
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{Board, Position, best_move};
//!
//! let mut board: Board = "XX_OO____".parse().unwrap();
//! assert_eq!(best_move(&mut board), Some(Position::TopRight));
//! ```
//!
//! [`Game`] wraps a board with a move history for interactive play, and
//! [`Symmetry`] exposes the eight rotations and reflections of the board.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod evaluator;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod symmetry;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, ParseBoardError, SQUARES};
pub use evaluator::{
    MoveScore, Score, WIN_SCORE, best_move, decay, is_immediately_winnable, rank_moves, score,
};
pub use game::{Game, GameStatus};
pub use invariants::{Invariant, InvariantSet, InvariantViolation};
pub use position::Position;
pub use symmetry::Symmetry;
pub use types::{Player, Square};
