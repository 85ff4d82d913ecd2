//! Exhaustive minimax search.
//!
//! Scores use a fixed-point scale: an immediate win is worth [`WIN_SCORE`]
//! and every ply of delay multiplies the value by 7/8 (see [`decay`]), so
//! faster wins and slower losses are preferred. A position's score is
//! always in `0..=WIN_SCORE` and is measured from the point of view of the
//! player to move; `0` is a draw.
//!
//! The search mutates the caller's board in place. Each hypothetical move
//! is held by a [`Placement`] guard that clears the square again when it is
//! dropped, so every function here leaves the board exactly as it found it.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::{Level, debug, instrument};

/// Desirability of a position for the player to move.
pub type Score = u32;

/// Value of winning with the next move.
pub const WIN_SCORE: Score = 512;

/// Applies one ply of discount.
pub const fn decay(score: Score) -> Score {
    7 * score / 8
}

/// Highest score reachable without an immediate win.
const CEILING: Score = decay(WIN_SCORE);

/// A move together with its desirability for the player making it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    /// The candidate move.
    pub position: Position,
    /// `WIN_SCORE` minus the opponent's score after the move.
    pub score: Score,
}

/// A temporary mark on a borrowed board, removed on drop.
struct Placement<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut Board, position: Position, player: Player) -> Self {
        debug_assert!(board.is_free(position), "placement on occupied {position}");
        board.set(position, Square::Occupied(player));
        Self { board, position }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.unset(self.position);
    }
}

/// True if the player to move can complete a line right now.
pub fn is_immediately_winnable(board: &mut Board) -> bool {
    let mover = board.player_to_move();
    for pos in Position::ALL {
        if !board.is_free(pos) {
            continue;
        }
        let placed = Placement::new(board, pos, mover);
        if placed.winner() == Some(mover) {
            return true;
        }
    }
    false
}

/// Minimax value of the position for the player to move.
///
/// Expects a position without a winner. A full board scores `0`.
pub fn score(board: &mut Board) -> Score {
    debug_assert!(board.winner().is_none(), "score on finished board");
    if is_immediately_winnable(board) {
        return WIN_SCORE;
    }

    let mover = board.player_to_move();
    let mut best = 0;
    for pos in Position::ALL {
        if !board.is_free(pos) {
            continue;
        }
        let mut placed = Placement::new(board, pos, mover);
        best = best.max(decay(WIN_SCORE - score(&mut placed)));
        if best == CEILING {
            break;
        }
    }
    best
}

/// Chooses the optimal move for the player to move.
///
/// A move that wins on the spot is returned immediately. Otherwise the
/// move with the highest desirability wins; among equal candidates the
/// one with the highest index is chosen. The board is left unchanged and
/// the caller applies the move. Returns `None` when the board is full.
/// The board must not have a winner yet.
#[instrument(level = "debug", skip(board), fields(board = %board.to_snapshot()))]
pub fn best_move(board: &mut Board) -> Option<Position> {
    debug_assert!(board.winner().is_none(), "best_move on finished board");
    let mover = board.player_to_move();
    let mut best: Option<MoveScore> = None;

    for pos in Position::ALL {
        if !board.is_free(pos) {
            continue;
        }
        let mut placed = Placement::new(board, pos, mover);
        if placed.winner() == Some(mover) {
            debug!(position = %pos, "Winning move found");
            return Some(pos);
        }
        let candidate = MoveScore {
            position: pos,
            score: WIN_SCORE - score(&mut placed),
        };
        if best.is_none_or(|b| candidate.score >= b.score) {
            best = Some(candidate);
        }
    }

    if tracing::enabled!(Level::DEBUG) {
        debug!(
            winnable = is_immediately_winnable(board),
            evaluation = best.map(|b| b.score),
            "Search finished"
        );
    }
    best.map(|b| b.position)
}

/// Desirability of every free square, in ascending index order.
///
/// Winning moves score [`WIN_SCORE`]. Unlike [`best_move`] this never
/// short-circuits, so it costs a full search of each candidate.
#[instrument(level = "debug", skip(board), fields(board = %board.to_snapshot()))]
pub fn rank_moves(board: &mut Board) -> Vec<MoveScore> {
    debug_assert!(board.winner().is_none(), "rank_moves on finished board");
    let mover = board.player_to_move();
    let mut ranked = Vec::with_capacity(board.count_free());

    for pos in Position::ALL {
        if !board.is_free(pos) {
            continue;
        }
        let mut placed = Placement::new(board, pos, mover);
        let value = if placed.winner() == Some(mover) {
            WIN_SCORE
        } else {
            WIN_SCORE - score(&mut placed)
        };
        ranked.push(MoveScore {
            position: pos,
            score: value,
        });
    }
    ranked
}
