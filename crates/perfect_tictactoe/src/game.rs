//! A game in progress: the board plus its move history.

use crate::invariants;
use crate::{Board, Move, MoveError, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Outcome of the game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves remain and nobody has won.
    InProgress,
    /// The player completed a line.
    Won(Player),
    /// The board is full without a completed line.
    Draw,
}

impl GameStatus {
    /// Status of an arbitrary board.
    pub fn of(board: &Board) -> Self {
        match board.winner() {
            Some(winner) => GameStatus::Won(winner),
            None if board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }
}

/// A tic-tac-toe game played from the empty board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
}

impl Game {
    /// Starts a game on the empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access for in-place search.
    ///
    /// Searches restore every square they touch, so the board is unchanged
    /// once the borrow ends.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The side whose turn it is.
    pub fn to_move(&self) -> Player {
        self.board.player_to_move()
    }

    /// Current outcome.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.board)
    }

    /// True once a player has won or the board is full.
    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    /// Places the mark of the player to move at `position`.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn make_move(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_free(position) {
            return Err(MoveError::SquareOccupied { position });
        }

        let mv = Move::new(self.to_move(), position);
        self.board.set(position, mv.player);
        self.history.push(mv);
        debug!(%mv, "Move applied");

        debug_assert!(
            invariants::check_board(&self.board).is_ok(),
            "board invariants violated after {mv}"
        );
        debug_assert_eq!(self.history.len() + self.board.count_free(), crate::SQUARES);

        let status = self.status();
        if status != GameStatus::InProgress {
            info!(?status, moves = self.history.len(), "Game finished");
        }
        Ok(status)
    }

    /// Clears the board and history.
    pub fn reset(&mut self) {
        self.board.clear();
        self.history.clear();
    }
}
