//! Position analysis for the `analyze` command.

use derive_more::{Display, Error};
use perfect_tictactoe::invariants::{InvariantViolation, check_board};
use perfect_tictactoe::{
    Board, MoveScore, ParseBoardError, Player, Position, Score, best_move,
    is_immediately_winnable, rank_moves, score,
};
use serde::Serialize;
use std::fmt;
use tracing::instrument;

/// Why a snapshot could not be analyzed.
#[derive(Debug, Display, Error)]
pub enum AnalyzeError {
    /// The snapshot is malformed.
    #[display("invalid board: {source}")]
    Parse {
        /// Parser error.
        source: ParseBoardError,
    },
    /// The snapshot could not arise from alternating play.
    #[display("board cannot arise from play: {}", join(violations))]
    Unreachable {
        /// Every violated invariant.
        violations: Vec<InvariantViolation>,
    },
}

fn join(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Everything the evaluator knows about one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The analyzed board.
    pub board: Board,
    /// Side to move.
    pub to_move: Player,
    /// Owner of a completed line, if any.
    pub winner: Option<Player>,
    /// The side to move can win on this turn.
    pub immediately_winnable: bool,
    /// Minimax value for the side to move; absent once the game is over.
    pub score: Option<Score>,
    /// Optimal move; absent once the game is over.
    pub best_move: Option<Position>,
    /// Desirability of every free square.
    pub moves: Vec<MoveScore>,
}

/// Parses and evaluates a board snapshot.
///
/// Snapshots that break a board invariant, such as a move played after
/// the game was won, are rejected. Finished games are reported without
/// searching.
#[instrument]
pub fn analyze(snapshot: &str) -> Result<Analysis, AnalyzeError> {
    let mut board: Board = snapshot
        .parse()
        .map_err(|source| AnalyzeError::Parse { source })?;
    check_board(&board).map_err(|violations| AnalyzeError::Unreachable { violations })?;

    let winner = board.winner();
    let finished = winner.is_some() || board.is_full();
    let (immediately_winnable, value, best, moves) = if finished {
        (false, None, None, Vec::new())
    } else {
        (
            is_immediately_winnable(&mut board),
            Some(score(&mut board)),
            best_move(&mut board),
            rank_moves(&mut board),
        )
    };

    Ok(Analysis {
        board,
        to_move: board.player_to_move(),
        winner,
        immediately_winnable,
        score: value,
        best_move: best,
        moves,
    })
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f)?;
        match self.winner {
            Some(winner) => return writeln!(f, "Winner: {winner}"),
            None if self.board.is_full() => return writeln!(f, "Draw"),
            None => {}
        }

        writeln!(f, "To move: {}", self.to_move)?;
        let yes_no = if self.immediately_winnable { "yes" } else { "no" };
        writeln!(f, "Immediately winnable: {yes_no}")?;
        if let Some(score) = self.score {
            writeln!(f, "Score: {score}")?;
        }
        if let Some(best) = self.best_move {
            writeln!(f, "Best move: {best} (row {}, column {})", best.row() + 1, best.col() + 1)?;
        }
        writeln!(f, "Moves:")?;
        for MoveScore { position, score } in &self.moves {
            writeln!(f, "  {:<14}{score:>4}", position.label())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_opposite_corners() {
        let analysis = analyze("X___O___X").unwrap();
        assert_eq!(analysis.to_move, Player::O);
        assert_eq!(analysis.winner, None);
        assert!(!analysis.immediately_winnable);
        assert_eq!(analysis.score, Some(131));
        assert_eq!(analysis.best_move, Some(Position::BottomCenter));
        assert_eq!(analysis.moves.len(), 6);
    }

    #[test]
    fn test_analyze_finished_game() {
        let analysis = analyze("XXXOO____").unwrap();
        assert_eq!(analysis.winner, Some(Player::X));
        assert_eq!(analysis.score, None);
        assert!(analysis.moves.is_empty());
        assert!(analysis.to_string().contains("Winner: X"));
    }

    #[test]
    fn test_analyze_rejects_bad_input() {
        assert!(matches!(
            analyze("XO"),
            Err(AnalyzeError::Parse { .. })
        ));
        let err = analyze("OO_______").unwrap_err();
        assert!(matches!(err, AnalyzeError::Unreachable { .. }));
        assert!(err.to_string().starts_with("board cannot arise from play"));
    }

    #[test]
    fn test_analyze_rejects_play_after_win() {
        let err = analyze("XXXOO_O__").unwrap_err();
        let AnalyzeError::Unreachable { violations } = &err else {
            panic!("expected an unreachable board, got {err}");
        };
        assert_eq!(violations.len(), 1);
        assert!(err.to_string().contains("The winner made the last move"));
    }

    #[test]
    fn test_text_report() {
        let text = analyze("XX_OO____").unwrap().to_string();
        assert!(text.contains("To move: X"));
        assert!(text.contains("Immediately winnable: yes"));
        assert!(text.contains("Best move: Top-right (row 1, column 3)"));
        assert!(text.contains("  Top-right      512"));
    }
}
