//! Tests for the minimax search.

use perfect_tictactoe::{
    Board, Game, GameStatus, MoveScore, Player, Position, Symmetry, WIN_SCORE, best_move,
    is_immediately_winnable, rank_moves, score,
};
use std::collections::HashSet;
use strum::IntoEnumIterator;

fn board(snapshot: &str) -> Board {
    snapshot.parse().unwrap()
}

/// Every board reachable from the empty board by alternating play,
/// stopping at wins and full boards.
fn reachable_boards() -> HashSet<Board> {
    fn walk(board: &mut Board, seen: &mut HashSet<Board>) {
        if !seen.insert(*board) || board.winner().is_some() {
            return;
        }
        let mover = board.player_to_move();
        for pos in Position::ALL {
            if board.is_free(pos) {
                board.set(pos, mover);
                walk(board, seen);
                board.unset(pos);
            }
        }
    }

    let mut seen = HashSet::new();
    walk(&mut Board::new(), &mut seen);
    seen
}

/// True if the computer, playing `computer`, avoids defeat against every
/// possible sequence of opponent moves from `board`.
fn never_loses(board: &mut Board, computer: Player) -> bool {
    if let Some(winner) = board.winner() {
        return winner == computer;
    }
    if board.is_full() {
        return true;
    }

    let mover = board.player_to_move();
    if mover == computer {
        let Some(pos) = best_move(board) else {
            return false;
        };
        board.set(pos, mover);
        let result = never_loses(board, computer);
        board.unset(pos);
        result
    } else {
        let free: Vec<Position> = board.empty_positions().collect();
        free.into_iter().all(|pos| {
            board.set(pos, mover);
            let result = never_loses(board, computer);
            board.unset(pos);
            result
        })
    }
}

#[test]
fn test_immediate_win_is_taken() {
    let mut b = board("XX_______");
    assert_eq!(b.player_to_move(), Player::X);
    assert!(is_immediately_winnable(&mut b));
    assert_eq!(best_move(&mut b), Some(Position::TopRight));
}

#[test]
fn test_opening_move() {
    let best = best_move(&mut Board::new()).unwrap();
    assert!(best.is_corner() || best == Position::Center);
    assert_eq!(best, Position::BottomRight);
}

#[test]
fn test_all_openings_are_equal() {
    let ranked = rank_moves(&mut Board::new());
    assert_eq!(ranked.len(), 9);
    assert!(ranked.iter().all(|m| m.score == 356));
}

#[test]
fn test_blocks_fork() {
    // X threatens a fork at the top-left corner.
    let mut b = board("_X_X_O_OX");
    assert_eq!(b.player_to_move(), Player::O);
    assert_eq!(best_move(&mut b), Some(Position::TopLeft));

    let ranked: Vec<(Position, u32)> = rank_moves(&mut b)
        .into_iter()
        .map(|MoveScore { position, score }| (position, score))
        .collect();
    assert_eq!(
        ranked,
        [
            (Position::TopLeft, 113),
            (Position::TopRight, 64),
            (Position::Center, 64),
            (Position::BottomLeft, 64),
        ]
    );
}

#[test]
fn test_answers_opposite_corners_with_an_edge() {
    let mut b = board("X___O___X");
    let best = best_move(&mut b).unwrap();
    assert!(!best.is_corner());
    assert_eq!(best, Position::BottomCenter);
}

#[test]
fn test_search_leaves_board_unchanged() {
    for snapshot in ["_________", "XXO______", "X___O___X", "_X_X_O_OX"] {
        let mut b = board(snapshot);
        score(&mut b);
        best_move(&mut b);
        is_immediately_winnable(&mut b);
        rank_moves(&mut b);
        assert_eq!(b, board(snapshot));
    }
}

#[test]
fn test_self_play_is_a_draw() {
    let mut game = Game::new();
    let mut played = Vec::new();
    while !game.is_over() {
        let pos = best_move(game.board_mut()).unwrap();
        played.push(pos.to_index());
        game.make_move(pos).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(played, [8, 4, 7, 6, 2, 5, 3, 1, 0]);
    assert_eq!(game.board().to_snapshot(), "XOXXOOOXX");
}

#[test]
fn test_never_loses_as_either_side() {
    assert!(never_loses(&mut Board::new(), Player::X));
    assert!(never_loses(&mut Board::new(), Player::O));
}

#[test]
fn test_score_is_symmetric() {
    let boards = reachable_boards();
    assert_eq!(boards.len(), 5478);

    for b in boards.iter().filter(|b| b.winner().is_none() && !b.is_full()) {
        let expected = score(&mut b.to_owned());
        for symmetry in Symmetry::iter() {
            let mut transformed = symmetry.transform(b);
            assert_eq!(
                score(&mut transformed),
                expected,
                "{symmetry} of {}",
                b.to_snapshot()
            );
        }
    }
}

#[test]
fn test_best_move_is_optimal_under_symmetry() {
    for b in reachable_boards()
        .iter()
        .filter(|b| b.winner().is_none() && !b.is_full())
    {
        let optimum = rank_moves(&mut b.to_owned())
            .iter()
            .map(|m| m.score)
            .max()
            .unwrap();

        for symmetry in Symmetry::iter() {
            let mut transformed = symmetry.transform(b);
            let chosen = best_move(&mut transformed).unwrap();
            let mover = transformed.player_to_move();
            transformed.set(chosen, mover);
            let value = if transformed.winner() == Some(mover) {
                WIN_SCORE
            } else {
                WIN_SCORE - score(&mut transformed)
            };
            assert_eq!(value, optimum, "{symmetry} of {}", b.to_snapshot());
        }
    }
}
