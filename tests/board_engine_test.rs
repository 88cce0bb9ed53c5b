//! Tests for the board engine's move, win, draw and reset flow.

use tictactoe_engine::rules::LINES;
use tictactoe_engine::{
    Board, BoardEngine, GameStatus, IgnoredMove, MoveOutcome, Player, Position, Square,
};

/// Plays `line` for X while O answers on squares outside it.
///
/// O's replies are taken from the first free squares that do not complete a
/// line for O before X finishes.
fn x_claims(line: [Position; 3]) -> BoardEngine {
    let mut engine = BoardEngine::new();
    let fillers: Vec<Position> = Position::ALL
        .into_iter()
        .filter(|pos| !line.contains(pos))
        .collect();
    let mut fillers = fillers.into_iter();

    for (i, pos) in line.into_iter().enumerate() {
        assert!(engine.play(pos).is_applied());
        if i < 2 {
            let reply = fillers.next().expect("six free squares");
            assert!(engine.play(reply).is_applied());
        }
    }
    engine
}

#[test]
fn test_every_line_wins_for_x() {
    for line in LINES {
        let engine = x_claims(line);
        assert_eq!(engine.status(), GameStatus::Won(Player::X), "line {:?}", line);
        assert_eq!(engine.winning_line(), Some(line));
    }
}

#[test]
fn test_o_wins_column() {
    let mut engine = BoardEngine::new();
    // X: 0, 2, 8   O: 1, 4, 7
    for index in [0, 1, 2, 4, 8] {
        engine.play_move(index);
    }
    let outcome = engine.play_move(7);
    assert_eq!(
        outcome,
        MoveOutcome::Won {
            winner: Player::O,
            line: [Position::TopCenter, Position::Center, Position::BottomCenter],
        }
    );
    assert_eq!(engine.status(), GameStatus::Won(Player::O));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut engine = BoardEngine::new();
    let moves = [
        Position::TopLeft,
        Position::Center,
        Position::TopRight,
        Position::TopCenter,
        Position::BottomCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomRight,
        Position::BottomLeft,
    ];
    let mut last = None;
    for pos in moves {
        last = Some(engine.play(pos));
    }

    assert_eq!(last, Some(MoveOutcome::Draw));
    assert_eq!(engine.status(), GameStatus::Draw);
    assert_eq!(engine.winning_line(), None);
    assert!(!engine.is_active());
}

#[test]
fn test_occupied_square_leaves_state_unchanged() {
    let mut engine = BoardEngine::new();
    engine.play_move(4);
    let before = engine.clone();

    let outcome = engine.play_move(4);

    assert_eq!(
        outcome,
        MoveOutcome::Ignored(IgnoredMove::SquareOccupied(Position::Center))
    );
    assert_eq!(engine, before);
    assert_eq!(engine.current_player(), Player::O);
}

#[test]
fn test_moves_after_game_over_ignored() {
    let mut engine = BoardEngine::replay(&[0, 3, 1, 4, 2]);
    assert_eq!(engine.status(), GameStatus::Won(Player::X));
    let before = engine.clone();

    assert_eq!(engine.play_move(8), MoveOutcome::Ignored(IgnoredMove::GameOver));
    assert_eq!(engine, before);
}

#[test]
fn test_reset_restores_new_game() {
    let mut engine = BoardEngine::replay(&[0, 3, 1, 4, 2]);
    engine.reset();

    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.winning_line(), None);
    assert_eq!(engine, BoardEngine::new());

    assert!(engine.play_move(0).is_applied());
    assert_eq!(engine.board().get(Position::TopLeft), Square::Occupied(Player::X));
}

#[test]
fn test_reset_mid_game() {
    let mut engine = BoardEngine::replay(&[4, 0]);
    assert_eq!(engine.current_player(), Player::X);
    engine.play_move(8);
    engine.reset();
    assert_eq!(engine, BoardEngine::new());
}

#[test]
fn test_replay_skips_ignored_moves() {
    // The repeated 4 and the out-of-range 12 are dropped; O still moves second.
    let engine = BoardEngine::replay(&[4, 4, 12, 0]);
    assert_eq!(engine.board().get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(engine.board().get(Position::TopLeft), Square::Occupied(Player::O));
    assert_eq!(engine.current_player(), Player::X);
}

#[test]
fn test_valid_moves_shrink() {
    let engine = BoardEngine::replay(&[0, 4]);
    let valid = engine.valid_moves();
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
}
