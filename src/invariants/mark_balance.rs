//! Mark balance: X opens, so X holds as many marks as O or one more.

use super::Invariant;
use crate::{BoardEngine, Player};

/// Invariant: count(X) - count(O) is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<BoardEngine> for MarkBalanceInvariant {
    fn holds(engine: &BoardEngine) -> bool {
        let x = engine.board().count(Player::X);
        let o = engine.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X holds as many marks as O, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameStatus, Position, Square};

    #[test]
    fn test_holds_after_moves() {
        let mut engine = BoardEngine::new();
        assert!(MarkBalanceInvariant::holds(&engine));
        engine.play_move(4);
        assert!(MarkBalanceInvariant::holds(&engine));
        engine.play_move(0);
        assert!(MarkBalanceInvariant::holds(&engine));
    }

    #[test]
    fn test_extra_x_violates() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::X));
        let engine = BoardEngine::from_parts(board, Player::O, GameStatus::InProgress);
        assert!(!MarkBalanceInvariant::holds(&engine));
    }
}
