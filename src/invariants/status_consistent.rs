//! Status consistency: the recorded status is what the rules say about the board.

use super::Invariant;
use crate::rules::{check_winner, is_full};
use crate::{BoardEngine, GameStatus};

/// Invariant: `Won(p)` iff `p` holds a line, `Draw` iff the board is full
/// with no line, `InProgress` otherwise.
pub struct StatusConsistentInvariant;

impl Invariant<BoardEngine> for StatusConsistentInvariant {
    fn holds(engine: &BoardEngine) -> bool {
        let board = engine.board();
        let expected = match check_winner(board) {
            Some(winner) => GameStatus::Won(winner),
            None if is_full(board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        };
        engine.status() == expected
    }

    fn description() -> &'static str {
        "Game status matches the board"
    }
}
