//! Turn order: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{BoardEngine, Player};

/// Invariant: while the game is in progress, X is to move exactly when
/// both players hold the same number of marks.
pub struct TurnOrderInvariant;

impl Invariant<BoardEngine> for TurnOrderInvariant {
    fn holds(engine: &BoardEngine) -> bool {
        if !engine.is_active() {
            return true;
        }

        let expected = if engine.board().count(Player::X) == engine.board().count(Player::O) {
            Player::X
        } else {
            Player::O
        };
        engine.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
