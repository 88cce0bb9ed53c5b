//! Read-model for presentation layers.
//!
//! A snapshot carries everything a renderer needs: per-cell marks, which
//! cells to highlight after a win, and the status line.

use super::{BoardEngine, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};

/// Class added to cells on the winning line.
pub const WINNING_CELL_CLASS: &str = "winning-cell";

/// One cell as a renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Board index (0-8).
    pub index: usize,
    /// Mark in the cell, if any.
    pub mark: Option<Player>,
    /// Part of the winning line.
    pub winning: bool,
}

impl CellView {
    /// Style classes for this cell: the mark, then the winning highlight.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::with_capacity(2);
        match self.mark {
            Some(Player::X) => classes.push("X"),
            Some(Player::O) => classes.push("O"),
            None => {}
        }
        if self.winning {
            classes.push(WINNING_CELL_CLASS);
        }
        classes
    }
}

/// Renderable state of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Cells in index order.
    pub cells: [CellView; 9],
    /// Game status.
    pub status: GameStatus,
    /// Player to move (the winner once the game is won).
    pub current_player: Player,
    /// Indices of the winning line, if the game was won.
    pub winning_line: Option<[usize; 3]>,
    /// Status line for display.
    pub message: String,
}

impl BoardSnapshot {
    /// Captures the engine's current state.
    pub fn from_engine(engine: &BoardEngine) -> Self {
        let winning_line = engine.winning_line().map(|line| line.map(Position::to_index));
        let cells = std::array::from_fn(|index| CellView {
            index,
            mark: engine.board().squares()[index].player(),
            winning: winning_line.is_some_and(|line| line.contains(&index)),
        });

        Self {
            cells,
            status: engine.status(),
            current_player: engine.current_player(),
            winning_line,
            message: status_message(engine.status(), engine.current_player()),
        }
    }
}

/// Status line: whose turn it is, who won, or that the game was drawn.
pub fn status_message(status: GameStatus, current_player: Player) -> String {
    match status {
        GameStatus::InProgress => format!("It's {}'s turn", current_player),
        GameStatus::Won(winner) => format!("Player {} has won!", winner),
        GameStatus::Draw => "Game ended in a draw!".to_string(),
    }
}
