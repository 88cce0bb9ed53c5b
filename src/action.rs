//! Results of playing a move.
//!
//! Illegal input is not an error for the engine: the move is dropped and the
//! caller is told why, so a presentation layer can ignore or surface it.

use super::rules::Line;
use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// What happened when a move was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Mark placed, game continues with `next` to move.
    Continued {
        /// Player who moves next.
        next: Player,
    },
    /// Mark placed and completed a line.
    Won {
        /// The winning player.
        winner: Player,
        /// The completed line.
        line: Line,
    },
    /// Mark placed and filled the board with no line completed.
    Draw,
    /// Move dropped; state is unchanged.
    Ignored(IgnoredMove),
}

impl MoveOutcome {
    /// Returns true if the move changed the board.
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored(_))
    }
}

/// Reason a move was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoredMove {
    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a square.
    #[display("No square at index {}", _0)]
    OutOfBounds(usize),
}
