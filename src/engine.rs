//! The board engine: one owned game that a presentation layer drives.

use super::action::{IgnoredMove, MoveOutcome};
use super::invariants::{EngineInvariants, InvariantSet};
use super::rules::{self, Line};
use super::view::BoardSnapshot;
use super::{Board, GameStatus, Player, Position, Square};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Moves are applied in place. X always opens, players alternate while the
/// game is in progress, and once the game is won or drawn every further
/// move is ignored until [`BoardEngine::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_line: Option<Line>,
}

impl BoardEngine {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    /// Plays the current player's mark at a raw board index (0-8).
    ///
    /// Out-of-range indices, occupied squares and moves after the game has
    /// ended are ignored and leave the state untouched.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play_move(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(pos) => self.play(pos),
            None => self.ignore(IgnoredMove::OutOfBounds(index)),
        }
    }

    /// Plays the current player's mark at the given position.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, pos: Position) -> MoveOutcome {
        if !self.status.is_in_progress() {
            return self.ignore(IgnoredMove::GameOver);
        }
        if !self.board.is_empty(pos) {
            return self.ignore(IgnoredMove::SquareOccupied(pos));
        }

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));

        let outcome = if let Some(line) = rules::winning_line(&self.board) {
            info!(winner = %player, ?line, "Game won");
            self.status = GameStatus::Won(player);
            self.winning_line = Some(line);
            MoveOutcome::Won {
                winner: player,
                line,
            }
        } else if rules::is_full(&self.board) {
            info!("Game drawn");
            self.status = GameStatus::Draw;
            MoveOutcome::Draw
        } else {
            self.current_player = player.opponent();
            MoveOutcome::Continued {
                next: self.current_player,
            }
        };

        self.assert_invariants();
        outcome
    }

    /// Plays a sequence of board indices from a fresh game.
    ///
    /// Ignored moves are skipped the same way a click on an occupied cell
    /// would be.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Self {
        let mut engine = Self::new();
        for &index in indices {
            engine.play_move(index);
        }
        engine
    }

    /// Clears the board and starts a new game with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        info!("Game reset");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// After a win this is still the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.status.is_in_progress()
    }

    /// Returns the line that won the game, if any.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Positions that would accept a move right now.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_active() {
            Position::valid_moves(&self.board)
        } else {
            Vec::new()
        }
    }

    /// Read-model for rendering.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_engine(self)
    }

    fn ignore(&self, reason: IgnoredMove) -> MoveOutcome {
        debug!(%reason, "Move ignored");
        MoveOutcome::Ignored(reason)
    }

    fn assert_invariants(&self) {
        if let Err(violations) = EngineInvariants::check_all(self) {
            for v in &violations {
                warn!(invariant = %v.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Engine invariants violated: {:?}", violations);
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, current_player: Player, status: GameStatus) -> Self {
        let winning_line = rules::winning_line(&board);
        Self {
            board,
            current_player,
            status,
            winning_line,
        }
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_state() {
        let engine = BoardEngine::new();
        assert_eq!(engine.current_player(), Player::X);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.valid_moves().len(), 9);
    }

    #[test]
    fn test_move_switches_player() {
        let mut engine = BoardEngine::new();
        let outcome = engine.play_move(4);
        assert_eq!(outcome, MoveOutcome::Continued { next: Player::O });
        assert_eq!(engine.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(engine.current_player(), Player::O);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut engine = BoardEngine::new();
        let before = engine.clone();
        assert_eq!(
            engine.play_move(9),
            MoveOutcome::Ignored(IgnoredMove::OutOfBounds(9))
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_winner_keeps_turn() {
        let mut engine = BoardEngine::new();
        for index in [0, 3, 1, 4] {
            engine.play_move(index);
        }
        let outcome = engine.play_move(2);
        assert_eq!(
            outcome,
            MoveOutcome::Won {
                winner: Player::X,
                line: rules::LINES[0],
            }
        );
        assert_eq!(engine.current_player(), Player::X);
        assert!(engine.valid_moves().is_empty());
    }

    #[test]
    fn test_win_on_last_square_is_not_draw() {
        let mut engine = BoardEngine::new();
        // X O X / X O O / _ X O, then X completes the left column.
        for index in [0, 1, 2, 4, 3, 5, 7, 8] {
            assert!(engine.play_move(index).is_applied());
        }
        assert_eq!(engine.status(), GameStatus::InProgress);
        let outcome = engine.play_move(6);
        assert!(matches!(outcome, MoveOutcome::Won { winner: Player::X, .. }));
        assert_eq!(engine.status(), GameStatus::Won(Player::X));
    }
}
