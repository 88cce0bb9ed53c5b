//! Tic-tac-toe board engine
//!
//! A deterministic two-player game over a fixed 3x3 board. The engine owns
//! the board, whose turn it is and the game status; presentation layers
//! forward clicks to [`BoardEngine::play_move`], restarts to
//! [`BoardEngine::reset`], and render from [`BoardEngine::snapshot`].
//!
//! # Architecture
//!
//! - **Engine**: move application, win/draw transitions, reset
//! - **Rules**: the 8 winning lines, win and full-board detection
//! - **Invariants**: checks that the state is reachable by legal play
//! - **View**: serializable read-model with status text and highlights
//! - **Console / Wasm**: terminal and browser presentation layers
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{BoardEngine, GameStatus, Player};
//!
//! let mut engine = BoardEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.play_move(index);
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Player::X));
//!
//! engine.reset();
//! assert_eq!(engine.current_player(), Player::X);
//! ```

#![warn(missing_docs)]
#![cfg_attr(not(feature = "wasm"), forbid(unsafe_code))]

mod action;
mod config;
mod console;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;
#[cfg(feature = "wasm")]
mod wasm;

// Crate-level exports - Engine
pub use action::{IgnoredMove, MoveOutcome};
pub use engine::BoardEngine;

// Crate-level exports - Board types
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};

// Crate-level exports - Presentation
pub use config::{ConfigError, ConsoleConfig};
pub use console::{ConsoleCommand, ParseCommandError, run_console, write_state};
pub use view::{BoardSnapshot, CellView, WINNING_CELL_CLASS, status_message};
#[cfg(feature = "wasm")]
pub use wasm::WasmBoardEngine;
