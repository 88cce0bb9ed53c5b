//! Game rules.
//!
//! Pure functions for evaluating a board. Rules are kept apart from the
//! engine so the invariant checks can reuse them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, winning_line};
