//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Nothing here is cached; callers
//! re-derive the outcome from the board whenever they need it.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, check_winner, detect};
