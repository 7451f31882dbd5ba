//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board) snapshot. Nothing
//! here remembers an outcome: callers re-evaluate whenever they need one, so
//! the answer always matches whichever snapshot is on display.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinOutcome, check_winner, evaluate};
