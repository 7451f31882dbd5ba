//! Pure tic-tac-toe game logic with a branching move history.
//!
//! The crate has no I/O. A [`GameState`] owns every board snapshot played so
//! far plus the index of the snapshot currently on display, so a front end
//! can jump back to any earlier move and branch off from there.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, GameStatus, Mark, Position};
//!
//! let mut game = GameState::new();
//! for pos in [0, 3, 4, 5, 8] {
//!     game.play(Position::from_index(pos).unwrap());
//! }
//! assert_eq!(game.status(), GameStatus::Winner(Mark::X));
//!
//! game.jump_to(2);
//! assert_eq!(game.status().to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
mod moves;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::Move;
pub use history::{GameState, InvalidHistoryError};
pub use moves::{MoveDescriptor, SortOrder, move_list, sorted_move_list};
pub use position::Position;
pub use rules::WinOutcome;
pub use status::GameStatus;
pub use types::{Board, Mark, Square};
