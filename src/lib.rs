//! Rewind - tic-tac-toe with move history and time travel.
//!
//! The game rules and history live in [`rewind_tictactoe`]. This crate adds
//! the layers a front end talks to:
//!
//! - **Session**: turns [`UiEvent`]s into state changes and publishes a
//!   [`RenderFrame`] to every [`SessionObserver`] after each one
//! - **Frame**: the board with winning cells marked, the status line and the
//!   move list in the selected order
//! - **TUI**: interactive terminal front end
//! - **Replay**: headless front end for scripted events
//!
//! # Example
//!
//! ```
//! use rewind::{GameSession, UiEvent};
//!
//! let mut session = GameSession::default();
//! for cell in [0, 3, 4, 5, 8] {
//!     session.handle(UiEvent::CellClicked(cell));
//! }
//! assert_eq!(session.frame().status(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod event;
mod frame;
mod observer;
pub mod replay;
mod session;
pub mod tui;

pub use config::{AppConfig, ConfigError};
pub use event::{EventParseError, UiEvent};
pub use frame::{CellView, MoveEntry, RenderFrame};
pub use observer::{LogObserver, SessionObserver};
pub use session::GameSession;

pub use rewind_tictactoe::{
    Board, GameState, GameStatus, Mark, Move, MoveDescriptor, Position, SortOrder, Square,
    WinOutcome,
};
