//! Status line derived from the board on display.

use super::Mark;
use serde::{Deserialize, Serialize};

/// What the status line says about the current snapshot.
///
/// The display strings are what the front end prints verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A line has been completed.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// Every square is filled and nobody won.
    #[display("Draw")]
    Draw,
    /// The game goes on; this mark plays next.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}
