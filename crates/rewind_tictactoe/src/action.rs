//! Moves as first-class values.
//!
//! The history stores whole boards, not moves. A [`Move`] is recovered by
//! comparing two neighbouring snapshots, which is how the move list learns
//! which cell each entry played.

use super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Finds the move that turns `prev` into `next`.
    ///
    /// Looks for the first cell that differs and is occupied in `next`.
    /// Returns `None` when the boards are identical.
    #[instrument(level = "trace", skip(prev, next))]
    pub fn between(prev: &Board, next: &Board) -> Option<Self> {
        Position::ALL.into_iter().find_map(|pos| match next.get(pos) {
            Square::Occupied(mark) if prev.get(pos) != next.get(pos) => Some(Self::new(mark, pos)),
            _ => None,
        })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}
