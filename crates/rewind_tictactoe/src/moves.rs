//! Move list shown beside the board.

use super::{GameState, Move};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDescriptor {
    /// Index into the history; 0 is the game start.
    pub move_number: usize,
    /// The move that produced this snapshot. `None` for the game start.
    pub placed: Option<Move>,
    /// Whether this snapshot is on display.
    pub is_current: bool,
}

impl std::fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.placed {
            None => write!(f, "Go to game start"),
            Some(action) => {
                let prefix = if self.is_current { "You are at" } else { "Go to" };
                write!(
                    f,
                    "{} move #{}: ({}, {})",
                    prefix,
                    self.move_number,
                    action.position.row(),
                    action.position.col()
                )
            }
        }
    }
}

/// Order in which the move list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Flips the order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label for the control that flips to the other order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort Descending",
            Self::Descending => "Sort Ascending",
        }
    }
}

/// Describes every snapshot in history order.
#[instrument(level = "debug", skip(game), fields(len = game.len()))]
pub fn move_list(game: &GameState) -> Vec<MoveDescriptor> {
    let history = game.history();
    history
        .iter()
        .enumerate()
        .map(|(move_number, board)| MoveDescriptor {
            move_number,
            placed: move_number
                .checked_sub(1)
                .and_then(|prev| Move::between(&history[prev], board)),
            is_current: move_number == game.current_move(),
        })
        .collect()
}

/// [`move_list`] in the requested order. History itself is never reordered.
pub fn sorted_move_list(game: &GameState, order: SortOrder) -> Vec<MoveDescriptor> {
    let mut moves = move_list(game);
    if order == SortOrder::Descending {
        moves.reverse();
    }
    moves
}
