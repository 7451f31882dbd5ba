//! Each snapshot adds exactly one mark to the one before it.

use super::Invariant;
use crate::{Board, GameState, Position, Square};

/// Invariant: the first snapshot is empty and every later snapshot differs
/// from its predecessor in exactly one cell, which went from empty to a mark.
pub struct SingleMoveDeltaInvariant;

fn single_placement(prev: &Board, next: &Board) -> bool {
    let mut changed = Position::ALL
        .into_iter()
        .filter(|pos| prev.get(*pos) != next.get(*pos));

    match (changed.next(), changed.next()) {
        (Some(pos), None) => {
            prev.get(pos) == Square::Empty && next.get(pos) != Square::Empty
        }
        _ => false,
    }
}

impl Invariant<GameState> for SingleMoveDeltaInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        history.first() == Some(&Board::new())
            && history
                .windows(2)
                .all(|pair| single_placement(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to its predecessor"
    }
}
