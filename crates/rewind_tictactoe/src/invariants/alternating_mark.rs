//! Marks alternate X, O, X, ... along the history.

use super::Invariant;
use crate::{GameState, Mark, Move};

/// Invariant: the mark added by snapshot `n` is X for odd `n`, O for even `n`.
pub struct AlternatingMarkInvariant;

impl Invariant<GameState> for AlternatingMarkInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| match Move::between(&pair[0], &pair[1]) {
                Some(action) => action.mark == Mark::for_turn(i),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_played_game_holds() {
        let game = GameState::replay(&[Position::TopLeft, Position::Center, Position::TopRight]);
        assert!(AlternatingMarkInvariant::holds(&game));
    }

    #[test]
    fn test_o_first_violates() {
        let mut game = GameState::new();
        game.history
            .push(Board::new().with_mark(Position::Center, Mark::O));
        assert!(!AlternatingMarkInvariant::holds(&game));
    }
}
