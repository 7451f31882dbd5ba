//! Game state with a branching history of board snapshots.

use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::rules::{self, WinOutcome};
use super::{Board, GameStatus, Mark, Move, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Every snapshot played on the active branch plus the one on display.
///
/// Index 0 of the history is always the empty board and index `n` is the
/// board after `n` moves. The snapshot on display (`current_move`) need not
/// be the latest: playing from an earlier snapshot discards everything after
/// it before appending the new board.
///
/// Nothing about the outcome is stored. Whose turn it is comes from the
/// parity of `current_move`, and the winner or draw is re-evaluated from the
/// displayed board on every read.
///
/// Deserializing checks the history invariants and rejects a state that
/// play and jump could never have produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) history: Vec<Board>,
    pub(crate) current_move: usize,
}

/// Deserialized game state before validation.
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<Board>,
    current_move: usize,
}

/// A deserialized game state broke one or more history invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid game history: {} invariant(s) violated", violations.len())]
pub struct InvalidHistoryError {
    /// Every violated invariant.
    pub violations: Vec<InvariantViolation>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidHistoryError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let game = Self {
            history: raw.history,
            current_move: raw.current_move,
        };
        HistoryInvariants::check_all(&game).map_err(|violations| {
            warn!(?violations, "Rejecting deserialized game state");
            InvalidHistoryError { violations }
        })?;
        Ok(game)
    }
}

impl GameState {
    /// Creates a new game with just the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Builds a game by playing `positions` in order from the start.
    ///
    /// Positions that [`GameState::play`] would ignore are ignored here too.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Self {
        let mut game = Self::new();
        for pos in positions {
            game.play(*pos);
        }
        game
    }

    /// Places the next mark at `pos` on the displayed board.
    ///
    /// Does nothing and returns `false` if the square is taken or the
    /// displayed board already has a winner. Otherwise drops every snapshot
    /// after the displayed one, appends the new board, moves the view to it
    /// and returns `true`.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play(&mut self, pos: Position) -> bool {
        let board = self.current_board();
        if let Some(outcome) = self.winner() {
            debug!(winner = %outcome.winner, "Ignoring move, game already won");
            return false;
        }
        if !board.is_empty(pos) {
            debug!(position = %pos, "Ignoring move, square occupied");
            return false;
        }

        let mark = self.next_mark();
        let next = board.with_mark(pos, mark);

        let dropped = self.history.len() - (self.current_move + 1);
        if dropped > 0 {
            debug!(dropped, "Discarding later snapshots");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;
        debug!(action = %Move::new(mark, pos), move_number = self.current_move, "Move played");

        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "history invariants violated: {:?}",
            HistoryInvariants::check_all(self)
        );
        true
    }

    /// Like [`GameState::play`] for a raw cell index; indices past 8 are ignored.
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> bool {
        match Position::from_index(index) {
            Some(pos) => self.play(pos),
            None => {
                warn!(index, "Ignoring move, cell index out of range");
                false
            }
        }
    }

    /// Shows the snapshot after `move_index` moves.
    ///
    /// History is left alone. Returns `false` without changing anything if
    /// `move_index` is past the last snapshot.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> bool {
        if move_index >= self.history.len() {
            warn!("Ignoring jump past the end of history");
            return false;
        }
        self.current_move = move_index;
        debug!("Jumped");
        true
    }

    /// The snapshot on display.
    pub fn current_board(&self) -> Board {
        self.history[self.current_move]
    }

    /// Index of the snapshot on display.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Every snapshot on the active branch, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of snapshots (moves played on this branch plus one).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always `false`: the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Whether the latest snapshot is on display.
    pub fn is_at_latest(&self) -> bool {
        self.current_move + 1 == self.history.len()
    }

    /// Whether X plays next from the displayed snapshot.
    pub fn is_x_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// Mark that plays next from the displayed snapshot.
    pub fn next_mark(&self) -> Mark {
        Mark::for_turn(self.current_move)
    }

    /// Completed line on the displayed board, if any.
    pub fn winner(&self) -> Option<WinOutcome> {
        rules::evaluate(&self.current_board())
    }

    /// Status of the displayed board: winner first, then draw, then next player.
    #[instrument(level = "debug", skip(self))]
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(outcome) = rules::evaluate(&board) {
            GameStatus::Winner(outcome.winner)
        } else if rules::is_full(&board) {
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(self.next_mark())
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
