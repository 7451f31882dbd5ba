//! Everything a front end needs to draw one state of the game.

use derive_getters::Getters;
use rewind_tictactoe::{GameState, Position, SortOrder, Square, sorted_move_list};
use serde::Serialize;
use tracing::instrument;

/// One board cell as it should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters, derive_new::new)]
pub struct CellView {
    /// Which cell this is.
    position: Position,
    /// What it holds.
    square: Square,
    /// Whether it belongs to the winning line and should be highlighted.
    winning: bool,
}

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    move_number: usize,
    /// Text shown for the entry.
    label: String,
    /// Whether this is the snapshot on display.
    is_current: bool,
}

/// Render-channel payload published after every state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct RenderFrame {
    /// The 9 cells in row-major order.
    cells: Vec<CellView>,
    /// Status line.
    status: String,
    /// Move list in the selected order.
    moves: Vec<MoveEntry>,
    /// Selected order of the move list.
    sort_order: SortOrder,
    /// Label of the sort control.
    toggle_label: String,
}

impl RenderFrame {
    /// Derives a frame from the game and the selected sort order.
    #[instrument(level = "debug", skip(game), fields(current_move = game.current_move()))]
    pub fn build(game: &GameState, sort_order: SortOrder) -> Self {
        let board = game.current_board();
        let outcome = game.winner();

        let cells = Position::ALL
            .into_iter()
            .map(|pos| {
                CellView::new(
                    pos,
                    board.get(pos),
                    outcome.is_some_and(|o| o.contains(pos)),
                )
            })
            .collect();

        let moves = sorted_move_list(game, sort_order)
            .into_iter()
            .map(|m| MoveEntry {
                move_number: m.move_number,
                label: m.to_string(),
                is_current: m.is_current,
            })
            .collect();

        Self {
            cells,
            status: game.status().to_string(),
            moves,
            sort_order,
            toggle_label: sort_order.toggle_label().to_string(),
        }
    }

    /// Positions of the highlighted cells.
    pub fn winning_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|c| c.winning)
            .map(|c| c.position)
            .collect()
    }
}

impl std::fmt::Display for RenderFrame {
    /// Plain-text rendering; winning cells are bracketed.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.status)?;
        writeln!(f)?;
        for row in self.cells.chunks(3) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| {
                    let symbol = match cell.square {
                        Square::Empty => ".".to_string(),
                        Square::Occupied(mark) => mark.to_string(),
                    };
                    if cell.winning {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        writeln!(f)?;
        writeln!(f, "[{}]", self.toggle_label)?;
        for entry in &self.moves {
            let marker = if entry.is_current { '>' } else { ' ' };
            writeln!(f, "{} {}", marker, entry.label)?;
        }
        Ok(())
    }
}
