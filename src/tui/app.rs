//! Application state and key handling.

use super::input::{digit_cell, move_cursor, move_selection};
use crate::{GameSession, UiEvent};
use crossterm::event::{KeyCode, KeyEvent};
use rewind_tictactoe::Position;
use tracing::{debug, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    selected: usize,
}

impl App {
    /// Creates a new application around `session`.
    pub fn new(session: GameSession) -> Self {
        let mut app = Self {
            session,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
        };
        app.select_current();
        app
    }

    /// The session being shown.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the move list, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.select_current();
            }
            KeyCode::Char('s') => self.dispatch(UiEvent::SortToggleRequested),
            KeyCode::Char('n') => {
                self.session.restart();
                self.select_current();
            }
            code => {
                if let Some(cell) = digit_cell(code) {
                    self.cursor = Position::from_index(cell).unwrap_or(self.cursor);
                    self.dispatch(UiEvent::CellClicked(cell));
                } else {
                    match self.focus {
                        Focus::Board => self.handle_board_key(code),
                        Focus::History => self.handle_history_key(code),
                    }
                }
            }
        }
        KeyOutcome::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dispatch(UiEvent::CellClicked(self.cursor.to_index()));
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let frame = self.session.frame();
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(entry) = frame.moves().get(self.selected) {
                    self.dispatch(UiEvent::HistoryJumpRequested(*entry.move_number()));
                }
            }
            other => self.selected = move_selection(self.selected, frame.moves().len(), other),
        }
    }

    fn dispatch(&mut self, event: UiEvent) {
        if self.session.handle(event) {
            self.select_current();
        } else {
            debug!(%event, "No change");
        }
    }

    /// Points the list selection at the snapshot on display.
    fn select_current(&mut self) {
        self.selected = self
            .session
            .frame()
            .moves()
            .iter()
            .position(|entry| *entry.is_current())
            .unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use rewind_tictactoe::{GameStatus, Mark, SortOrder};

    fn press(app: &mut App, code: KeyCode) -> KeyOutcome {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_digits_play_cells() {
        let mut app = App::new(GameSession::default());
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.session().game().len(), 3);
        assert_eq!(app.cursor(), Position::Center);
        assert_eq!(app.session().game().status(), GameStatus::NextPlayer(Mark::X));
    }

    #[test]
    fn test_cursor_and_enter_play() {
        let mut app = App::new(GameSession::default());
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        let board = app.session().game().current_board();
        assert!(!board.is_empty(Position::TopLeft));
    }

    #[test]
    fn test_history_navigation_jumps() {
        let mut app = App::new(GameSession::default());
        for key in ['1', '5', '9'] {
            press(&mut app, KeyCode::Char(key));
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.selected(), 3);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session().game().current_move(), 1);
        assert_eq!(app.session().game().len(), 4);
    }

    #[test]
    fn test_sort_toggle_keeps_selection_on_current() {
        let mut app = App::new(GameSession::default());
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.session().sort_order(), SortOrder::Descending);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new(GameSession::default());
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session().game().len(), 1);
        assert_eq!(press(&mut app, KeyCode::Char('q')), KeyOutcome::Quit);
    }
}
