//! Game session: one game plus the presentation state around it.

use crate::{RenderFrame, SessionObserver, UiEvent};
use rewind_tictactoe::{GameState, SortOrder};
use tracing::{debug, info, instrument};

/// Owns the game and the move-list order, turns UI events into state
/// changes and publishes a [`RenderFrame`] to its observers after each one.
pub struct GameSession {
    game: GameState,
    sort_order: SortOrder,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("game", &self.game)
            .field("sort_order", &self.sort_order)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GameSession {
    /// Creates a session with a fresh game.
    #[instrument]
    pub fn new(sort_order: SortOrder) -> Self {
        info!("Creating new game session");
        Self {
            game: GameState::new(),
            sort_order,
            observers: Vec::new(),
        }
    }

    /// Registers an observer for future changes.
    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
        debug!(observers = self.observers.len(), "Observer subscribed");
    }

    /// Applies one UI event. Returns whether anything changed.
    #[instrument(skip(self), fields(current_move = self.game.current_move()))]
    pub fn handle(&mut self, event: UiEvent) -> bool {
        let changed = match event {
            UiEvent::CellClicked(index) => self.game.play_index(index),
            UiEvent::HistoryJumpRequested(move_index) => self.game.jump_to(move_index),
            UiEvent::SortToggleRequested => {
                self.sort_order = self.sort_order.toggle();
                true
            }
        };

        if changed {
            self.publish();
        } else {
            debug!("Event ignored");
        }
        changed
    }

    /// Starts over with an empty board, keeping the sort order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game = GameState::new();
        self.publish();
    }

    /// The current frame.
    pub fn frame(&self) -> RenderFrame {
        RenderFrame::build(&self.game, self.sort_order)
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Selected order of the move list.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    fn publish(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let frame = self.frame();
        for observer in &mut self.observers {
            observer.on_change(&frame);
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SortOrder::default())
    }
}
