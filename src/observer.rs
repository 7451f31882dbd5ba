//! Change notifications from a [`GameSession`](crate::GameSession).

use crate::RenderFrame;
use tracing::info;

/// Receives a fresh frame after every state change of a session.
///
/// Events that leave the session untouched (a click on a taken square, a
/// jump past the end) publish nothing.
pub trait SessionObserver {
    /// Called once per state change with the frame to draw.
    fn on_change(&mut self, frame: &RenderFrame);
}

/// Observer that writes each published status to the log.
#[derive(Debug, Default)]
pub struct LogObserver {
    published: usize,
}

impl LogObserver {
    /// Creates a new log observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames seen so far.
    pub fn published(&self) -> usize {
        self.published
    }
}

impl SessionObserver for LogObserver {
    fn on_change(&mut self, frame: &RenderFrame) {
        self.published += 1;
        info!(
            status = %frame.status(),
            moves = frame.moves().len(),
            sort_order = ?frame.sort_order(),
            published = self.published,
            "State changed"
        );
    }
}
