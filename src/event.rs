//! Input events delivered by a front end.

use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::instrument;

/// Something the user did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum UiEvent {
    /// A board cell (0-8, row-major) was selected.
    #[display("play:{}", _0)]
    CellClicked(usize),
    /// An entry of the move list was selected.
    #[display("jump:{}", _0)]
    HistoryJumpRequested(usize),
    /// The sort control was activated.
    #[display("sort")]
    SortToggleRequested,
}

/// A replay event that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid event '{}': {}", input, reason)]
pub struct EventParseError {
    /// The text that was rejected.
    pub input: String,
    /// Why it was rejected.
    pub reason: String,
}

impl EventParseError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl FromStr for UiEvent {
    type Err = EventParseError;

    /// Parses `play:<cell>`, `jump:<move>` or `sort`.
    #[instrument(level = "debug")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("sort") {
            return Ok(UiEvent::SortToggleRequested);
        }

        let (kind, arg) = trimmed
            .split_once(':')
            .ok_or_else(|| EventParseError::new(s, "expected play:<cell>, jump:<move> or sort"))?;
        let value: usize = arg
            .trim()
            .parse()
            .map_err(|e| EventParseError::new(s, format!("bad number: {}", e)))?;

        match kind.trim().to_ascii_lowercase().as_str() {
            "play" if value < 9 => Ok(UiEvent::CellClicked(value)),
            "play" => Err(EventParseError::new(s, "cell must be 0-8")),
            "jump" => Ok(UiEvent::HistoryJumpRequested(value)),
            other => Err(EventParseError::new(s, format!("unknown event kind '{}'", other))),
        }
    }
}
