//! Headless front end: scripted events in, one frame out.

use crate::{GameSession, LogObserver, RenderFrame, UiEvent};
use anyhow::{Context, Result};
use rewind_tictactoe::SortOrder;
use std::io::Write;
use tracing::{info, instrument};

/// Parses every event up front so a typo fails before anything is played.
#[instrument(skip(events), fields(count = events.len()))]
pub fn parse_events(events: &[String]) -> Result<Vec<UiEvent>> {
    events
        .iter()
        .map(|raw| raw.parse::<UiEvent>().map_err(anyhow::Error::from))
        .collect()
}

/// Plays `events` against a new session and returns the final frame.
#[instrument(skip(events))]
pub fn replay(events: &[UiEvent], sort_order: SortOrder) -> RenderFrame {
    let mut session = GameSession::new(sort_order);
    session.subscribe(Box::new(LogObserver::new()));

    let applied = events.iter().filter(|event| session.handle(**event)).count();
    info!(applied, ignored = events.len() - applied, "Replay finished");
    session.frame()
}

/// Runs the `replay` command, writing text or JSON to `out`.
pub fn run(events: &[String], json: bool, sort_order: SortOrder, mut out: impl Write) -> Result<()> {
    let events = parse_events(events)?;
    let frame = replay(&events, sort_order);

    if json {
        let rendered =
            serde_json::to_string_pretty(&frame).context("Failed to serialize frame")?;
        writeln!(out, "{}", rendered)?;
    } else {
        write!(out, "{}", frame)?;
    }
    Ok(())
}
