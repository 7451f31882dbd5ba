//! Terminal UI for rewind.

mod app;
mod input;
mod ui;

pub use app::{App, Focus, KeyOutcome};

use crate::{AppConfig, GameSession, LogObserver};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
#[instrument(skip(config))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting rewind TUI");

    let mut session = GameSession::new(*config.sort_order());
    session.subscribe(Box::new(LogObserver::new()));
    let app = App::new(session);

    enable_raw_mode()?;
    let mut terminal = or_restore(enter_terminal, restore_terminal)?;

    let res = run_app(&mut terminal, app);

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Runs `setup`, and `restore` as well if setup fails, returning the setup error.
fn or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    setup().or_else(|err| {
        if let Err(restore_err) = restore() {
            error!(error = ?restore_err, "Failed to restore terminal");
        }
        Err(err)
    })
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release on some platforms).
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) == KeyOutcome::Quit {
                return Ok(());
            }
        }
    }
}
