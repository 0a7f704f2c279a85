//! Terminal UI for Strictly Replay.

mod app;
mod input;
mod layout;
mod terminal;
mod ui;

pub use app::{App, Focus};
pub use input::{digit_position, move_cursor};
pub use layout::{ScreenLayout, Target};
pub use terminal::TerminalGuard;
pub use ui::draw;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::ReplayConfig;

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored on every exit path, including errors from the
/// event loop.
pub fn run_tui(config: &ReplayConfig) -> Result<()> {
    info!("Starting Strictly Replay TUI");

    let mut guard = TerminalGuard::enter().context("Failed to set up terminal")?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let res = run_app(&mut terminal, App::new(config));
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    let restored = guard.restore().context("Failed to restore terminal");
    res.and(restored)
}

/// Draw, wait for one input event, resolve it, repeat.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    let mut area = Rect::default();
    loop {
        terminal.draw(|f| {
            area = f.area();
            draw(f, &app);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            // Skip key release events (crossterm fires both press and release).
            Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, area),
            _ => {}
        }

        if app.should_quit() {
            info!(moves = app.game().history().len() - 1, "User quit");
            return Ok(());
        }
    }
}
