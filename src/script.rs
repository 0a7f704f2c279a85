//! Headless intent runner.
//!
//! Drives a [`GameController`] with a fixed list of intents and formats the
//! resulting view for stdout.

use anyhow::{Context, Result};
use strictly_tictactoe::{GameController, GameEvent, GameView, Intent};
use tracing::{info, instrument, warn};

/// Applies `intents` in order, returning one event per intent.
#[instrument(skip(game, intents), fields(count = intents.len()))]
pub fn run_script(game: &mut GameController, intents: &[Intent]) -> Vec<GameEvent> {
    intents
        .iter()
        .map(|intent| {
            let event = game.dispatch(*intent);
            match &event {
                GameEvent::Ignored { reason } => warn!(%intent, %reason, "Intent ignored"),
                other => info!(%intent, event = ?other, "Intent applied"),
            }
            event
        })
        .collect()
}

/// Board grid, status line, move list and sort control as plain text.
pub fn render_text(view: &GameView, sort_label: &str) -> String {
    let mut out = view.board().board().display();
    out.push_str("\n\n");
    out.push_str(&view.board().status().to_string());
    out.push_str("\n\n");
    for entry in view.moves() {
        let marker = if *entry.current() { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.label()));
    }
    out.push_str(&format!("[{}: {}]\n", sort_label, view.order()));
    out
}

/// The full view as pretty-printed JSON.
pub fn render_json(view: &GameView) -> Result<String> {
    serde_json::to_string_pretty(view).context("Failed to serialize game view")
}
