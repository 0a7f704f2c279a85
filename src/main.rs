//! Strictly Replay - Unified CLI
//!
//! Interactive tic-tac-toe with move history, or a headless script runner.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use strictly_replay::{
    ReplayConfig, init_file_logging, init_stderr_logging, render_json, render_text, run_script,
    run_tui,
};
use strictly_tictactoe::{GameController, Intent};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = cli.effective_config()?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_logging(config.log_file(), config.log_filter())?;
            run_tui(&config)
        }
        Command::Script { intents, format } => run_headless(&config, &intents, format),
    }
}

/// Apply intents and print the final view.
fn run_headless(config: &ReplayConfig, intents: &[Intent], format: OutputFormat) -> Result<()> {
    init_stderr_logging(config.log_filter());
    info!(count = intents.len(), "Running script");

    let mut game = GameController::with_order(*config.display_order());
    run_script(&mut game, intents);

    let output = match format {
        OutputFormat::Text => render_text(&game.view(), config.sort_label()),
        OutputFormat::Json => render_json(&game.view())?,
    };
    println!("{}", output);
    Ok(())
}
