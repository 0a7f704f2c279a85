//! Command-line interface for strictly_replay.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use strictly_replay::ReplayConfig;
use strictly_tictactoe::{DisplayOrder, Intent};

/// Strictly Replay - tic-tac-toe with move history
#[derive(Parser, Debug)]
#[command(name = "strictly_replay")]
#[command(about = "Tic-tac-toe with move history and replay", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// List moves latest first, overriding the config file
    #[arg(long, global = true)]
    pub descending: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Loads the config file and applies command-line overrides on top.
    pub fn effective_config(&self) -> Result<ReplayConfig> {
        let config =
            ReplayConfig::load(self.config.as_deref()).context("Failed to load configuration")?;
        Ok(if self.descending {
            config.with_display_order(DisplayOrder::Descending)
        } else {
            config
        })
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply intents without a terminal and print the resulting view
    Script {
        /// Intents in order: c<0-8> clicks a cell, j<n> jumps to a move, s toggles order
        #[arg(required = true)]
        intents: Vec<Intent>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// Output format for script mode
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Board grid, status and move list
    Text,
    /// The full view as JSON
    Json,
}
