//! Strictly Replay library - tic-tac-toe with move history and replay.
//!
//! Game logic lives in [`strictly_tictactoe`]; this crate adds the front ends.
//!
//! # Architecture
//!
//! - **Config**: TOML preferences with CLI overrides
//! - **Script**: headless intent runner for scripting and tests
//! - **TUI**: ratatui board, move list and sort control
//!
//! # Example
//!
//! ```
//! use strictly_replay::{render_text, run_script};
//! use strictly_tictactoe::{GameController, Intent, Position};
//!
//! let mut game = GameController::new();
//! run_script(&mut game, &[Intent::ClickCell(Position::Center)]);
//! assert!(render_text(&game.view(), "Sort").contains("Next player: O"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod logging;
mod script;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, ReplayConfig};

// Crate-level exports - Logging
pub use logging::{init_file_logging, init_stderr_logging};

// Crate-level exports - Script mode
pub use script::{render_json, render_text, run_script};

// Crate-level exports - Terminal UI
pub use tui::{App, run_tui};
