//! Pure tic-tac-toe logic with linear move history.
//!
//! # Architecture
//!
//! - [`rules`]: winner and draw detection over a single [`Board`]
//! - [`BoardView`]: render model for one board plus the cell-click guard
//! - [`GameController`]: owns history, current move and move-list order,
//!   and resolves [`Intent`]s into [`GameEvent`]s
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameController, Intent, Position};
//!
//! let mut game = GameController::new();
//! game.dispatch(Intent::ClickCell(Position::Center));
//! assert_eq!(game.status().to_string(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board_view;
mod controller;
mod intent;
mod position;
pub mod rules;
mod status;
mod types;

pub use board_view::{BoardView, CellView};
pub use controller::{
    DisplayOrder, GameController, GameEvent, GameView, JumpError, MoveEntry, PlayError,
};
pub use intent::{Intent, IntentParseError};
pub use position::Position;
pub use rules::{WinningLine, check_winner, detect};
pub use status::Status;
pub use types::{Board, PlaceError, Player, Square};
