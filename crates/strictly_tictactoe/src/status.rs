//! Status line policy.

use crate::rules::{WinningLine, is_full};
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// What the status line reports for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// A line is complete.
    Winner {
        /// Mark at the line's first cell.
        player: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// Every square is filled and nobody won.
    Draw,
    /// Play continues with this player.
    NextPlayer(Player),
}

impl Status {
    /// Derives the status, in priority order winner, draw, next player.
    pub fn derive(board: &Board, winning_line: Option<WinningLine>, x_is_next: bool) -> Self {
        if let Some(line) = winning_line
            && let Some(player) = line.player(board)
        {
            return Status::Winner { player, line };
        }
        if is_full(board) {
            Status::Draw
        } else if x_is_next {
            Status::NextPlayer(Player::X)
        } else {
            Status::NextPlayer(Player::O)
        }
    }

    /// Whether the game on this board is over.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner { player, .. } => write!(f, "Winner: {}", player),
            Status::Draw => write!(f, "Drew!"),
            Status::NextPlayer(player) => write!(f, "Next player: {}", player),
        }
    }
}
