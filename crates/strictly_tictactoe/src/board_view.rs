//! Render model for the board.
//!
//! A [`BoardView`] is derived from one board snapshot and knows nothing about
//! history. Front ends draw it and forward clicks through [`BoardView::click`].

use crate::position::Position;
use crate::rules::WinningLine;
use crate::status::Status;
use crate::types::{Board, Player, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct CellView {
    /// Where the cell sits.
    position: Position,
    /// What the cell holds.
    square: Square,
    /// Part of the winning line.
    winning: bool,
}

/// The nine cells plus the status line for one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct BoardView {
    /// The rendered snapshot.
    board: Board,
    /// Cells in index order.
    cells: [CellView; 9],
    /// Completed line, if any.
    winning_line: Option<WinningLine>,
    /// Whether X places the next mark.
    x_is_next: bool,
    /// Status line.
    status: Status,
}

impl BoardView {
    /// Renders `board` with the given winning line and turn.
    #[instrument(skip(board))]
    pub fn render(board: &Board, winning_line: Option<WinningLine>, x_is_next: bool) -> Self {
        let cells = Position::ALL.map(|position| CellView {
            position,
            square: board.get(position),
            winning: winning_line.is_some_and(|line| line.contains(position)),
        });
        Self {
            board: *board,
            cells,
            winning_line,
            x_is_next,
            status: Status::derive(board, winning_line, x_is_next),
        }
    }

    /// Cell at `pos`.
    pub fn cell(&self, pos: Position) -> &CellView {
        &self.cells[pos.to_index()]
    }

    /// Mark placed by the next click.
    pub fn to_move(&self) -> Player {
        if self.x_is_next { Player::X } else { Player::O }
    }

    /// Resolves a click on `pos` into the proposed next board.
    ///
    /// Returns `None` when the square is taken or a line is already complete.
    #[instrument(skip(self))]
    pub fn click(&self, pos: Position) -> Option<Board> {
        if self.winning_line.is_some() {
            debug!("Click ignored, game already won");
            return None;
        }
        self.board.place(pos, self.to_move()).ok()
    }
}
