//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triplets, in detection order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three positions holding the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// The three positions, in line order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Whether `pos` is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// The mark at the line's first cell.
    pub fn player(&self, board: &Board) -> Option<Player> {
        board.get(self.0[0]).player()
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}-{}-{}", a.to_index(), b.to_index(), c.to_index())
    }
}

/// Finds the first completed line on the board.
///
/// Lines are tried in [`LINES`] order, so a malformed board holding several
/// lines reports the earliest one.
#[instrument(skip(board))]
pub fn detect(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find_map(|[a, b, c]| {
        let sq = board.get(a);
        (sq != Square::Empty && sq == board.get(b) && sq == board.get(c))
            .then_some(WinningLine([a, b, c]))
    })
}

/// Returns the winning player, if any.
pub fn check_winner(board: &Board) -> Option<Player> {
    detect(board).and_then(|line| line.player(board))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_marks(marks: &[(Position, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |b, (pos, player)| b.place(*pos, *player).unwrap())
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(detect(&Board::new()), None);
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = with_marks(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        let line = detect(&board).unwrap();
        assert_eq!(
            line.positions(),
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = with_marks(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        let line = detect(&board).unwrap();
        assert!(line.contains(Position::Center));
        assert!(!line.contains(Position::TopLeft));
        assert_eq!(line.to_string(), "2-4-6");
        assert_eq!(line.player(&board), Some(Player::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = with_marks(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(detect(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = with_marks(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
        ]);
        assert_eq!(detect(&board), None);
    }

    #[test]
    fn test_multiple_lines_report_first_in_order() {
        // Left column and main diagonal both complete; columns precede diagonals.
        let board = with_marks(&[
            (Position::TopLeft, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
            (Position::Center, Player::X),
            (Position::BottomRight, Player::X),
        ]);
        assert_eq!(
            detect(&board).unwrap().positions(),
            [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]
        );
    }
}
