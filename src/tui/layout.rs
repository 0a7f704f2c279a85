//! Screen geometry shared by drawing and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use strictly_tictactoe::Position;

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Something on screen that reacts to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board cell.
    Cell(Position),
    /// Row `n` of the visible move list, counted from the top as drawn.
    MoveRow(usize),
    /// The sort control.
    Sort,
}

/// Rectangles for every widget in one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Area the board is centred in.
    pub board: Rect,
    /// One rectangle per cell, by index.
    pub cells: [Rect; 9],
    /// Horizontal rules between board rows.
    pub row_separators: [Rect; 2],
    /// Vertical rules between board columns, row by row.
    pub col_separators: [[Rect; 2]; 3],
    /// Bordered move list.
    pub moves: Rect,
    /// Sort control.
    pub sort: Rect,
    /// Status line.
    pub status: Rect,
    /// Key help and last event.
    pub footer: Rect,
}

impl ScreenLayout {
    /// Splits `area` into widget rectangles.
    pub fn new(area: Rect) -> Self {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),         // Title
                Constraint::Min(BOARD_HEIGHT), // Board and moves
                Constraint::Length(3),         // Status
                Constraint::Length(1),         // Footer
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(BOARD_WIDTH), Constraint::Length(30)])
            .split(outer[1]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(main[1]);

        let board_area = center_rect(main[0], BOARD_WIDTH, BOARD_HEIGHT);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
            ])
            .split(board_area);

        let mut cells = [Rect::default(); 9];
        let mut col_separators = [[Rect::default(); 2]; 3];
        for row in 0..3 {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                ])
                .split(rows[row * 2]);
            for col in 0..3 {
                cells[row * 3 + col] = cols[col * 2];
            }
            col_separators[row] = [cols[1], cols[3]];
        }

        Self {
            title: outer[0],
            board: main[0],
            cells,
            row_separators: [rows[1], rows[3]],
            col_separators,
            moves: side[0],
            sort: side[1],
            status: outer[2],
            footer: outer[3],
        }
    }

    /// Number of move-list entries visible at once.
    pub fn move_rows(&self) -> usize {
        usize::from(inner(self.moves).height)
    }

    /// Rectangle for `pos`.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// What sits under terminal cell (`column`, `row`), if anything clickable.
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        if let Some(index) = self.cells.iter().position(|r| contains(*r, column, row)) {
            return Position::from_index(index).map(Target::Cell);
        }
        if contains(self.sort, column, row) {
            return Some(Target::Sort);
        }
        // Entries start inside the top border, one per line.
        let inner = inner(self.moves);
        if contains(inner, column, row) {
            return Some(Target::MoveRow(usize::from(row - inner.y)));
        }
        None
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// `rect` minus a one-cell border.
fn inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn test_cells_do_not_overlap_and_fit_board() {
        let layout = layout();
        for (i, a) in layout.cells.iter().enumerate() {
            assert_eq!(a.width, CELL_WIDTH);
            assert_eq!(a.height, CELL_HEIGHT);
            assert!(layout.board.intersects(*a));
            for b in &layout.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_hit_maps_cell_centres() {
        let layout = layout();
        for pos in Position::ALL {
            let r = layout.cell(pos);
            let hit = layout.hit(r.x + r.width / 2, r.y + r.height / 2);
            assert_eq!(hit, Some(Target::Cell(pos)));
        }
    }

    #[test]
    fn test_move_rows_excludes_border() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 18));
        assert_eq!(layout.move_rows(), usize::from(layout.moves.height) - 2);
        assert_eq!(layout.move_rows(), 6);
    }

    #[test]
    fn test_hit_move_rows_and_sort() {
        let layout = layout();
        let inner = inner(layout.moves);
        assert_eq!(layout.hit(inner.x, inner.y), Some(Target::MoveRow(0)));
        assert_eq!(layout.hit(inner.x + 3, inner.y + 2), Some(Target::MoveRow(2)));
        // Border itself is not an entry.
        assert_eq!(layout.hit(layout.moves.x, layout.moves.y), None);
        assert_eq!(
            layout.hit(layout.sort.x + 1, layout.sort.y + 1),
            Some(Target::Sort)
        );
        assert_eq!(layout.hit(layout.title.x, layout.title.y), None);
    }
}
