//! Stateless UI rendering for the replay screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use strictly_tictactoe::{BoardView, CellView, Player, Position, Square, Status};

use super::app::{App, Focus};
use super::layout::ScreenLayout;

/// Draws one frame from the app's current state.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let view = app.game().view();

    let title = Paragraph::new("Strictly Games - Tic Tac Toe Replay")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    draw_board(frame, &layout, view.board(), app);
    draw_moves(frame, &layout, app);
    draw_sort(frame, layout.sort, app);

    let status_style = match view.board().status() {
        Status::Winner { .. } => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(view.board().status().to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    let footer = Paragraph::new(app.message()).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, layout.footer);
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, board: &BoardView, app: &App) {
    let show_cursor = app.focus() == Focus::Board;
    for pos in Position::ALL {
        let highlighted = show_cursor && pos == app.cursor();
        draw_cell(frame, layout.cell(pos), board.cell(pos), highlighted);
    }
    for area in layout.row_separators {
        let sep = Paragraph::new("─".repeat(usize::from(area.width)))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, area);
    }
    for area in layout.col_separators.iter().flatten() {
        let sep = Paragraph::new(vec![Line::from("│"); usize::from(area.height)])
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, *area);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, highlighted: bool) {
    let (symbol, base_style) = match cell.square() {
        Square::Empty => (
            (cell.position().to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        base_style.bg(Color::White).fg(Color::Black)
    } else if *cell.winning() {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    // Middle line of the cell carries the mark.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines)
        .style(if *cell.winning() { style } else { Style::default() })
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let focused = app.focus() == Focus::Moves;
    let visible = layout.move_rows();
    let items: Vec<ListItem> = app
        .game()
        .move_list()
        .iter()
        .skip(app.move_list_offset(visible))
        .take(visible)
        .map(|entry| {
            let mut style = Style::default();
            if *entry.current() {
                style = style.add_modifier(Modifier::BOLD).fg(Color::Yellow);
            }
            if focused && *entry.index() == app.selected_move() {
                style = style.bg(Color::White).fg(Color::Black);
            }
            ListItem::new(Span::styled(entry.label().clone(), style))
        })
        .collect();

    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title("Moves"),
    );
    frame.render_widget(list, layout.moves);
}

fn draw_sort(frame: &mut Frame, area: Rect, app: &App) {
    let label = format!("[ {} ({}) ]", app.sort_label(), app.game().display_order());
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}
