//! Application state and logic.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use strictly_tictactoe::{DisplayOrder, GameController, GameEvent, Intent, Position};
use tracing::{debug, instrument};

use super::input::{digit_position, move_cursor};
use super::layout::{ScreenLayout, Target};
use crate::ReplayConfig;

/// Which widget receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The board cursor.
    #[default]
    Board,
    /// The move list selection.
    Moves,
}

/// Main application state.
///
/// Game state lives in the [`GameController`]; the app only adds cursor,
/// focus and the last event for the footer.
#[derive(Debug)]
pub struct App {
    game: GameController,
    focus: Focus,
    cursor: Position,
    /// History index highlighted in the move list.
    selected_move: usize,
    sort_label: String,
    last_event: Option<GameEvent>,
    should_quit: bool,
}

impl App {
    /// Creates a new application at game start.
    pub fn new(config: &ReplayConfig) -> Self {
        Self {
            game: GameController::with_order(*config.display_order()),
            focus: Focus::default(),
            cursor: Position::Center,
            selected_move: 0,
            sort_label: config.sort_label().clone(),
            last_event: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Widget with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// History index highlighted in the move list.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// First move-list row shown when `visible` rows fit on screen.
    ///
    /// Keeps the keyboard selection in view while the list has focus, and the
    /// current move otherwise.
    pub fn move_list_offset(&self, visible: usize) -> usize {
        let anchor = match self.focus {
            Focus::Board => *self.game.current_move(),
            Focus::Moves => self.selected_move,
        };
        let row = self
            .game
            .move_list()
            .iter()
            .position(|m| *m.index() == anchor)
            .unwrap_or(0);
        (row + 1).saturating_sub(visible.max(1))
    }

    /// Text on the sort control.
    pub fn sort_label(&self) -> &str {
        &self.sort_label
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// One-line description of the most recent intent's outcome.
    pub fn message(&self) -> String {
        match &self.last_event {
            None => "Arrows move, Enter plays, Tab switches to moves, s sorts, q quits".to_string(),
            Some(GameEvent::Played {
                move_number,
                player,
                position,
            }) => format!("Move #{}: {} played {}", move_number, player, position),
            Some(GameEvent::Jumped { to, .. }) => format!("Jumped to move #{}", to),
            Some(GameEvent::OrderToggled(order)) => match order {
                DisplayOrder::Ascending => "Moves listed oldest first".to_string(),
                DisplayOrder::Descending => "Moves listed latest first".to_string(),
            },
            Some(GameEvent::Ignored { reason }) => reason.clone(),
        }
    }

    /// Sends `intent` to the game and records the outcome.
    #[instrument(skip(self))]
    pub fn apply(&mut self, intent: Intent) {
        let event = self.game.dispatch(intent);
        debug!(?event, "Intent resolved");
        if matches!(event, GameEvent::Played { .. } | GameEvent::Jumped { .. }) {
            self.selected_move = *self.game.current_move();
        }
        self.last_event = Some(event);
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('s') => self.apply(Intent::ToggleOrder),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        if let Some(pos) = digit_position(code) {
            self.cursor = pos;
            self.apply(Intent::ClickCell(pos));
            return;
        }
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.apply(Intent::ClickCell(self.cursor)),
            _ => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        let moves = self.game.move_list();
        let Some(row) = moves.iter().position(|m| *m.index() == self.selected_move) else {
            self.selected_move = *self.game.current_move();
            return;
        };
        match code {
            KeyCode::Up => {
                if let Some(entry) = row.checked_sub(1).and_then(|r| moves.get(r)) {
                    self.selected_move = *entry.index();
                }
            }
            KeyCode::Down => {
                if let Some(entry) = moves.get(row + 1) {
                    self.selected_move = *entry.index();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.apply(moves[row].intent()),
            _ => {}
        }
    }

    /// Handles a mouse event against the layout of a frame of size `area`.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let layout = ScreenLayout::new(area);
        match layout.hit(mouse.column, mouse.row) {
            Some(Target::Cell(pos)) => {
                self.focus = Focus::Board;
                self.cursor = pos;
                self.apply(Intent::ClickCell(pos));
            }
            Some(Target::MoveRow(row)) => {
                let offset = self.move_list_offset(layout.move_rows());
                if let Some(entry) = self.game.move_list().get(offset + row) {
                    self.focus = Focus::Moves;
                    self.apply(entry.intent());
                }
            }
            Some(Target::Sort) => self.apply(Intent::ToggleOrder),
            None => {}
        }
    }
}
