//! Game controller: linear history, current move, and move-list order.
//!
//! The controller owns the only mutable game state. Everything a view shows
//! (board, status, move list) is re-derived from `(history, current_move,
//! display_order)` on demand.

use crate::board_view::BoardView;
use crate::intent::Intent;
use crate::position::Position;
use crate::rules::{WinningLine, detect};
use crate::status::Status;
use crate::types::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Direction in which the move list is rendered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DisplayOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl DisplayOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Why a proposed board was not accepted by [`GameController::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlayError {
    /// The current board already has a winner or is full.
    #[display("Game is already over")]
    GameDecided,
    /// The board does not add exactly one mark to an empty square.
    #[display("Board must differ from the current one by exactly one new mark")]
    NotSingleMove,
    /// The new mark belongs to the wrong player.
    #[display("It is {}'s turn", _0)]
    WrongMark(#[error(not(source))] Player),
}

/// Why a jump was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// Target index is past the end of history.
    #[display("Move #{} is out of range (history has {} entries)", requested, len)]
    OutOfRange {
        /// Requested move index.
        requested: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

/// How the controller resolved an [`Intent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed and became the new last history entry.
    Played {
        /// History index of the new board.
        move_number: usize,
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
    },
    /// The current move pointer changed.
    Jumped {
        /// Previous current move.
        from: usize,
        /// New current move.
        to: usize,
    },
    /// The move list order flipped.
    OrderToggled(DisplayOrder),
    /// The intent had no effect.
    Ignored {
        /// Human-readable reason.
        reason: String,
    },
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    index: usize,
    /// Button text.
    label: String,
    /// Whether this is the move being displayed.
    current: bool,
}

impl MoveEntry {
    /// Intent sent when this entry is selected.
    pub fn intent(&self) -> Intent {
        Intent::JumpTo(self.index)
    }
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    /// Current board.
    board: BoardView,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// Order of `moves`.
    order: DisplayOrder,
    /// History index on display.
    current_move: usize,
    /// Number of history entries.
    history_len: usize,
}

/// Tic-tac-toe game with linear, branch-discarding history.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameController {
    /// Boards reached along the current line of play; index 0 is empty.
    history: Vec<Board>,
    /// Index into `history` currently displayed.
    current_move: usize,
    /// Move-list rendering order.
    display_order: DisplayOrder,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// Creates a controller at game start, moves listed oldest first.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(DisplayOrder::default())
    }

    /// Creates a controller at game start with the given move-list order.
    #[instrument]
    pub fn with_order(display_order: DisplayOrder) -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            display_order,
        }
    }

    /// Board at the current move.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Whether X is to move at the current position.
    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// Player to move at the current position.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Completed line on the current board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        detect(self.current_board())
    }

    /// Status for the current board.
    pub fn status(&self) -> Status {
        Status::derive(self.current_board(), self.winning_line(), self.x_is_next())
    }

    /// Render model of the current board.
    pub fn board_view(&self) -> BoardView {
        BoardView::render(self.current_board(), self.winning_line(), self.x_is_next())
    }

    /// Accepts `board` as the next position after the current move.
    ///
    /// Any history past the current move is discarded before `board` is
    /// appended.
    ///
    /// # Errors
    ///
    /// Rejects the board, leaving state untouched, if the current board is
    /// already decided or `board` is not exactly one new mark by the player
    /// to move.
    #[instrument(skip(self, board), fields(current_move = self.current_move))]
    pub fn play(&mut self, board: Board) -> Result<(), PlayError> {
        let current = self.current_board();
        if self.status().is_decided() {
            return Err(PlayError::GameDecided);
        }

        let changed = current.diff(&board);
        let [position] = changed.as_slice() else {
            return Err(PlayError::NotSingleMove);
        };
        if !current.is_empty(*position) {
            return Err(PlayError::NotSingleMove);
        }
        let expected = self.to_move();
        if board.get(*position).player() != Some(expected) {
            return Err(PlayError::WrongMark(expected));
        }

        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future moves");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(board);
        self.current_move = self.history.len() - 1;

        info!(
            move_number = self.current_move,
            player = %expected,
            position = %position,
            "Move played"
        );
        Ok(())
    }

    /// Displays history entry `move_number`. History is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if `move_number` is not a history
    /// index.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), JumpError> {
        if move_number >= self.history.len() {
            warn!(len = self.history.len(), "Jump target out of range");
            return Err(JumpError::OutOfRange {
                requested: move_number,
                len: self.history.len(),
            });
        }
        debug!(from = self.current_move, "Jumping");
        self.current_move = move_number;
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_display_order(&mut self) {
        self.display_order = self.display_order.toggle();
        debug!(order = %self.display_order, "Display order toggled");
    }

    /// Move list in display order.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let entry = |index: usize| {
            let label = if index == 0 {
                "Go to game start".to_string()
            } else if index == self.current_move {
                format!("You are at move #{}", index)
            } else {
                format!("Go to move #{}", index)
            };
            MoveEntry::new(index, label, index == self.current_move)
        };

        let indices = 0..self.history.len();
        match self.display_order {
            DisplayOrder::Ascending => indices.map(entry).collect(),
            DisplayOrder::Descending => indices.rev().map(entry).collect(),
        }
    }

    /// Full snapshot for rendering.
    pub fn view(&self) -> GameView {
        GameView {
            board: self.board_view(),
            moves: self.move_list(),
            order: self.display_order,
            current_move: self.current_move,
            history_len: self.history.len(),
        }
    }

    /// Resolves an intent against the current state.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> GameEvent {
        match intent {
            Intent::ClickCell(position) => {
                let Some(board) = self.board_view().click(position) else {
                    return GameEvent::Ignored {
                        reason: format!("{} cannot be played", position),
                    };
                };
                let player = self.to_move();
                match self.play(board) {
                    Ok(()) => GameEvent::Played {
                        move_number: self.current_move,
                        player,
                        position,
                    },
                    Err(e) => GameEvent::Ignored {
                        reason: e.to_string(),
                    },
                }
            }
            Intent::JumpTo(to) => {
                let from = self.current_move;
                match self.jump_to(to) {
                    Ok(()) => GameEvent::Jumped { from, to },
                    Err(e) => GameEvent::Ignored {
                        reason: e.to_string(),
                    },
                }
            }
            Intent::ToggleOrder => {
                self.toggle_display_order();
                GameEvent::OrderToggled(self.display_order)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn click(game: &mut GameController, index: usize) -> GameEvent {
        game.dispatch(Intent::ClickCell(Position::from_index(index).unwrap()))
    }

    #[test]
    fn test_new_game_has_single_empty_board() {
        let game = GameController::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_board(), &Board::new());
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_play_rejects_two_new_marks() {
        let mut game = GameController::new();
        let board = Board::new()
            .place(Position::TopLeft, Player::X)
            .unwrap()
            .place(Position::Center, Player::X)
            .unwrap();
        assert_eq!(game.play(board), Err(PlayError::NotSingleMove));
        assert_eq!(game.play(Board::new()), Err(PlayError::NotSingleMove));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_play_rejects_wrong_mark() {
        let mut game = GameController::new();
        let board = Board::new().place(Position::Center, Player::O).unwrap();
        assert_eq!(game.play(board), Err(PlayError::WrongMark(Player::X)));
    }

    #[test]
    fn test_play_rejects_overwrite() {
        let mut game = GameController::new();
        click(&mut game, 4);
        let mut squares = *game.current_board().squares();
        squares[4] = Square::Occupied(Player::O);
        assert_eq!(
            game.play(Board::from_squares(squares)),
            Err(PlayError::NotSingleMove)
        );
    }

    #[test]
    fn test_play_rejects_decided_board() {
        let mut game = GameController::new();
        for i in [0, 3, 1, 4, 2] {
            click(&mut game, i);
        }
        let board = game
            .current_board()
            .place(Position::BottomRight, Player::O)
            .unwrap();
        assert_eq!(game.play(board), Err(PlayError::GameDecided));
        assert_eq!(game.history().len(), 6);
    }

    #[test]
    fn test_jump_out_of_range_leaves_state() {
        let mut game = GameController::new();
        click(&mut game, 0);
        let before = game.clone();
        assert_eq!(
            game.jump_to(2),
            Err(JumpError::OutOfRange {
                requested: 2,
                len: 2
            })
        );
        assert_eq!(game, before);
        assert!(matches!(
            game.dispatch(Intent::JumpTo(7)),
            GameEvent::Ignored { .. }
        ));
    }

    #[test]
    fn test_move_list_labels() {
        let mut game = GameController::new();
        click(&mut game, 0);
        click(&mut game, 1);
        let labels: Vec<_> = game.move_list().iter().map(|m| m.label().clone()).collect();
        assert_eq!(
            labels,
            ["Go to game start", "Go to move #1", "You are at move #2"]
        );

        game.jump_to(0).unwrap();
        let list = game.move_list();
        assert_eq!(list[0].label(), "Go to game start");
        assert!(*list[0].current());
        assert_eq!(list[2].label(), "Go to move #2");
    }

    #[test]
    fn test_descending_order_lists_latest_first() {
        let mut game = GameController::with_order(DisplayOrder::Descending);
        click(&mut game, 0);
        let indices: Vec<_> = game.move_list().iter().map(|m| *m.index()).collect();
        assert_eq!(indices, [1, 0]);
        assert_eq!(game.move_list()[1].intent(), Intent::JumpTo(0));
    }

    #[test]
    fn test_dispatch_reports_events() {
        let mut game = GameController::new();
        assert_eq!(
            click(&mut game, 4),
            GameEvent::Played {
                move_number: 1,
                player: Player::X,
                position: Position::Center
            }
        );
        assert!(matches!(click(&mut game, 4), GameEvent::Ignored { .. }));
        assert_eq!(
            game.dispatch(Intent::JumpTo(0)),
            GameEvent::Jumped { from: 1, to: 0 }
        );
        assert_eq!(
            game.dispatch(Intent::ToggleOrder),
            GameEvent::OrderToggled(DisplayOrder::Descending)
        );
    }

    #[test]
    fn test_display_order_serializes_lowercase() {
        assert_eq!(DisplayOrder::Descending.to_string(), "descending");
        assert_eq!(
            serde_json::to_string(&DisplayOrder::Ascending).unwrap(),
            "\"ascending\""
        );
    }
}
