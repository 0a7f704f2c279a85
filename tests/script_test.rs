//! Tests for headless script mode.

use strictly_replay::{render_json, render_text, run_script};
use strictly_tictactoe::{GameController, GameEvent, GameView, Intent};

fn intents(tokens: &str) -> Vec<Intent> {
    tokens
        .split_whitespace()
        .map(|t| t.parse().expect("valid intent"))
        .collect()
}

#[test]
fn test_script_reports_one_event_per_intent() {
    let mut game = GameController::new();
    let events = run_script(&mut game, &intents("c4 c4 j0 s j9"));
    assert_eq!(events.len(), 5);
    assert!(matches!(events[0], GameEvent::Played { move_number: 1, .. }));
    assert!(matches!(events[1], GameEvent::Ignored { .. }));
    assert_eq!(events[2], GameEvent::Jumped { from: 1, to: 0 });
    assert!(matches!(events[3], GameEvent::OrderToggled(_)));
    assert!(matches!(events[4], GameEvent::Ignored { .. }));
}

#[test]
fn test_text_output_after_first_move() {
    let mut game = GameController::new();
    run_script(&mut game, &intents("c4"));
    let text = render_text(&game.view(), "Sort");
    assert_eq!(
        text,
        ".|.|.\n-+-+-\n.|X|.\n-+-+-\n.|.|.\n\n\
         Next player: O\n\n\
         \x20 Go to game start\n\
         > You are at move #1\n\
         [Sort: ascending]\n"
    );
}

#[test]
fn test_text_output_for_won_game_sorted_descending() {
    let mut game = GameController::new();
    run_script(&mut game, &intents("c0 c3 c1 c4 c2 s"));
    let text = render_text(&game.view(), "Order");
    assert!(text.contains("Winner: X"));
    let moves: Vec<&str> = text
        .lines()
        .filter(|l| l.contains("move #") || l.contains("start"))
        .collect();
    assert_eq!(moves.first(), Some(&"> You are at move #5"));
    assert_eq!(moves.last(), Some(&"  Go to game start"));
    assert!(text.ends_with("[Order: descending]\n"));
}

#[test]
fn test_json_output_round_trips_view() {
    let mut game = GameController::new();
    run_script(&mut game, &intents("c0 c1 c2 c3 c4 c5 j2 c8"));
    let json = render_json(&game.view()).unwrap();
    let view: GameView = serde_json::from_str(&json).unwrap();
    assert_eq!(view, game.view());
    assert_eq!(*view.history_len(), 4);
    assert_eq!(*view.current_move(), 3);
}
