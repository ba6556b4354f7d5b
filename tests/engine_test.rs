//! Integration tests for the game engine.

use tictactoe::{Engine, MoveError, Outcome, Player, Seat};

fn engine() -> Engine {
    Engine::seeded(Player::new("ada", "X"), Player::new("grace", "O"), 42)
}

#[test]
fn test_full_walkthrough_to_row_win() {
    let mut engine = engine();
    let starter = engine.active_seat();
    let second = starter.opponent();

    // Starter takes (0,0); turn passes.
    assert_eq!(engine.play_round(0, 0).unwrap(), Outcome::Ongoing);
    assert_eq!(engine.active_seat(), second);

    // Second takes (1,1); turn passes back.
    assert_eq!(engine.play_round(1, 1).unwrap(), Outcome::Ongoing);
    assert_eq!(engine.active_seat(), starter);

    // Starter (0,1), second (1,0).
    assert_eq!(engine.play_round(0, 1).unwrap(), Outcome::Ongoing);
    assert_eq!(engine.play_round(1, 0).unwrap(), Outcome::Ongoing);
    assert_eq!(engine.active_seat(), starter);

    // (0,2) completes the top row for the starter.
    assert_eq!(engine.play_round(0, 2).unwrap(), Outcome::Win(starter));
    assert_eq!(engine.outcome().winner(), Some(starter));

    // The winning row really belongs to the starter.
    let codes = engine.board().codes();
    assert!(codes[0].iter().all(|&c| c == starter.code()));
}

#[test]
fn test_column_win() {
    let mut engine = engine();
    let starter = engine.active_seat();
    engine.play_round(0, 0).unwrap();
    engine.play_round(0, 1).unwrap();
    engine.play_round(1, 0).unwrap();
    engine.play_round(1, 1).unwrap();
    assert_eq!(engine.play_round(2, 0).unwrap(), Outcome::Win(starter));
}

#[test]
fn test_anti_diagonal_win() {
    let mut engine = engine();
    let starter = engine.active_seat();
    engine.play_round(0, 2).unwrap();
    engine.play_round(0, 0).unwrap();
    engine.play_round(1, 1).unwrap();
    engine.play_round(0, 1).unwrap();
    assert_eq!(engine.play_round(2, 0).unwrap(), Outcome::Win(starter));
}

#[test]
fn test_draw_round() {
    let mut engine = engine();
    // Final board, with A the starter:
    //   A B A
    //   A B B
    //   B A A
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ];
    let mut last = Outcome::Ongoing;
    for (row, col) in moves {
        last = engine.play_round(row, col).unwrap();
    }
    assert_eq!(last, Outcome::Draw);
    assert_eq!(engine.outcome(), Outcome::Draw);
    assert_eq!(engine.play_round(0, 0), Err(MoveError::RoundOver));
}

#[test]
fn test_rejected_moves_leave_state_untouched() {
    let mut engine = engine();
    engine.play_round(0, 0).unwrap();
    let seat_before = engine.active_seat();
    let codes_before = engine.board().codes();

    assert!(engine.play_round(0, 0).is_err());
    assert!(engine.play_round(5, 5).is_err());

    assert_eq!(engine.active_seat(), seat_before);
    assert_eq!(engine.board().codes(), codes_before);
}

#[test]
fn test_marks_follow_seat_binding() {
    let engine = engine();
    assert_eq!(engine.mark_for(0), "");
    assert_eq!(engine.mark_for(Seat::One.code()), "X");
    assert_eq!(engine.mark_for(Seat::Two.code()), "O");
}

#[test]
fn test_render_snapshot_for_ui() {
    // The UI boundary consumes the occupancy-code grid; make sure it
    // serializes in the shape a web front-end would read.
    let mut engine = engine();
    let starter = engine.active_seat();
    engine.play_round(1, 1).unwrap();
    engine.play_round(0, 2).unwrap();

    let snapshot = serde_json::to_value(engine.board().codes()).unwrap();
    let center = starter.code();
    let corner = starter.opponent().code();
    assert_eq!(
        snapshot,
        serde_json::json!([[0, 0, corner], [0, center, 0], [0, 0, 0]])
    );
}

#[test]
fn test_board_serde_round_trip() {
    let mut engine = engine();
    engine.play_round(2, 2).unwrap();

    let json = serde_json::to_string(engine.board()).unwrap();
    let back: tictactoe::Board = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, engine.board());
}
