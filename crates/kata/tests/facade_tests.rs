//! The facade exposes every module under one roof.

use kata::loops::{Mark, board_from_rows, evaluate_tic_tac_toe_position};
use kata::selector::{element, id};
use kata::{Rectangle, combine, from_json};

#[test]
fn test_selector_through_facade() {
    let left = id("main")
        .and_then(|s| s.class("container"))
        .and_then(|s| s.class("editable"))
        .unwrap();
    assert_eq!(left.stringify(), "#main.container.editable");

    let right = element("p").unwrap();
    assert_eq!(
        combine(&left, "+", &right).stringify(),
        format!("{} + {}", left.stringify(), right.stringify())
    );
}

#[test]
fn test_objects_through_facade() {
    let r: Rectangle = from_json(r#"{"width":2,"height":3}"#).unwrap();
    assert!((r.area() - 6.0).abs() < f64::EPSILON);
}

#[test]
fn test_loops_through_facade() {
    let board = board_from_rows(["X  ", " X ", "  X"]).unwrap();
    assert_eq!(evaluate_tic_tac_toe_position(&board), Some(Mark::X));
}
