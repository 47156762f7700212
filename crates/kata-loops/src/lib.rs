//! Conditions and loops katas.
//!
//! Independent pure functions over numbers, strings and small grids. None of
//! them share state; inputs outside a function's domain are rejected with
//! [`InvalidArgument`] rather than producing an unspecified result.

/// Branching on numbers and shapes.
pub mod conditions;
/// 2-D integer matrix multiplication.
pub mod matrix;
/// Digit-level arithmetic.
pub mod numbers;
/// String scanning.
pub mod text;
/// Tic-tac-toe position evaluation.
pub mod tic_tac_toe;

pub use conditions::{
    CanvasRect, Circle, FizzBuzz, Point, does_rectangles_overlap, get_fizz_buzz,
    get_interval_string, is_inside_circle, is_triangle,
};
pub use kata_common::InvalidArgument;
pub use matrix::get_matrix_product;
pub use numbers::{
    get_digital_root, get_factorial, get_sum_between_numbers, is_credit_card_number,
    reverse_integer, to_nary_string,
};
pub use text::{
    find_first_single_char, get_common_directory_path, is_brackets_balanced, reverse_string,
};
pub use tic_tac_toe::{Board, Mark, board_from_rows, evaluate_tic_tac_toe_position};
