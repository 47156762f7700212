//! Tic-tac-toe position evaluation.

use kata_common::InvalidArgument;
use kata_common::warning::warn_once;
use strum_macros::Display;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Mark {
    /// The first player.
    X,
    /// The second player.
    O,
}

impl Mark {
    /// Read a board glyph. `'X'` and `'O'` are the marks; the digit `'0'` is
    /// accepted as `O` with a one-time warning. Anything else is an empty cell.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' => Some(Self::X),
            'O' => Some(Self::O),
            '0' => {
                warn_once("TicTacToe", "digit '0' read as mark 'O'");
                Some(Self::O)
            }
            _ => None,
        }
    }
}

/// A 3×3 grid, row-major; `None` is an empty cell.
pub type Board = [[Option<Mark>; 3]; 3];

const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Build a board from three rows of three glyphs each.
///
/// Glyphs are read with [`Mark::from_char`]; use a space or `.` for empty.
///
/// # Errors
/// A row that is not exactly three characters long.
pub fn board_from_rows(rows: [&str; 3]) -> Result<Board, InvalidArgument> {
    let mut board: Board = [[None; 3]; 3];
    for (cells, row) in board.iter_mut().zip(rows) {
        if row.chars().count() != 3 {
            return Err(InvalidArgument::new(
                "rows",
                format!("row {row:?} must have exactly 3 cells"),
            ));
        }
        for (cell, glyph) in cells.iter_mut().zip(row.chars()) {
            *cell = Mark::from_char(glyph);
        }
    }
    Ok(board)
}

/// The mark that fills a complete row, column, or diagonal; `None` if no
/// line is complete.
///
/// ```
/// use kata_loops::{Mark, board_from_rows, evaluate_tic_tac_toe_position};
///
/// let board = board_from_rows(["X O", " XO", "  X"])?;
/// assert_eq!(evaluate_tic_tac_toe_position(&board), Some(Mark::X));
/// # Ok::<(), kata_loops::InvalidArgument>(())
/// ```
#[must_use]
pub fn evaluate_tic_tac_toe_position(board: &Board) -> Option<Mark> {
    LINES.into_iter().find_map(|line| {
        let [first, rest @ ..] = line.map(|(row, col)| board[row][col]);
        first.filter(|mark| rest.iter().all(|cell| *cell == Some(*mark)))
    })
}
