//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::Cell;
use tracing::instrument;

/// Checks whether the mark at `(row, col)` completes a line.
///
/// Only the lines through the given cell are examined: its row, its
/// column, and whichever diagonals it lies on. A line can only become
/// uniform on the move that fills its last cell, so checking the cell
/// just played is sufficient.
///
/// Returns `false` for an empty or out-of-range cell.
#[instrument(skip(board), fields(side = board.side()))]
pub fn completes_line(board: &Board, row: usize, col: usize) -> bool {
    let mark = match board.get(row, col) {
        Some(Cell::Marked(mark)) => mark,
        _ => return false,
    };
    let n = board.side();
    let holds = |r: usize, c: usize| board.get(r, c) == Some(Cell::Marked(mark));

    if (0..n).all(|c| holds(row, c)) {
        return true;
    }

    if (0..n).all(|r| holds(r, col)) {
        return true;
    }

    if row == col && (0..n).all(|i| holds(i, i)) {
        return true;
    }

    row + col == n - 1 && (0..n).all(|i| holds(i, n - 1 - i))
}
