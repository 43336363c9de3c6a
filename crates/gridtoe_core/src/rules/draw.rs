//! Draw detection logic for tic-tac-toe.

use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no completed line indicates a draw.
#[instrument(skip(board), fields(side = board.side()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::win::completes_line;
    use super::*;
    use crate::types::{GridSize, Mark};

    fn fill(size: usize, pattern: &[&str]) -> Board {
        let mut board = Board::new(GridSize::clamped(size));
        for (row, line) in pattern.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let mark = match ch {
                    'X' => Mark::X,
                    'O' => Mark::O,
                    _ => continue,
                };
                board = board.with_mark(row, col, mark);
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(GridSize::DEFAULT)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = fill(3, &["XOX", "OXO", "OX."]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = fill(3, &["XOX", "OXX", "OXO"]);
        assert!(is_full(&board));
        for row in 0..3 {
            for col in 0..3 {
                assert!(!completes_line(&board, row, col));
            }
        }
    }

    #[test]
    fn test_full_larger_board() {
        let board = fill(4, &["XXOO", "OOXX", "XXOO", "OOXX"]);
        assert!(is_full(&board));
    }
}
