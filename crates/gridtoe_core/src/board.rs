//! Square N×N board storage.

use crate::types::{Cell, GridSize, Mark};
use serde::Serialize;

/// N×N board in row-major order.
///
/// The side length is fixed at construction. Moves never mutate a board
/// in place: [`Board::with_mark`] hands back a fresh copy so earlier
/// snapshots stay intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the side length.
    pub fn side(&self) -> usize {
        self.size.side()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        let side = self.side();
        (row < side && col < side).then_some(row * side + col)
    }

    /// Gets the cell at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Checks that `(row, col)` is on the board and holds no mark.
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Returns a copy of this board with `mark` placed at `(row, col)`.
    ///
    /// Out-of-range coordinates yield an unchanged copy.
    pub fn with_mark(&self, row: usize, col: usize, mark: Mark) -> Board {
        let mut next = self.clone();
        if let Some(i) = self.index(row, col) {
            next.cells[i] = Cell::Marked(mark);
        }
        next
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.side())
    }

    /// Counts the cells that still hold no mark.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => ".".to_string(),
                        Cell::Marked(mark) => mark.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
