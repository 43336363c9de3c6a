//! Core domain types for N×N tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The symbol a player places on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Mark {
    /// Cross, always placed by player 1.
    X,
    /// Nought, always placed by player 2.
    O,
}

/// Identity of one of the two seats at the board.
///
/// Player 1 always moves first in a fresh match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    strum::EnumIter,
)]
pub enum PlayerId {
    /// Player 1, plays `X`.
    #[display("1")]
    One,
    /// Player 2, plays `O`.
    #[display("2")]
    Two,
}

impl PlayerId {
    /// Returns the seat number (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Returns the opponent.
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Returns the mark this player places.
    pub fn mark(self) -> Mark {
        match self {
            PlayerId::One => Mark::X,
            PlayerId::Two => Mark::O,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    Empty,
    /// Holds a player's mark.
    Marked(Mark),
}

impl Cell {
    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Requested board side outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display(
    "grid size {requested} is outside the supported range {}..={}",
    GridSize::MIN_SIDE,
    GridSize::MAX_SIDE
)]
pub struct GridSizeError {
    /// The rejected side length.
    pub requested: usize,
}

/// Side length of a square board, always within `3..=9`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[serde(try_from = "usize", into = "usize")]
#[display("{_0}x{_0}")]
pub struct GridSize(usize);

impl GridSize {
    /// Smallest supported side.
    pub const MIN_SIDE: usize = 3;
    /// Largest supported side.
    pub const MAX_SIDE: usize = 9;
    /// Classic 3×3 board.
    pub const DEFAULT: GridSize = GridSize(3);

    /// Builds a size, pulling out-of-range requests to the nearest bound.
    #[instrument]
    pub fn clamped(side: usize) -> Self {
        GridSize(side.clamp(Self::MIN_SIDE, Self::MAX_SIDE))
    }

    /// Returns the side length.
    pub fn side(self) -> usize {
        self.0
    }

    /// Returns the number of cells on a board of this size.
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }

    /// Next larger size, saturating at the maximum.
    pub fn next(self) -> Self {
        Self::clamped(self.0 + 1)
    }

    /// Next smaller size, saturating at the minimum.
    pub fn previous(self) -> Self {
        Self::clamped(self.0.saturating_sub(1))
    }

    /// Iterates every supported size in ascending order.
    pub fn all() -> impl Iterator<Item = GridSize> {
        (Self::MIN_SIDE..=Self::MAX_SIDE).map(GridSize)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for GridSize {
    type Error = GridSizeError;

    fn try_from(side: usize) -> Result<Self, Self::Error> {
        if (Self::MIN_SIDE..=Self::MAX_SIDE).contains(&side) {
            Ok(GridSize(side))
        } else {
            Err(GridSizeError { requested: side })
        }
    }
}

impl From<GridSize> for usize {
    fn from(size: GridSize) -> Self {
        size.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_player_marks_are_fixed() {
        assert_eq!(PlayerId::One.mark(), Mark::X);
        assert_eq!(PlayerId::Two.mark(), Mark::O);
        for player in PlayerId::iter() {
            assert_eq!(player.other().other(), player);
            assert_ne!(player.other(), player);
        }
    }

    #[test]
    fn test_grid_size_range() {
        assert!(GridSize::try_from(2).is_err());
        assert!(GridSize::try_from(10).is_err());
        assert_eq!(GridSize::try_from(5).map(GridSize::side), Ok(5));
        assert_eq!(GridSize::clamped(0).side(), 3);
        assert_eq!(GridSize::clamped(42).side(), 9);
        assert_eq!(GridSize::all().count(), 7);
    }

    #[test]
    fn test_grid_size_stepping_saturates() {
        assert_eq!(GridSize::DEFAULT.previous(), GridSize::DEFAULT);
        assert_eq!(GridSize::clamped(9).next().side(), 9);
        assert_eq!(GridSize::DEFAULT.next().side(), 4);
    }

    #[test]
    fn test_grid_size_error_message() {
        let err = GridSize::try_from(12).unwrap_err();
        assert_eq!(
            err.to_string(),
            "grid size 12 is outside the supported range 3..=9"
        );
    }

    #[test]
    fn test_grid_size_display() {
        assert_eq!(GridSize::clamped(4).to_string(), "4x4");
        assert_eq!(PlayerId::Two.to_string(), "2");
        assert_eq!(Mark::O.to_string(), "O");
    }
}
