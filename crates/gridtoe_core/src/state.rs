//! Match state: one board from empty to won or drawn.

use crate::board::Board;
use crate::engine::Transition;
use crate::types::{GridSize, PlayerId};
use derive_more::Display;
use serde::Serialize;

/// Sequence number of a match within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display)]
#[display("#{_0}")]
pub struct MatchId(u64);

impl MatchId {
    /// Identifier of the first match in a session.
    pub const FIRST: MatchId = MatchId(1);

    /// Returns the identifier of the following match.
    pub fn next(self) -> Self {
        MatchId(self.0 + 1)
    }

    /// Returns the raw sequence number.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Lifecycle of a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchStatus {
    /// Moves are being accepted.
    InProgress,
    /// A player completed a line.
    Won(PlayerId),
    /// The board filled with no line completed.
    Draw,
}

impl MatchStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }
}

/// Complete state of the current match.
///
/// Replaced wholesale when a new match starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchState {
    id: MatchId,
    board: Board,
    current_player: PlayerId,
    status: MatchStatus,
    clock_active: bool,
    total_games: u32,
}

impl MatchState {
    /// Creates an in-progress match with an empty board.
    ///
    /// `total_games` counts matches completed earlier in the session.
    pub fn fresh(id: MatchId, size: GridSize, total_games: u32) -> Self {
        Self {
            id,
            board: Board::new(size),
            current_player: PlayerId::One,
            status: MatchStatus::InProgress,
            clock_active: true,
            total_games,
        }
    }

    /// Builds the state that follows a placement.
    pub(crate) fn advanced(&self, board: Board, transition: Transition) -> Self {
        let (current_player, status) = match transition {
            Transition::Continued => (self.current_player.other(), MatchStatus::InProgress),
            Transition::Won(winner) => (self.current_player, MatchStatus::Won(winner)),
            Transition::Draw => (self.current_player, MatchStatus::Draw),
        };
        Self {
            id: self.id,
            board,
            current_player,
            status,
            clock_active: !status.is_terminal(),
            total_games: self.total_games,
        }
    }

    /// Returns the match identifier.
    pub fn id(&self) -> MatchId {
        self.id
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board size.
    pub fn grid_size(&self) -> GridSize {
        self.board.size()
    }

    /// Returns the player holding the turn (or who made the final move).
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Returns the match status.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Returns true once the match is won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            MatchStatus::Won(winner) => Some(winner),
            _ => None,
        }
    }

    /// Returns true if the match ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.status == MatchStatus::Draw
    }

    /// Returns true while time should accrue to the current player.
    pub fn is_clock_active(&self) -> bool {
        self.clock_active
    }

    /// Returns the number of completed matches before this one.
    pub fn total_games(&self) -> u32 {
        self.total_games
    }
}
