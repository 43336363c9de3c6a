//! Move application for tic-tac-toe.
//!
//! [`place_mark`] is a pure transition: it reads a [`MatchState`] and, for a
//! legal move, returns the next one. Illegal moves (occupied or off-board
//! cell, match already over) produce no transition at all rather than an
//! error; clicking a filled cell is routine input, not a failure.

use crate::rules::{completes_line, is_full};
use crate::state::MatchState;
use crate::types::PlayerId;
use tracing::{debug, instrument};

/// What a legal move did to the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Match continues; the turn passed to the opponent.
    Continued,
    /// The mover completed a line.
    Won(PlayerId),
    /// The board is full and nobody won.
    Draw,
}

impl Transition {
    /// Returns true if the move ended the match.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Transition::Continued)
    }
}

/// Result of a legal move: the successor state and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    state: MatchState,
    transition: Transition,
}

impl Placement {
    /// Returns the state after the move.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Returns the transition taken.
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Splits into the successor state and transition.
    pub fn into_parts(self) -> (MatchState, Transition) {
        (self.state, self.transition)
    }
}

/// Places the current player's mark at `(row, col)`.
///
/// Returns `None` without touching anything if the match is over or the
/// cell is occupied or off the board. Otherwise the mark goes onto a copy
/// of the board, and the copy is checked for a completed line through the
/// new mark, then for a full board.
#[instrument(skip(state), fields(match_id = %state.id(), player = %state.current_player()))]
pub fn place_mark(state: &MatchState, row: usize, col: usize) -> Option<Placement> {
    if state.is_game_over() {
        debug!(status = ?state.status(), "Ignoring move after match end");
        return None;
    }

    if !state.board().is_empty_at(row, col) {
        debug!("Ignoring move on occupied or off-board cell");
        return None;
    }

    let mover = state.current_player();
    let board = state.board().with_mark(row, col, mover.mark());

    let transition = if completes_line(&board, row, col) {
        Transition::Won(mover)
    } else if is_full(&board) {
        Transition::Draw
    } else {
        Transition::Continued
    };
    debug!(?transition, "Mark placed");

    Some(Placement {
        state: state.advanced(board, transition),
        transition,
    })
}
