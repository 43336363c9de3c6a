//! Per-session player records.

use crate::types::{Mark, PlayerId};
use serde::Serialize;
use std::time::Duration;

/// Scoreboard entry for one seat.
///
/// Wins accumulate for the whole session; time spent covers the
/// current match only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    id: PlayerId,
    mark: Mark,
    wins: u32,
    time_spent: Duration,
}

impl PlayerRecord {
    /// Creates a record with no wins and no time.
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            mark: id.mark(),
            wins: 0,
            time_spent: Duration::ZERO,
        }
    }

    /// Returns the seat.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns matches won this session.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Returns time spent holding the turn in the current match.
    pub fn time_spent(&self) -> Duration {
        self.time_spent
    }

    pub(crate) fn record_win(&mut self) {
        self.wins += 1;
    }

    pub(crate) fn credit(&mut self, delta: Duration) {
        self.time_spent = self.time_spent.saturating_add(delta);
    }

    pub(crate) fn reset_time(&mut self) {
        self.time_spent = Duration::ZERO;
    }
}
