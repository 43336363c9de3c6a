//! Session: the owner of match state, player records and the clock.

use crate::clock::MatchClock;
use crate::engine::{self, Transition};
use crate::player::PlayerRecord;
use crate::state::{MatchId, MatchState};
use crate::types::{GridSize, PlayerId};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Renders a duration as `m:ss`.
pub fn format_clock(duration: Duration) -> String {
    let seconds = duration.as_secs();
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// End-of-match notification for the presentation layer.
///
/// Emitted synchronously by [`Session::activate_cell`] when a move ends the
/// match. Any delay before showing it belongs to the presenter, which should
/// check [`Session::is_current`] before display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultNotice {
    match_id: MatchId,
    winner: Option<PlayerId>,
    is_draw: bool,
    winner_time: Option<Duration>,
}

impl ResultNotice {
    /// Returns the match this notice belongs to.
    pub fn match_id(&self) -> MatchId {
        self.match_id
    }

    /// Returns the winner, or `None` for a draw.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Returns true if the match was drawn.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// Returns the time the winner spent holding the turn.
    pub fn winner_time(&self) -> Option<Duration> {
        self.winner_time
    }

    /// Returns the one-line announcement.
    pub fn headline(&self) -> String {
        match self.winner {
            Some(winner) => format!("Player {} won. Congratulations!", winner),
            None => "Draw! Try again :)".to_string(),
        }
    }
}

/// Serializable view of a session for rendering and logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Current match.
    pub state: MatchState,
    /// Both player records, player 1 first.
    pub players: [PlayerRecord; 2],
    /// Size staged for the next match.
    pub pending_grid_size: GridSize,
}

/// One running application session spanning many matches.
///
/// All mutation goes through `&mut self`, so events are applied strictly
/// one after another. Callers supply the current instant; the session never
/// reads the wall clock.
#[derive(Debug, Clone)]
pub struct Session {
    state: MatchState,
    players: [PlayerRecord; 2],
    pending_grid_size: GridSize,
    clock: MatchClock,
}

impl Session {
    /// Starts a session with its first match in progress.
    #[instrument(skip(now))]
    pub fn new(grid_size: GridSize, now: Instant) -> Self {
        info!(%grid_size, "Creating new session");
        Self {
            state: MatchState::fresh(MatchId::FIRST, grid_size, 0),
            players: [
                PlayerRecord::new(PlayerId::One),
                PlayerRecord::new(PlayerId::Two),
            ],
            pending_grid_size: grid_size,
            clock: MatchClock::started(now),
        }
    }

    /// Returns the current match.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Returns the record for `id`.
    pub fn player(&self, id: PlayerId) -> &PlayerRecord {
        &self.players[id.index()]
    }

    /// Returns both player records, player 1 first.
    pub fn players(&self) -> &[PlayerRecord; 2] {
        &self.players
    }

    /// Returns the size staged for the next match.
    pub fn pending_grid_size(&self) -> GridSize {
        self.pending_grid_size
    }

    fn player_mut(&mut self, id: PlayerId) -> &mut PlayerRecord {
        &mut self.players[id.index()]
    }

    /// Plays the current player's mark at `(row, col)`.
    ///
    /// Illegal moves are ignored. For a legal move the clock is settled
    /// first: time since the last tick goes to the mover, and the reference
    /// point resets to `now`. Returns a [`ResultNotice`] when the move ends
    /// the match.
    #[instrument(skip(self, now), fields(match_id = %self.state.id()))]
    pub fn activate_cell(&mut self, row: usize, col: usize, now: Instant) -> Option<ResultNotice> {
        let placement = engine::place_mark(&self.state, row, col)?;
        let mover = self.state.current_player();

        if let Some(delta) = self.clock.tick(now) {
            self.player_mut(mover).credit(delta);
        }

        let (state, transition) = placement.into_parts();
        self.state = state;

        match transition {
            Transition::Continued => {
                debug!(next = %self.state.current_player(), "Turn passed");
                None
            }
            Transition::Won(winner) => {
                self.clock.stop();
                self.player_mut(winner).record_win();
                info!(
                    %winner,
                    wins = self.player(winner).wins(),
                    "Match won"
                );
                self.result_notice()
            }
            Transition::Draw => {
                self.clock.stop();
                info!("Match drawn");
                self.result_notice()
            }
        }
    }

    /// Credits time since the last tick to the player holding the turn.
    ///
    /// Returns the credited delta, or `None` once the match has ended.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        if !self.state.is_clock_active() {
            return None;
        }
        let delta = self.clock.tick(now)?;
        let current = self.state.current_player();
        self.player_mut(current).credit(delta);
        Some(delta)
    }

    /// Stages a size for the next match, clamping it into range.
    #[instrument(skip(self))]
    pub fn set_pending_grid_size(&mut self, side: usize) -> GridSize {
        self.pending_grid_size = GridSize::clamped(side);
        debug!(pending = %self.pending_grid_size, "Staged grid size");
        self.pending_grid_size
    }

    /// Replaces the current match with a fresh one of `grid_size`.
    ///
    /// The superseded match counts towards the total only if it had ended.
    /// Both players' time resets; wins are kept.
    #[instrument(skip(self, now), fields(previous = %self.state.id()))]
    pub fn start_new_match(&mut self, grid_size: GridSize, now: Instant) {
        let completed = u32::from(self.state.is_game_over());
        let total_games = self.state.total_games() + completed;
        self.state = MatchState::fresh(self.state.id().next(), grid_size, total_games);
        self.pending_grid_size = grid_size;
        for player in &mut self.players {
            player.reset_time();
        }
        self.clock.start(now);
        info!(
            match_id = %self.state.id(),
            %grid_size,
            total_games,
            "Started new match"
        );
    }

    /// Starts a new match with the staged size.
    pub fn start_pending_match(&mut self, now: Instant) {
        self.start_new_match(self.pending_grid_size, now);
    }

    /// Builds the notice for the current match if it has ended.
    pub fn result_notice(&self) -> Option<ResultNotice> {
        if !self.state.is_game_over() {
            return None;
        }
        let winner = self.state.winner();
        Some(ResultNotice {
            match_id: self.state.id(),
            winner,
            is_draw: self.state.is_draw(),
            winner_time: winner.map(|w| self.player(w).time_spent()),
        })
    }

    /// Returns true if `notice` belongs to the match still on the board.
    pub fn is_current(&self, notice: &ResultNotice) -> bool {
        notice.match_id == self.state.id()
    }

    /// Returns a serializable copy of the session.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state.clone(),
            players: self.players.clone(),
            pending_grid_size: self.pending_grid_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(Duration::ZERO), "0:00");
        assert_eq!(format_clock(Duration::from_millis(59_999)), "0:59");
        assert_eq!(format_clock(Duration::from_secs(61)), "1:01");
        assert_eq!(format_clock(Duration::from_secs(600)), "10:00");
    }

    #[test]
    fn test_headline() {
        let t0 = Instant::now();
        let mut session = Session::new(GridSize::DEFAULT, t0);
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert!(session.activate_cell(r, c, t0).is_none());
        }
        let notice = session.activate_cell(0, 2, t0).expect("winning move");
        assert_eq!(notice.headline(), "Player 1 won. Congratulations!");
    }

    #[test]
    fn test_pending_size_does_not_touch_current_match() {
        let mut session = Session::new(GridSize::DEFAULT, Instant::now());
        assert_eq!(session.set_pending_grid_size(7).side(), 7);
        assert_eq!(session.state().grid_size(), GridSize::DEFAULT);
        assert_eq!(session.set_pending_grid_size(1).side(), 3);
        assert_eq!(session.set_pending_grid_size(99).side(), 9);
    }
}
