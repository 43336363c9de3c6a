//! Gridtoe core - pure tic-tac-toe match logic
//!
//! Two players alternate placing `X` and `O` on a square board of side
//! 3 to 9. A match ends when a player fills a row, column or diagonal, or
//! when the board fills up. Across a session each player accumulates wins;
//! within a match each accumulates the time spent holding the turn.
//!
//! # Architecture
//!
//! - **Engine**: [`engine::place_mark`] maps a [`MatchState`] and a cell to
//!   the next state, leaving the input untouched
//! - **Rules**: incremental line check and full-board check in [`rules`]
//! - **Clock**: [`MatchClock`] converts externally supplied instants into
//!   per-tick credits
//! - **Session**: [`Session`] owns the match, both player records and the
//!   clock, and is the only thing that mutates them
//!
//! # Example
//!
//! ```
//! use gridtoe_core::{GridSize, PlayerId, Session};
//! use std::time::Instant;
//!
//! let now = Instant::now();
//! let mut session = Session::new(GridSize::DEFAULT, now);
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
//!     assert!(session.activate_cell(row, col, now).is_none());
//! }
//! let notice = session.activate_cell(0, 2, now).expect("top row completed");
//! assert_eq!(notice.winner(), Some(PlayerId::One));
//! assert_eq!(session.player(PlayerId::One).wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod clock;
pub mod engine;
mod player;
pub mod rules;
mod session;
mod state;
mod types;

pub use board::Board;
pub use clock::{DEFAULT_TICK_PERIOD, MatchClock};
pub use engine::{Placement, Transition, place_mark};
pub use player::PlayerRecord;
pub use session::{ResultNotice, Session, SessionSnapshot, format_clock};
pub use state::{MatchId, MatchState, MatchStatus};
pub use types::{Cell, GridSize, GridSizeError, Mark, PlayerId};
