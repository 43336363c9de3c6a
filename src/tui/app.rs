//! Application state and logic.

use super::event::AppEvent;
use super::input::{Action, Cursor, action_for};
use crossterm::event::KeyEvent;
use derive_getters::Getters;
use gridtoe_core::{ResultNotice, Session};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// What the event loop should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// Keep going.
    Continue,
    /// Show this notice after the configured delay.
    ScheduleResult(ResultNotice),
    /// Leave the application.
    Quit,
    /// Terminal input is gone; leave with this reason as the error.
    InputLost(String),
}

/// Frontend state: the session plus what only the screen cares about.
#[derive(Debug, Getters)]
pub struct App {
    session: Session,
    cursor: Cursor,
    modal: Option<ResultNotice>,
}

impl App {
    /// Creates an application around a running session.
    #[instrument(skip(session))]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            cursor: Cursor::default(),
            modal: None,
        }
    }

    /// Handles one event from the loop.
    pub fn handle_event(&mut self, event: AppEvent) -> Control {
        match event {
            AppEvent::Tick(now) => {
                self.session.tick(now);
                Control::Continue
            }
            AppEvent::Key { key, at } => self.handle_key(key, at),
            AppEvent::ShowResult(notice) => {
                self.show_result(notice);
                Control::Continue
            }
            AppEvent::InputClosed(reason) => {
                warn!(%reason, "Terminal input closed");
                Control::InputLost(reason)
            }
        }
    }

    fn show_result(&mut self, notice: ResultNotice) {
        if self.session.is_current(&notice) {
            info!(match_id = %notice.match_id(), "Showing result");
            self.modal = Some(notice);
        } else {
            debug!(
                stale = %notice.match_id(),
                current = %self.session.state().id(),
                "Discarding result for superseded match"
            );
        }
    }

    #[instrument(skip(self, key, at), fields(code = ?key.code))]
    fn handle_key(&mut self, key: KeyEvent, at: Instant) -> Control {
        let Some(action) = action_for(&key) else {
            return Control::Continue;
        };

        if self.modal.is_some() {
            return match action {
                Action::Quit => Control::Quit,
                Action::Back | Action::Activate => {
                    debug!("Closing result dialog");
                    self.modal = None;
                    Control::Continue
                }
                _ => Control::Continue,
            };
        }

        let side = self.session.state().grid_size().side();
        match action {
            Action::Up | Action::Down | Action::Left | Action::Right => {
                self.cursor = self.cursor.moved(action, side);
                Control::Continue
            }
            Action::Activate => {
                let Cursor { row, col } = self.cursor;
                match self.session.activate_cell(row, col, at) {
                    Some(notice) => Control::ScheduleResult(notice),
                    None => Control::Continue,
                }
            }
            Action::GrowGrid => {
                let next = self.session.pending_grid_size().next();
                self.session.set_pending_grid_size(next.side());
                Control::Continue
            }
            Action::ShrinkGrid => {
                let previous = self.session.pending_grid_size().previous();
                self.session.set_pending_grid_size(previous.side());
                Control::Continue
            }
            Action::NewMatch => {
                self.session.start_pending_match(at);
                self.cursor = self
                    .cursor
                    .clamped(self.session.state().grid_size().side());
                debug!(snapshot = ?self.session.snapshot(), "New match ready");
                Control::Continue
            }
            Action::Back | Action::Quit => {
                info!("User quit");
                Control::Quit
            }
        }
    }
}
