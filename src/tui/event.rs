//! Event sources feeding the frontend loop.
//!
//! Keyboard input, clock ticks and deferred result notices all arrive on a
//! single unbounded channel, so the loop handles exactly one event at a time.

use crossterm::event::{self, Event, KeyEvent};
use gridtoe_core::ResultNotice;
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval, sleep};
use tracing::{debug, instrument, warn};

/// How long the input reader waits for a key before checking for shutdown.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Something the frontend loop must react to.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A key was pressed.
    Key {
        /// The key event.
        key: KeyEvent,
        /// When it was read.
        at: Instant,
    },
    /// The match clock period elapsed.
    Tick(Instant),
    /// A previously scheduled result notice is due.
    ShowResult(ResultNotice),
    /// The terminal input source failed; carries the reason.
    InputClosed(String),
}

/// Sends a [`AppEvent::Tick`] every `period` until the receiver goes away.
#[instrument(skip(tx))]
pub fn spawn_ticker(period: Duration, tx: UnboundedSender<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticks = interval(period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticks.tick().await;
            if tx.send(AppEvent::Tick(Instant::now())).is_err() {
                debug!("Ticker stopping, receiver closed");
                break;
            }
        }
    })
}

/// Forwards terminal key events until the receiver goes away.
///
/// A terminal error ends the reader and is reported as
/// [`AppEvent::InputClosed`] so the loop can shut down.
pub fn spawn_input_reader(tx: UnboundedSender<AppEvent>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        forward_input(&tx, || {
            if event::poll(INPUT_POLL)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        });
    })
}

/// Pumps events from `next_event` into `tx` until the channel closes or
/// `next_event` fails.
fn forward_input<F>(tx: &UnboundedSender<AppEvent>, mut next_event: F)
where
    F: FnMut() -> io::Result<Option<Event>>,
{
    while !tx.is_closed() {
        match next_event() {
            Ok(Some(Event::Key(key))) => {
                let sent = tx.send(AppEvent::Key {
                    key,
                    at: Instant::now(),
                });
                if sent.is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "Failed to read terminal input");
                let _ = tx.send(AppEvent::InputClosed(e.to_string()));
                break;
            }
        }
    }
    debug!("Input reader stopped");
}

/// Delivers `notice` back to the loop after `delay`.
///
/// The notice may be stale by the time it arrives; the receiver decides
/// whether it still applies.
#[instrument(skip(notice, tx), fields(match_id = %notice.match_id()))]
pub fn schedule_result(
    delay: Duration,
    notice: ResultNotice,
    tx: UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    debug!("Scheduling result notice");
    tokio::spawn(async move {
        sleep(delay).await;
        if tx.send(AppEvent::ShowResult(notice)).is_err() {
            debug!("Dropping result notice, receiver closed");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use gridtoe_core::{GridSize, Session};
    use tokio::sync::mpsc;

    fn finished_notice() -> ResultNotice {
        let now = Instant::now();
        let mut session = Session::new(GridSize::DEFAULT, now);
        for (r, c) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
            session.activate_cell(r, c, now);
        }
        session.result_notice().expect("match over")
    }

    #[tokio::test]
    async fn test_ticker_emits_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_ticker(Duration::from_millis(5), tx);
        for _ in 0..3 {
            assert!(matches!(rx.recv().await, Some(AppEvent::Tick(_))));
        }
        drop(rx);
        handle.await.expect("ticker exits once receiver is gone");
    }

    #[test]
    fn test_input_failure_reported() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut calls = 0;
        forward_input(&tx, || {
            calls += 1;
            if calls == 1 {
                Ok(Some(Event::Key(KeyEvent::new(
                    KeyCode::Enter,
                    KeyModifiers::NONE,
                ))))
            } else {
                Err(io::Error::other("no tty"))
            }
        });

        assert!(matches!(rx.try_recv(), Ok(AppEvent::Key { .. })));
        match rx.try_recv() {
            Ok(AppEvent::InputClosed(reason)) => assert_eq!(reason, "no tty"),
            other => panic!("expected input closed, got {other:?}"),
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_input_reader_stops_when_loop_gone() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let mut calls = 0;
        forward_input(&tx, || {
            calls += 1;
            Ok(None)
        });
        assert_eq!(calls, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_result_arrives_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let notice = finished_notice();
        schedule_result(Duration::from_secs(2), notice.clone(), tx);

        tokio::time::advance(Duration::from_millis(1999)).await;
        assert!(rx.try_recv().is_err());

        match rx.recv().await {
            Some(AppEvent::ShowResult(received)) => assert_eq!(received, notice),
            other => panic!("expected result notice, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_result_dropped_when_loop_gone() {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = schedule_result(Duration::from_secs(2), finished_notice(), tx);
        drop(rx);

        tokio::time::advance(Duration::from_secs(2)).await;
        handle.await.expect("result task exits without panicking");
    }
}
