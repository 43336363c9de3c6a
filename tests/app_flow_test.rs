//! End-to-end tests driving the frontend state machine without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gridtoe::{App, AppConfig, AppEvent, Control};
use gridtoe_core::{GridSize, MatchStatus, PlayerId, Session};
use std::io::Write;
use std::time::{Duration, Instant};

fn press(code: KeyCode, at: Instant) -> AppEvent {
    AppEvent::Key {
        key: KeyEvent::new(code, KeyModifiers::NONE),
        at,
    }
}

/// Walks the cursor from its current cell to `(row, col)` and presses Enter.
fn place(app: &mut App, row: usize, col: usize, at: Instant) -> Control {
    let cursor = *app.cursor();
    let vertical = if row > cursor.row { KeyCode::Down } else { KeyCode::Up };
    for _ in 0..row.abs_diff(cursor.row) {
        app.handle_event(press(vertical, at));
    }
    let horizontal = if col > cursor.col { KeyCode::Right } else { KeyCode::Left };
    for _ in 0..col.abs_diff(cursor.col) {
        app.handle_event(press(horizontal, at));
    }
    app.handle_event(press(KeyCode::Enter, at))
}

#[test]
fn test_two_matches_with_clock() {
    let t0 = Instant::now();
    let ms = Duration::from_millis;
    let mut app = App::new(Session::new(GridSize::DEFAULT, t0));

    // Player 1 thinks for 300ms, player 2 for 200ms, and so on.
    let mut now = t0;
    let moves = [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)];
    let mut last = Control::Continue;
    for (i, &(row, col)) in moves.iter().enumerate() {
        let think = if i % 2 == 0 { ms(300) } else { ms(200) };
        for _ in 0..(think.as_millis() / 100) {
            now += ms(100);
            app.handle_event(AppEvent::Tick(now));
        }
        last = place(&mut app, row, col, now);
    }

    let notice = match last {
        Control::ScheduleResult(notice) => notice,
        other => panic!("expected result, got {other:?}"),
    };
    assert_eq!(notice.winner(), Some(PlayerId::One));
    assert_eq!(notice.winner_time(), Some(ms(900)));
    assert_eq!(app.session().player(PlayerId::Two).time_spent(), ms(400));

    // Clock is frozen once the match is over.
    app.handle_event(AppEvent::Tick(now + ms(5000)));
    assert_eq!(app.session().player(PlayerId::One).time_spent(), ms(900));

    app.handle_event(AppEvent::ShowResult(notice));
    assert!(app.modal().is_some());
    app.handle_event(press(KeyCode::Enter, now));
    assert!(app.modal().is_none());

    app.handle_event(press(KeyCode::Char('+'), now));
    app.handle_event(press(KeyCode::Char('n'), now));
    let session = app.session();
    assert_eq!(session.state().grid_size().side(), 4);
    assert_eq!(session.state().status(), MatchStatus::InProgress);
    assert_eq!(session.state().total_games(), 1);
    assert_eq!(session.player(PlayerId::One).wins(), 1);
    assert_eq!(session.player(PlayerId::One).time_spent(), Duration::ZERO);
}

#[test]
fn test_occupied_cell_and_finished_board_ignored() {
    let t0 = Instant::now();
    let mut app = App::new(Session::new(GridSize::DEFAULT, t0));
    place(&mut app, 1, 1, t0);
    let before = app.session().snapshot();
    assert_eq!(app.handle_event(press(KeyCode::Enter, t0)), Control::Continue);
    assert_eq!(app.session().snapshot(), before);

    for &(row, col) in &[(0, 0), (2, 2), (0, 2), (2, 0), (0, 1)] {
        place(&mut app, row, col, t0);
    }
    // O holds (0,0),(0,2),(0,1): top row.
    assert_eq!(app.session().state().winner(), Some(PlayerId::Two));
    let before = app.session().snapshot();
    place(&mut app, 1, 0, t0);
    assert_eq!(app.session().snapshot(), before);
}

#[test]
fn test_config_file_then_flag() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "grid_size = 8\nresult_delay_ms = 500").expect("write");

    let config = AppConfig::resolve(Some(file.path()), Some(6)).expect("valid config");
    assert_eq!(config.grid_size().side(), 6);
    assert_eq!(config.result_delay(), Duration::from_millis(500));
    assert_eq!(config.tick_interval(), Duration::from_millis(100));
}
