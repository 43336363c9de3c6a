//! Terminal UI for gridtoe.
//!
//! The frontend is a thin driver around [`gridtoe_core::Session`]: it owns
//! the timers (clock ticks and the delayed result dialog), renders the
//! session, and turns key presses into session operations.

mod app;
mod event;
mod input;
mod ui;

pub use app::{App, Control};
pub use event::{AppEvent, schedule_result, spawn_input_reader, spawn_ticker};
pub use input::{Action, Cursor, action_for};

use crate::AppConfig;
use anyhow::{Context, Result, anyhow};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gridtoe_core::Session;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal UI until the user quits.
#[instrument(skip(config), fields(grid_size = %config.grid_size()))]
pub async fn run_tui(config: AppConfig) -> Result<()> {
    info!("Starting gridtoe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Session::new(config.grid_size(), Instant::now()));
    let res = run_event_loop(&mut terminal, &mut app, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!(
        total_games = app.session().state().total_games(),
        "Leaving gridtoe TUI"
    );
    res
}

/// Processes events one at a time until the app asks to quit.
async fn run_event_loop(terminal: &mut Tui, app: &mut App, config: &AppConfig) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let ticker = spawn_ticker(config.tick_interval(), tx.clone());
    let input = spawn_input_reader(tx.clone());

    terminal.draw(|f| ui::draw(f, app))?;

    while let Some(event) = rx.recv().await {
        match app.handle_event(event) {
            Control::Continue => {}
            Control::ScheduleResult(notice) => {
                schedule_result(config.result_delay(), notice, tx.clone());
            }
            Control::Quit => break,
            Control::InputLost(reason) => {
                ticker.abort();
                return Err(anyhow!("Terminal input closed: {reason}"));
            }
        }
        terminal.draw(|f| ui::draw(f, app))?;
    }

    ticker.abort();
    drop(rx);
    input.await.context("Input reader panicked")?;
    Ok(())
}
