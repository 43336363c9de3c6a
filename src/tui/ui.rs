//! Stateless UI rendering for gridtoe.

use super::app::App;
use gridtoe_core::{Cell, Mark, PlayerRecord, ResultNotice, Session, format_clock};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(6), // Scoreboard
            Constraint::Min(7),    // Board
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Gridtoe - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_scoreboard(frame, chunks[1], app.session());
    draw_board(frame, chunks[2], app);

    let help = Paragraph::new(
        "Arrows: Move | Enter: Place | +/-: Board size | N: New game | Q: Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    if let Some(notice) = app.modal() {
        draw_result(frame, notice);
    }
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, session: &Session) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(area);

    let state = session.state();
    let [first, second] = session.players();
    let turn = (!state.is_game_over()).then(|| state.current_player());
    draw_player(frame, cols[0], first, turn == Some(first.id()));
    draw_player(frame, cols[2], second, turn == Some(second.id()));

    // The result dialog announces the outcome; the panel goes quiet.
    let status = turn
        .map(|player| format!("Player {}'s turn", player))
        .unwrap_or_default();
    let centre = Paragraph::new(vec![
        Line::from(format!("Total Games: {}", state.total_games())),
        Line::from(Span::styled(
            status,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Next board: {}", session.pending_grid_size()),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(centre, cols[1]);
}

fn draw_player(frame: &mut Frame, area: Rect, player: &PlayerRecord, is_current: bool) {
    let border = if is_current {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let panel = Paragraph::new(vec![
        Line::from(format!("Symbol: {}", player.mark())),
        Line::from(format!("Wins: {}", player.wins())),
        Line::from(format!("Time: {}", format_clock(player.time_spent()))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!("Player {}", player.id())),
    );
    frame.render_widget(panel, area);
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.session().state();
    let board = state.board();
    let side = board.side();
    let cursor = app.cursor();
    let show_cursor = !state.is_game_over() && app.modal().is_none();

    let separator = Line::from(Span::styled(
        vec!["───"; side].join("┼"),
        Style::default().fg(Color::DarkGray),
    ));

    let mut lines = Vec::with_capacity(side * 2);
    for (r, row) in board.rows().enumerate() {
        if r > 0 {
            lines.push(separator.clone());
        }
        let mut spans = Vec::with_capacity(side * 2);
        for (c, cell) in row.iter().enumerate() {
            if c > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let (symbol, base) = match cell {
                Cell::Empty => (" · ".to_string(), Style::default().fg(Color::DarkGray)),
                Cell::Marked(mark) => (format!(" {} ", mark), mark_style(*mark)),
            };
            let style = if show_cursor && cursor.row == r && cursor.col == c {
                base.bg(Color::White).fg(Color::Black)
            } else {
                base
            };
            spans.push(Span::styled(symbol, style));
        }
        lines.push(Line::from(spans));
    }

    let width = (side * 4 - 1) as u16;
    let height = (side * 2 - 1) as u16;
    frame.render_widget(Paragraph::new(lines), center_rect(area, width, height));
}

fn draw_result(frame: &mut Frame, notice: &ResultNotice) {
    let area = center_rect(frame.area(), 44, 7);

    let mut lines = vec![Line::from(Span::styled(
        notice.headline(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(time) = notice.winner_time() {
        lines.push(Line::from(format!("Winning time: {}", format_clock(time))));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to close",
        Style::default().fg(Color::DarkGray),
    )));

    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title("Match over"),
        );
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtoe_core::GridSize;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Instant;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("terminal");
        terminal.draw(|f| draw(f, app)).expect("draw");
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_scoreboard_and_board() {
        let now = Instant::now();
        let mut session = Session::new(GridSize::clamped(4), now);
        session.activate_cell(0, 0, now);
        let screen = render(&App::new(session));

        assert!(screen.contains("Player 2's turn"));
        assert!(screen.contains("Total Games: 0"));
        assert!(screen.contains("Symbol: X"));
        assert!(screen.contains("───┼───┼───┼───"));
    }

    #[test]
    fn test_finished_match_shows_no_turn() {
        let now = Instant::now();
        let mut session = Session::new(GridSize::DEFAULT, now);
        for (r, c) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
            session.activate_cell(r, c, now);
        }
        let screen = render(&App::new(session));

        assert!(!screen.contains("turn"));
        assert!(!screen.contains("wins"));
        assert!(screen.contains("Wins: 1"));
        assert!(screen.contains("Total Games: 0"));
    }
}
