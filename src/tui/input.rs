//! Key bindings and cursor movement for keyboard navigation.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// A user intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor up one row.
    Up,
    /// Move the cursor down one row.
    Down,
    /// Move the cursor left one column.
    Left,
    /// Move the cursor right one column.
    Right,
    /// Place a mark on the cell under the cursor.
    Activate,
    /// Stage a larger board for the next match.
    GrowGrid,
    /// Stage a smaller board for the next match.
    ShrinkGrid,
    /// Start a new match.
    NewMatch,
    /// Close the result dialog, or leave when none is open.
    Back,
    /// Leave the application.
    Quit,
}

/// Maps a key press to an action. Releases and repeats are ignored.
pub fn action_for(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::GrowGrid),
        KeyCode::Char('-') => Some(Action::ShrinkGrid),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::NewMatch),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}

/// Board cell under the keyboard cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Cursor {
    /// Moves one step in the direction of `action`, staying on a board of
    /// side `side`. Non-movement actions leave the cursor where it is.
    pub fn moved(self, action: Action, side: usize) -> Self {
        let last = side.saturating_sub(1);
        let (row, col) = match action {
            Action::Up => (self.row.saturating_sub(1), self.col),
            Action::Down => ((self.row + 1).min(last), self.col),
            Action::Left => (self.row, self.col.saturating_sub(1)),
            Action::Right => (self.row, (self.col + 1).min(last)),
            _ => (self.row, self.col),
        };
        Self { row, col }
    }

    /// Pulls the cursor back onto a board of side `side`.
    pub fn clamped(self, side: usize) -> Self {
        let last = side.saturating_sub(1);
        Self {
            row: self.row.min(last),
            col: self.col.min(last),
        }
    }
}
