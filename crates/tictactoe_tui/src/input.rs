//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_core::Position;

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward row 2.
    Down,
    /// Toward column 0.
    Left,
    /// Toward column 2.
    Right,
}

/// Something the user asked the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one square.
    MoveCursor(Direction),
    /// Place a stone under the cursor.
    PlaceAtCursor,
    /// Place a stone at a numbered square.
    PlaceAt(Position),
    /// Start a new round (N).
    NewRound,
    /// Zero the scores and start a new round (R).
    ResetScores,
    /// Leave the game (Esc).
    Quit,
}

/// Maps a key press to an action, `None` for unbound keys.
///
/// Digits 1-9 address the squares in reading order.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::PlaceAt),
        KeyCode::Char('n' | 'N') => Some(Action::NewRound),
        KeyCode::Char('r' | 'R') => Some(Action::ResetScores),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor one square, staying put at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => (row + 1, col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, col + 1),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
