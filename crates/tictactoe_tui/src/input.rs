//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_core::Position;

/// Direction for the cell cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What a key press asks the game view to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select a specific cell.
    Select(Position),
    /// Select the cell under the cursor.
    SelectCursor,
    /// Move the cursor.
    MoveCursor(CursorMove),
    /// Start a new round.
    Reset,
    /// Leave the application.
    Quit,
}

/// Maps a key press to a command. Unbound keys map to `None`.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Command::Select),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::SelectCursor),
        KeyCode::Up | KeyCode::Char('k') => Some(Command::MoveCursor(CursorMove::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::MoveCursor(CursorMove::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::MoveCursor(CursorMove::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::MoveCursor(CursorMove::Right)),
        _ => None,
    }
}

/// Moves the cursor one step, stopping at the board edge.
pub fn move_cursor(cursor: Position, step: CursorMove) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match step {
        CursorMove::Up => (row.saturating_sub(1), col),
        CursorMove::Down => (row + 1, col),
        CursorMove::Left => (row, col.saturating_sub(1)),
        CursorMove::Right => (row, col + 1),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_select_cells() {
        assert_eq!(
            command_for_key(key(KeyCode::Char('1'))),
            Some(Command::Select(Position::TopLeft))
        );
        assert_eq!(
            command_for_key(key(KeyCode::Char('9'))),
            Some(Command::Select(Position::BottomRight))
        );
        assert_eq!(command_for_key(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(command_for_key(key(KeyCode::Char('r'))), Some(Command::Reset));
        assert_eq!(command_for_key(key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(command_for_key(key(KeyCode::Enter)), Some(Command::SelectCursor));
    }

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, CursorMove::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, CursorMove::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, CursorMove::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, CursorMove::Right), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, CursorMove::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, CursorMove::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, CursorMove::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, CursorMove::Right), Position::BottomRight);
    }
}
