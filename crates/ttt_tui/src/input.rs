//! Keyboard handling for the board.

use crossterm::event::KeyCode;
use ttt_engine::Position;

/// Moves the cursor one square in the arrow's direction, stopping at edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Maps digit keys 1-9 to board positions.
pub fn key_to_position(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => Position::from_key(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_edges_stop_cursor() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }

    #[test]
    fn test_digit_keys() {
        assert_eq!(key_to_position(KeyCode::Char('5')), Some(Position::Center));
        assert_eq!(key_to_position(KeyCode::Char('q')), None);
        assert_eq!(key_to_position(KeyCode::Enter), None);
    }
}
