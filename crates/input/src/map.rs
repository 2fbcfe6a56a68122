//! Key mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{CellIndex, Direction, GameAction};

/// Map keyboard input to game actions.
///
/// Digits place directly (1 is the top-left cell, 9 the bottom-right,
/// matching the hints drawn in empty cells); arrows, hjkl, and wasd move the
/// cursor; Enter or Space places at the cursor.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char(ch @ '1'..='9') => {
            CellIndex::new(ch as u8 - b'1').map(GameAction::SelectCell)
        }

        // Cursor movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::MoveCursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameAction::MoveCursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameAction::MoveCursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameAction::MoveCursor(Direction::Right)),

        // Placement
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::PlaceAtCursor),

        // Next round
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::NewRound),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
