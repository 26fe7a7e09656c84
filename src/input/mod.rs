//! Input module - terminal key events mapped onto game commands.
//!
//! Mapping only: one key press, one command. Auto-repeat and DAS-style
//! timing policy belong to whoever feeds us events, not here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Map a key code to the command it triggers, if any.
pub fn map_key(code: KeyCode) -> Option<GameAction> {
    match code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(GameAction::RotateCcw),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::RotateCw),
        KeyCode::Up => Some(GameAction::Rotate180),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(GameAction::Hold),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::PauseToggle),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Reset),
        _ => None,
    }
}

/// Whether the key event should end the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (matches!(key.code, KeyCode::Char('c'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(map_key(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(map_key(KeyCode::Down), Some(GameAction::SoftDrop));
        assert_eq!(map_key(KeyCode::Char(' ')), Some(GameAction::HardDrop));
    }

    #[test]
    fn test_rotation_keys_both_cases() {
        assert_eq!(map_key(KeyCode::Char('z')), Some(GameAction::RotateCcw));
        assert_eq!(map_key(KeyCode::Char('Z')), Some(GameAction::RotateCcw));
        assert_eq!(map_key(KeyCode::Char('x')), Some(GameAction::RotateCw));
        assert_eq!(map_key(KeyCode::Up), Some(GameAction::Rotate180));
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(map_key(KeyCode::Char('c')), Some(GameAction::Hold));
        assert_eq!(map_key(KeyCode::Char('p')), Some(GameAction::PauseToggle));
        assert_eq!(map_key(KeyCode::Char('r')), Some(GameAction::Reset));
    }

    #[test]
    fn test_unbound_keys_yield_nothing() {
        assert_eq!(map_key(KeyCode::Char('w')), None);
        assert_eq!(map_key(KeyCode::Enter), None);
        assert_eq!(map_key(KeyCode::Tab), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        // Plain 'c' is hold, not quit.
        assert!(!should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }
}
