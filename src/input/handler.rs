use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Queue a direction for an upcoming tick
    Steer(Direction),
    Restart,
    Quit,
    None,
}

/// Maps terminal key events to game actions
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Up => KeyAction::Steer(Direction::Up),
            KeyCode::Down => KeyAction::Steer(Direction::Down),
            KeyCode::Left => KeyAction::Steer(Direction::Left),
            KeyCode::Right => KeyAction::Steer(Direction::Right),

            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'w' => KeyAction::Steer(Direction::Up),
                's' => KeyAction::Steer(Direction::Down),
                'a' => KeyAction::Steer(Direction::Left),
                'd' => KeyAction::Steer(Direction::Right),
                'r' => KeyAction::Restart,
                'q' => KeyAction::Quit,
                _ => KeyAction::None,
            },

            KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyAction {
        InputHandler::new().handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(press(KeyCode::Up), KeyAction::Steer(Direction::Up));
        assert_eq!(press(KeyCode::Down), KeyAction::Steer(Direction::Down));
        assert_eq!(press(KeyCode::Left), KeyAction::Steer(Direction::Left));
        assert_eq!(press(KeyCode::Right), KeyAction::Steer(Direction::Right));
    }

    #[test]
    fn test_wasd_keys_any_case() {
        assert_eq!(press(KeyCode::Char('w')), KeyAction::Steer(Direction::Up));
        assert_eq!(press(KeyCode::Char('A')), KeyAction::Steer(Direction::Left));
        assert_eq!(press(KeyCode::Char('s')), KeyAction::Steer(Direction::Down));
        assert_eq!(press(KeyCode::Char('D')), KeyAction::Steer(Direction::Right));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(press(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(press(KeyCode::Esc), KeyAction::Quit);
        assert_eq!(press(KeyCode::Char('R')), KeyAction::Restart);
        assert_eq!(press(KeyCode::Char('x')), KeyAction::None);
        assert_eq!(press(KeyCode::Enter), KeyAction::None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }
}
