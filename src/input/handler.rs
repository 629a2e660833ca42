use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameAction(Action),
    Restart,
    Quit,
    None,
}

/// Maps terminal keys onto the environment's relative actions.
///
/// The snake always moves; left/right queue a turn for the next tick and
/// there is no reverse key, mirroring the action space.
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
            // Turns - arrow keys
            KeyCode::Left => KeyAction::GameAction(Action::Left),
            KeyCode::Right => KeyAction::GameAction(Action::Right),
            KeyCode::Up => KeyAction::GameAction(Action::Straight),

            // Turns - A/D/W
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::GameAction(Action::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::GameAction(Action::Right),
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::GameAction(Action::Straight),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

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
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: crossterm::event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_turn_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Left)),
            KeyAction::GameAction(Action::Left)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Right)),
            KeyAction::GameAction(Action::Right)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('w'))),
            KeyAction::GameAction(Action::Straight)
        );
    }

    #[test]
    fn test_control_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key_event(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key_event(key(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('r'))),
            KeyAction::Restart
        );
        assert_eq!(handler.handle_key_event(key(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let handler = InputHandler::new();
        let event = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: crossterm::event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(handler.handle_key_event(event), KeyAction::Quit);
    }
}
