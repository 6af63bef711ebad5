use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// What a key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Steer the snake; doubles as the restart trigger while game over
    Steer(Direction),
    Restart,
    Quit,
    None,
}

/// Maps raw key events to game actions; every other key is ignored
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                KeyAction::Steer(Direction::Up)
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::Steer(Direction::Down)
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::Steer(Direction::Left)
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::Steer(Direction::Right)
            }

            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
