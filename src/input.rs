//! Input handling for the game screen.
//!
//! Maps raw crossterm events onto the single control each game accepts,
//! plus the app-level restart/menu/quit chain. Keys with no meaning for the
//! active game are silently ignored, and engine inputs are dropped once the
//! run has terminated (each engine also guards itself).

use crate::core::GameSession;
use crate::games::{flappy, snake, ActiveGame};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

/// Result of handling a game-screen input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// Reset the current game (accepted at any time, including mid-run).
    Restart,
    /// Return to the game menu.
    BackToMenu,
    /// Quit the application.
    Quit,
}

/// Dispatch a key event for the active game.
pub fn handle_game_key(key: KeyEvent, session: &mut GameSession) -> InputResult {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return InputResult::Quit,
        KeyCode::Esc => return InputResult::BackToMenu,
        KeyCode::Char('r') | KeyCode::Char('R') => return InputResult::Restart,
        _ => {}
    }

    match &mut session.game {
        ActiveGame::Snake(game) => {
            let input = match key.code {
                KeyCode::Up => snake::SnakeInput::Up,
                KeyCode::Down => snake::SnakeInput::Down,
                KeyCode::Left => snake::SnakeInput::Left,
                KeyCode::Right => snake::SnakeInput::Right,
                _ => snake::SnakeInput::Other,
            };
            snake::process_input(game, input);
        }
        ActiveGame::Flappy(game) => {
            let input = match key.code {
                KeyCode::Char(' ') => flappy::FlappyInput::Flap,
                _ => flappy::FlappyInput::Other,
            };
            flappy::process_input(game, input);
        }
    }

    InputResult::Continue
}

/// Dispatch a mouse event: a left click flaps, standing in for the click
/// region of the original game. Snake has no pointer surface.
pub fn handle_game_mouse(mouse: MouseEvent, session: &mut GameSession) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if let ActiveGame::Flappy(game) = &mut session.game {
            flappy::process_input(game, flappy::FlappyInput::Flap);
        }
    }
}
