//! Terminal rendering: one scene per screen.

pub mod flappy_scene;
pub mod game_common;
pub mod menu_scene;
pub mod snake_scene;

use crate::core::GameSession;
use crate::games::ActiveGame;
use crate::scores::HighScores;
use ratatui::Frame;

pub use menu_scene::render_menu;

/// Draw the active game, with the end-of-run overlay on top once the run
/// has terminated.
pub fn draw_game(frame: &mut Frame, session: &GameSession, scores: &HighScores) {
    let area = frame.size();

    let high = scores.get(session.kind());
    match &session.game {
        ActiveGame::Snake(game) => snake_scene::render_snake_scene(frame, area, game, high),
        ActiveGame::Flappy(game) => flappy_scene::render_flappy_scene(frame, area, game, high),
    }

    if let Some(outcome) = session.outcome {
        game_common::render_run_over_overlay(frame, area, outcome, high);
    }
}
