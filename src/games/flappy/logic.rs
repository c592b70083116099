//! Flappy state updater: gravity integration, pipe scrolling, collision
//! detection, and scoring.

use super::types::{
    FlappyGame, AREA_HEIGHT, FLAP_VELOCITY, GRAVITY, PIPE_GAP, PIPE_SPAWN_THRESHOLD, PIPE_SPEED,
    PIPE_WIDTH,
};
use rand::Rng;

/// UI-agnostic input actions for Flappy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Flap (Space key or a pointer click).
    Flap,
    /// Any other key.
    Other,
}

/// Process player input. A flap overwrites the velocity with the fixed
/// upward impulse; it never accumulates. Ignored once the run has ended.
pub fn process_input(game: &mut FlappyGame, input: FlappyInput) {
    if game.game_over {
        return;
    }
    if matches!(input, FlappyInput::Flap) {
        game.bird.velocity = FLAP_VELOCITY;
    }
}

/// Advance the game by one frame. Returns true if state changed.
///
/// Stage order per frame: integrate the bird, check floor/ceiling, then for
/// each pipe in order: scroll, collision-check, score-check. A flagged pipe
/// collision does not abort the iteration, so later pipes still advance and
/// run their passed-check on the collision frame; the off-screen sweep and
/// the spawn rule also still run that frame.
pub fn frame_flappy<R: Rng>(game: &mut FlappyGame, rng: &mut R) -> bool {
    if game.game_over {
        return false;
    }

    game.bird.velocity += GRAVITY;
    game.bird.y += game.bird.velocity;

    // Floor and ceiling both end the run
    if game.bird.y + game.bird.radius >= AREA_HEIGHT || game.bird.y - game.bird.radius <= 0.0 {
        game.game_over = true;
        return true;
    }

    let bird_x = game.bird.x;
    let bird_y = game.bird.y;
    let radius = game.bird.radius;

    for pipe in &mut game.pipes {
        pipe.x -= PIPE_SPEED;

        // Strict inequalities throughout: touching a pipe edge or a gap
        // boundary exactly is not a collision.
        let overlaps_x = bird_x + radius > pipe.x && bird_x - radius < pipe.x + PIPE_WIDTH;
        if overlaps_x
            && (bird_y - radius < pipe.top_height || bird_y + radius > pipe.top_height + PIPE_GAP)
        {
            game.game_over = true;
            continue;
        }

        // Score exactly once, the first frame the trailing edge clears the bird
        if !pipe.passed && pipe.x + PIPE_WIDTH < bird_x {
            pipe.passed = true;
            game.score += 1;
        }
    }

    game.pipes.retain(|p| p.x + PIPE_WIDTH > 0.0);
    if game
        .pipes
        .last()
        .map_or(true, |p| p.x < PIPE_SPAWN_THRESHOLD)
    {
        game.spawn_pipe(rng);
    }

    true
}
