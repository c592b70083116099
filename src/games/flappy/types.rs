//! Flappy Bird data structures.
//!
//! A free-running per-frame game over a continuous 400x400 coordinate
//! space: the bird falls under constant gravity, a flap overwrites its
//! velocity, and pipes scroll left at a fixed speed.

use rand::Rng;

/// Play area dimensions in game units.
pub const AREA_WIDTH: f64 = 400.0;
pub const AREA_HEIGHT: f64 = 400.0;

/// Bird fixed horizontal position and starting height.
pub const BIRD_X: f64 = 50.0;
pub const BIRD_START_Y: f64 = 200.0;
pub const BIRD_RADIUS: f64 = 15.0;

/// Velocity change per frame (positive = downward).
pub const GRAVITY: f64 = 0.5;

/// Flap velocity override (negative = upward). Overwrites, never adds.
pub const FLAP_VELOCITY: f64 = -10.0;

pub const PIPE_WIDTH: f64 = 50.0;
pub const PIPE_GAP: f64 = 150.0;
pub const PIPE_SPEED: f64 = 2.0;

/// A new pipe spawns once the newest one has scrolled left of this x.
pub const PIPE_SPAWN_THRESHOLD: f64 = AREA_WIDTH - 200.0;

/// Margin kept between a pipe gap and the ceiling/floor.
pub const PIPE_MARGIN: f64 = 50.0;

/// Nominal frame period in milliseconds (display-refresh stand-in).
pub const FRAME_INTERVAL_MS: u64 = 16;

/// The player entity. `x` and `radius` are constant for the whole run.
#[derive(Debug, Clone, Copy)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    pub velocity: f64,
    pub radius: f64,
}

/// A single obstacle: solid above `top_height` and below
/// `top_height + PIPE_GAP`, open in between.
#[derive(Debug, Clone)]
pub struct Pipe {
    pub x: f64,
    pub top_height: f64,
    /// Whether this pipe has already been scored.
    pub passed: bool,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub bird: Bird,
    /// Active pipes in spawn order (oldest first = leftmost first).
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub game_over: bool,
}

impl FlappyGame {
    /// Create a fresh run with the first pipe already spawned at the right
    /// edge, so there is an obstacle in play from the first frame.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut game = Self {
            bird: Bird {
                x: BIRD_X,
                y: BIRD_START_Y,
                velocity: 0.0,
                radius: BIRD_RADIUS,
            },
            pipes: Vec::new(),
            score: 0,
            game_over: false,
        };
        game.spawn_pipe(rng);
        game
    }

    /// Append a pipe at the right edge with a uniformly random gap position,
    /// keeping `PIPE_MARGIN` clear of the ceiling and floor.
    pub fn spawn_pipe<R: Rng>(&mut self, rng: &mut R) {
        let top_height = rng.gen_range(PIPE_MARGIN..AREA_HEIGHT - PIPE_GAP - PIPE_MARGIN);
        self.pipes.push(Pipe {
            x: AREA_WIDTH,
            top_height,
            passed: false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let mut rng = rand::thread_rng();
        let game = FlappyGame::new(&mut rng);
        assert_eq!(game.bird.x, BIRD_X);
        assert_eq!(game.bird.y, BIRD_START_Y);
        assert_eq!(game.bird.velocity, 0.0);
        assert_eq!(game.score, 0);
        assert!(!game.game_over);
        // One pipe waiting at the right edge
        assert_eq!(game.pipes.len(), 1);
        assert_eq!(game.pipes[0].x, AREA_WIDTH);
        assert!(!game.pipes[0].passed);
    }

    #[test]
    fn test_spawn_pipe_respects_margins() {
        let mut rng = rand::thread_rng();
        let mut game = FlappyGame::new(&mut rng);
        for _ in 0..200 {
            game.spawn_pipe(&mut rng);
        }
        for pipe in &game.pipes {
            assert!(pipe.top_height >= PIPE_MARGIN);
            assert!(pipe.top_height + PIPE_GAP + PIPE_MARGIN <= AREA_HEIGHT);
        }
    }
}
