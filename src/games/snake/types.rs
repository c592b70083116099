//! Snake game data structures.
//!
//! A fixed-tick grid game: the snake advances one cell per tick, grows when
//! it eats food, and the run ends on wall or self collision.

use rand::Rng;
use std::collections::VecDeque;

/// Grid dimensions (square). Cells are addressed `[0, GRID_SIZE)` on both axes.
pub const GRID_SIZE: i16 = 20;

/// Fixed simulation period in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the (dx, dy) delta for this direction.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    /// Snake body segments. Head is at the front (index 0).
    pub snake: VecDeque<Position>,
    pub food: Position,
    /// `None` until the first direction key of the run; the snake idles
    /// in place while unset.
    pub direction: Option<Direction>,
    pub score: u32,
    pub game_over: bool,
    /// Movement steps elapsed (drives the food pulse in the renderer).
    pub tick_count: u64,
}

impl SnakeGame {
    /// Create a fresh run: one segment in the center, direction unset.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut snake = VecDeque::new();
        snake.push_back(Position {
            x: GRID_SIZE / 2,
            y: GRID_SIZE / 2,
        });

        let food = spawn_food(&snake, rng);
        Self {
            snake,
            food,
            direction: None,
            score: 0,
            game_over: false,
            tick_count: 0,
        }
    }
}

/// Find a random free cell for food by rejection sampling.
pub fn spawn_food<R: Rng>(snake: &VecDeque<Position>, rng: &mut R) -> Position {
    loop {
        let pos = Position {
            x: rng.gen_range(0..GRID_SIZE),
            y: rng.gen_range(0..GRID_SIZE),
        };
        if !snake.contains(&pos) {
            return pos;
        }
    }
}
