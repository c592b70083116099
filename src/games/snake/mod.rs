//! Snake: fixed-tick grid game.

pub mod logic;
pub mod types;

pub use logic::{process_input, step_snake, SnakeInput};
pub use types::{Direction, Position, SnakeGame, GRID_SIZE, TICK_INTERVAL_MS};
