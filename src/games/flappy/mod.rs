//! Flappy Bird: free-running per-frame game.

pub mod logic;
pub mod types;

pub use logic::{frame_flappy, process_input, FlappyInput};
pub use types::{
    Bird, FlappyGame, Pipe, AREA_HEIGHT, AREA_WIDTH, FRAME_INTERVAL_MS, PIPE_GAP, PIPE_WIDTH,
};
