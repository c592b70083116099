//! The arcade games: Snake and Flappy Bird.
//!
//! Each game keeps its data model in `types.rs` and its pure state updater
//! in `logic.rs`; schedulers and rendering live elsewhere so the updaters
//! stay deterministic and unit-testable.

pub mod flappy;
pub mod snake;

pub use flappy::FlappyGame;
pub use snake::SnakeGame;

use rand::Rng;

/// Which game a run belongs to. Also selects the scheduler flavor and the
/// persisted high-score slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Snake,
    Flappy,
}

impl GameKind {
    pub const ALL: [GameKind; 2] = [GameKind::Snake, GameKind::Flappy];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Snake => "Snake",
            Self::Flappy => "Flappy Bird",
        }
    }
}

/// A currently active game. Only one runs at a time per session.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    Snake(SnakeGame),
    Flappy(FlappyGame),
}

impl ActiveGame {
    pub fn new<R: Rng>(kind: GameKind, rng: &mut R) -> Self {
        match kind {
            GameKind::Snake => Self::Snake(SnakeGame::new(rng)),
            GameKind::Flappy => Self::Flappy(FlappyGame::new(rng)),
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            Self::Snake(_) => GameKind::Snake,
            Self::Flappy(_) => GameKind::Flappy,
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            Self::Snake(game) => game.score,
            Self::Flappy(game) => game.score,
        }
    }

    pub fn is_over(&self) -> bool {
        match self {
            Self::Snake(game) => game.game_over,
            Self::Flappy(game) => game.game_over,
        }
    }
}
