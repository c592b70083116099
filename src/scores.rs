//! Per-game high scores, persisted as JSON under ~/.arcade/.
//!
//! Field names are the stable storage keys; an absent or unparsable file
//! simply reads as "no prior record" (0) for both games.

use crate::games::GameKind;
use crate::utils::persistence::{load_json_or_default, save_json};
use serde::{Deserialize, Serialize};
use std::io;

pub const HIGH_SCORES_FILE: &str = "high_scores.json";

/// Outcome of a terminated run. Exactly one of these is produced per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Final score strictly beat the stored high score (which was updated).
    NewRecord(u32),
    /// Final score did not beat the stored high score.
    GameOver(u32),
}

impl RunOutcome {
    pub fn score(&self) -> u32 {
        match self {
            Self::NewRecord(score) | Self::GameOver(score) => *score,
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Self::NewRecord(_))
    }
}

/// The persisted high-score table, one integer per game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    #[serde(rename = "snakeHighScore", default)]
    pub snake: u32,
    #[serde(rename = "flappyHighScore", default)]
    pub flappy: u32,
}

impl HighScores {
    /// Read the stored table, defaulting to zeros if missing or unparsable.
    pub fn load() -> Self {
        load_json_or_default(HIGH_SCORES_FILE)
    }

    pub fn save(&self) -> io::Result<()> {
        save_json(HIGH_SCORES_FILE, self)
    }

    pub fn get(&self, kind: GameKind) -> u32 {
        match kind {
            GameKind::Snake => self.snake,
            GameKind::Flappy => self.flappy,
        }
    }

    /// Record a finished run: updates the stored value iff the score is
    /// strictly greater, and reports which of the two banner states applies.
    pub fn record(&mut self, kind: GameKind, score: u32) -> RunOutcome {
        let best = match kind {
            GameKind::Snake => &mut self.snake,
            GameKind::Flappy => &mut self.flappy,
        };
        if score > *best {
            *best = score;
            RunOutcome::NewRecord(score)
        } else {
            RunOutcome::GameOver(score)
        }
    }
}
