//! A single game run: one game, one scheduler, one outcome.
//!
//! The session guards the updater behind the terminal flag, cancels the
//! scheduler on termination and on restart (no orphan loops), and hands the
//! final score to the high-score table exactly once per run.

use super::scheduler::{FrameScheduler, IntervalScheduler, Scheduler};
use crate::games::{flappy, snake, ActiveGame, GameKind};
use crate::scores::{HighScores, RunOutcome};
use rand::Rng;
use std::time::{Duration, Instant};

pub struct GameSession {
    pub game: ActiveGame,
    scheduler: Box<dyn Scheduler>,
    /// Set exactly once, when the run terminates.
    pub outcome: Option<RunOutcome>,
}

impl GameSession {
    /// Start a fresh run of the given game.
    pub fn start<R: Rng>(kind: GameKind, rng: &mut R, now: Instant) -> Self {
        let mut scheduler: Box<dyn Scheduler> = match kind {
            GameKind::Snake => Box::new(IntervalScheduler::new(Duration::from_millis(
                snake::TICK_INTERVAL_MS,
            ))),
            GameKind::Flappy => Box::new(FrameScheduler::new(Duration::from_millis(
                flappy::FRAME_INTERVAL_MS,
            ))),
        };
        scheduler.start(now);
        Self {
            game: ActiveGame::new(kind, rng),
            scheduler,
            outcome: None,
        }
    }

    /// Full reset, valid at any time including mid-run: fresh game state,
    /// cleared outcome, and the previous schedule cancelled before re-arming.
    pub fn restart<R: Rng>(&mut self, rng: &mut R, now: Instant) {
        self.scheduler.cancel();
        self.game = ActiveGame::new(self.game.kind(), rng);
        self.outcome = None;
        self.scheduler.start(now);
    }

    pub fn kind(&self) -> GameKind {
        self.game.kind()
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Run all simulation steps due at `now`. On termination, stops the
    /// scheduler and records the final score against the high-score table.
    /// Returns true if any state changed (a redraw is warranted).
    pub fn advance<R: Rng>(&mut self, now: Instant, rng: &mut R, scores: &mut HighScores) -> bool {
        if self.outcome.is_some() {
            return false;
        }

        let steps = self.scheduler.poll(now);
        let mut changed = false;
        for _ in 0..steps {
            changed |= match &mut self.game {
                ActiveGame::Snake(game) => snake::step_snake(game, rng),
                ActiveGame::Flappy(game) => flappy::frame_flappy(game, rng),
            };
            if self.game.is_over() {
                break;
            }
        }

        if self.game.is_over() {
            self.scheduler.cancel();
            self.outcome = Some(scores.record(self.game.kind(), self.game.score()));
            changed = true;
        }

        changed
    }
}
