//! Loop drivers for the two games.
//!
//! Snake runs on a fixed-rate timer and Flappy on a free-running frame
//! callback; both are expressed as a `Scheduler` so the updaters stay
//! schedule-agnostic. Polling takes an explicit `Instant`, which lets tests
//! drive time synthetically instead of sleeping.

use std::time::{Duration, Instant};

/// A source of simulation steps. `poll` reports how many steps are due at
/// `now`; after `cancel` it reports zero until the next `start`.
pub trait Scheduler {
    /// Arm the scheduler. A fresh run always calls this, which replaces any
    /// pending schedule from the previous run.
    fn start(&mut self, now: Instant);

    /// Disarm. Steps that were already due but not yet polled are dropped.
    fn cancel(&mut self);

    /// Number of steps due at `now`. Advances the internal deadline.
    fn poll(&mut self, now: Instant) -> u32;

    fn is_running(&self) -> bool;
}

/// Fixed-rate driver (Snake). Missed periods are made up on the next poll,
/// capped so a long stall cannot produce a burst of steps.
pub struct IntervalScheduler {
    period: Duration,
    next_due: Option<Instant>,
    max_catch_up: u32,
}

impl IntervalScheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
            max_catch_up: 5,
        }
    }
}

impl Scheduler for IntervalScheduler {
    fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    fn cancel(&mut self) {
        self.next_due = None;
    }

    fn poll(&mut self, now: Instant) -> u32 {
        let Some(due) = self.next_due else {
            return 0;
        };
        if now < due {
            return 0;
        }

        let missed = (now.duration_since(due).as_nanos() / self.period.as_nanos()) as u32;
        let owed = missed + 1;
        if owed > self.max_catch_up {
            // Drop the backlog and resume from the present
            self.next_due = Some(now + self.period);
            self.max_catch_up
        } else {
            // Stay on the fixed grid
            self.next_due = Some(due + self.period * owed);
            owed
        }
    }

    fn is_running(&self) -> bool {
        self.next_due.is_some()
    }
}

/// Free-running driver (Flappy). At most one step per poll, re-armed
/// relative to the poll time, like a refresh callback that requests the
/// next frame as it finishes.
pub struct FrameScheduler {
    frame: Duration,
    next_due: Option<Instant>,
}

impl FrameScheduler {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            next_due: None,
        }
    }
}

impl Scheduler for FrameScheduler {
    fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.frame);
    }

    fn cancel(&mut self) {
        self.next_due = None;
    }

    fn poll(&mut self, now: Instant) -> u32 {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.frame);
                1
            }
            _ => 0,
        }
    }

    fn is_running(&self) -> bool {
        self.next_due.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(100);

    #[test]
    fn test_interval_not_due_before_period() {
        let start = Instant::now();
        let mut sched = IntervalScheduler::new(PERIOD);
        sched.start(start);

        assert_eq!(sched.poll(start), 0);
        assert_eq!(sched.poll(start + Duration::from_millis(99)), 0);
    }

    #[test]
    fn test_interval_single_step() {
        let start = Instant::now();
        let mut sched = IntervalScheduler::new(PERIOD);
        sched.start(start);

        assert_eq!(sched.poll(start + Duration::from_millis(100)), 1);
        // Same instant again: already consumed
        assert_eq!(sched.poll(start + Duration::from_millis(100)), 0);
    }

    #[test]
    fn test_interval_catch_up() {
        let start = Instant::now();
        let mut sched = IntervalScheduler::new(PERIOD);
        sched.start(start);

        // 350ms late: periods at 100, 200, 300 are all owed
        assert_eq!(sched.poll(start + Duration::from_millis(350)), 3);
        assert_eq!(sched.poll(start + Duration::from_millis(399)), 0);
        assert_eq!(sched.poll(start + Duration::from_millis(400)), 1);
    }

    #[test]
    fn test_interval_catch_up_capped() {
        let start = Instant::now();
        let mut sched = IntervalScheduler::new(PERIOD);
        sched.start(start);

        // A multi-second stall yields the cap, not dozens of steps
        let steps = sched.poll(start + Duration::from_secs(10));
        assert_eq!(steps, 5);
        // Backlog dropped: next step is a full period away
        assert_eq!(sched.poll(start + Duration::from_secs(10)), 0);
        assert_eq!(
            sched.poll(start + Duration::from_secs(10) + PERIOD),
            1
        );
    }

    #[test]
    fn test_cancel_stops_pending_steps() {
        let start = Instant::now();
        let mut sched = IntervalScheduler::new(PERIOD);
        sched.start(start);
        assert!(sched.is_running());

        sched.cancel();

        assert!(!sched.is_running());
        // A step that was already due is dropped, not delivered late
        assert_eq!(sched.poll(start + Duration::from_secs(1)), 0);
    }

    #[test]
    fn test_restart_replaces_schedule() {
        let start = Instant::now();
        let mut sched = IntervalScheduler::new(PERIOD);
        sched.start(start);
        sched.cancel();
        sched.start(start + Duration::from_millis(500));

        assert_eq!(sched.poll(start + Duration::from_millis(550)), 0);
        assert_eq!(sched.poll(start + Duration::from_millis(600)), 1);
    }

    #[test]
    fn test_frame_one_step_per_poll() {
        let start = Instant::now();
        let frame = Duration::from_millis(16);
        let mut sched = FrameScheduler::new(frame);
        sched.start(start);

        // Even arbitrarily late, a frame callback fires once
        assert_eq!(sched.poll(start + Duration::from_secs(2)), 1);
        assert_eq!(sched.poll(start + Duration::from_secs(2)), 0);
    }

    #[test]
    fn test_frame_rearms_from_poll_time() {
        let start = Instant::now();
        let frame = Duration::from_millis(16);
        let mut sched = FrameScheduler::new(frame);
        sched.start(start);

        let late = start + Duration::from_millis(100);
        assert_eq!(sched.poll(late), 1);
        // Next frame is relative to the last poll, not the original grid
        assert_eq!(sched.poll(late + Duration::from_millis(15)), 0);
        assert_eq!(sched.poll(late + Duration::from_millis(16)), 1);
    }

    #[test]
    fn test_frame_cancel() {
        let start = Instant::now();
        let mut sched = FrameScheduler::new(Duration::from_millis(16));
        sched.start(start);
        sched.cancel();

        assert_eq!(sched.poll(start + Duration::from_secs(1)), 0);
        assert!(!sched.is_running());
    }
}
