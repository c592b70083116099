//! Run orchestration: scheduling and session lifecycle.

pub mod scheduler;
pub mod session;

pub use scheduler::{FrameScheduler, IntervalScheduler, Scheduler};
pub use session::GameSession;
