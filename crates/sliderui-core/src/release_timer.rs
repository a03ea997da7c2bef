//! Deferred deactivation of the drag-active flag.
//!
//! After release the slider keeps its expanded look for a fixed delay and
//! then collapses. This is a single cancellable deadline:
//! - Scheduled on pointer-up
//! - Cancelled by the next pointer-down
//! - Fired at most once by [`ReleaseTimer::tick`]
//!
//! The host drives time, either by calling `tick` from its event loop or by
//! using [`ReleaseTimer::deadline`] for `WaitUntil` scheduling.

use web_time::{Duration, Instant};

use crate::gesture_constants::RELEASE_LINGER;

#[derive(Debug, Clone, Copy)]
pub struct ReleaseTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl ReleaseTimer {
    pub const fn new() -> Self {
        Self::with_delay(RELEASE_LINGER)
    }

    pub const fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arms the timer relative to `now`, replacing any pending deadline.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drops the pending deadline. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fires the timer if its deadline has passed.
    /// Returns `true` exactly once per scheduled deadline.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for ReleaseTimer {
    fn default() -> Self {
        Self::new()
    }
}
