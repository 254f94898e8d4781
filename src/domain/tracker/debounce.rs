//! Deadline-based debouncing
//!
//! Coalesces rapid repeated triggers into one evaluation after a quiet
//! period. The clock is passed in by the caller, so behavior is
//! deterministic and the handle has an explicit cancellation path for
//! teardown.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Debouncer {
            interval,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the deadline at `now + interval`. A later trigger
    /// replaces a pending one; it never aborts an evaluation already taken.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// True once per armed deadline, as soon as `now` has reached it.
    /// Clears the deadline on firing.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
