//! Idle timer — a single cancelable deadline.
//!
//! Rescheduling replaces the pending deadline, so at most one timeout is
//! outstanding at any time.  The owner polls it with the current time.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct IdleTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl IdleTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Cancel any pending deadline and start a fresh quiet period at `now`.
    /// A delay too long to represent leaves no deadline pending.
    pub fn reschedule(&mut self, now: Instant) {
        self.deadline = now.checked_add(self.delay);
    }

    /// Drop the pending deadline.  Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fire at most once: `true` if the deadline has passed, which also
    /// clears it.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
