//! core/poll.rs
//! Cancellable fixed-interval task, driven by the host clock.
//!
//! The host calls `due(now)` from its own timer; a stopped task never fires.
//! Missed intervals are collapsed into a single sample. An interval too large
//! to schedule leaves the task stopped.

use std::time::{Duration, Instant};

use log::warn;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone)]
pub struct PollTask {
    interval: Duration,
    next_due: Option<Instant>,
}

impl PollTask {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// First sample is one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = now.checked_add(self.interval);
        if self.next_due.is_none() {
            warn!("poll interval {:?} cannot be scheduled; polling stays off", self.interval);
        }
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn due(&mut self, now: Instant) -> bool {
        let Some(next) = self.next_due else {
            return false;
        };
        if now < next {
            return false;
        }

        let mut next = next;
        while next <= now {
            match next.checked_add(self.interval) {
                Some(later) if !self.interval.is_zero() => next = later,
                _ => {
                    self.next_due = None;
                    return true;
                }
            }
        }
        self.next_due = Some(next);
        true
    }
}

impl Default for PollTask {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}
