use std::time::{Duration, Instant};

/// One-shot tick timer, re-armed by the host after every tick.
///
/// Never fires at a fixed rate: each deadline is derived from the interval
/// of the state the previous tick produced, so a speed-up applies to the
/// very next tick.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickScheduler {
    deadline: Option<Instant>,
}

impl TickScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the next tick `interval` after `now`, replacing any pending one.
    pub fn arm(&mut self, now: Instant, interval: Duration) {
        self.deadline = Some(now + interval);
    }

    /// Drops the pending tick. Safe to call any number of times.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true when a tick is armed and its deadline has passed.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Consumes a due tick, leaving the scheduler disarmed until re-armed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            return true;
        }
        false
    }

    /// How long the host may block waiting for input before the next tick.
    ///
    /// Returns `idle` when nothing is armed.
    #[must_use]
    pub fn timeout(&self, now: Instant, idle: Duration) -> Duration {
        match self.deadline {
            Some(deadline) => deadline.saturating_duration_since(now),
            None => idle,
        }
    }
}
