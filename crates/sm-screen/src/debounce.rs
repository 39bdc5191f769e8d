//! A cancellable delayed task driven by caller-supplied time.

use std::time::{Duration, Instant};

/// Holds at most one pending value that becomes due `delay` after it was
/// scheduled.  Scheduling again replaces the pending value and restarts the
/// delay.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay:   Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self, now: Instant, value: T) {
        self.pending = Some((now + self.delay, value));
    }

    /// Drop the pending value; returns it if there was one.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, v)| v)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(at, _)| *at)
    }

    /// Take the pending value once its deadline has been reached.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((at, _)) if now >= *at => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }
}
