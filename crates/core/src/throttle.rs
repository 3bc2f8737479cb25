use std::time::{Duration, Instant};

/// Trailing-edge rate limiter.
///
/// The first offer opens a window; later offers inside it replace the
/// pending value. Once the window has elapsed `poll` hands out the last
/// value exactly once. Time is passed in, so callers drive it from their
/// own event loop (or a test clock).
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    window: Duration,
    opened: Option<Instant>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            opened: None,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn offer(&mut self, value: T, now: Instant) {
        if self.opened.is_none() {
            self.opened = Some(now);
        }
        self.pending = Some(value);
    }

    /// When the pending value becomes due, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.opened.map(|t| t + self.window)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.deadline()?;
        if now < due {
            return None;
        }
        self.opened = None;
        self.pending.take()
    }

    /// Drops the pending value without delivering it.
    pub fn cancel(&mut self) {
        self.opened = None;
        self.pending = None;
    }
}
