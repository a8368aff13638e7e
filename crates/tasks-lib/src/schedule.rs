//! Single-slot debounced write scheduling.
//!
//! A [`WriteScheduler`] holds at most one pending write. Scheduling again
//! before it fires replaces the deadline, so a burst of mutations collapses
//! into one write that happens `delay` after the last of them. The scheduler
//! never owns a timer; the host polls it with the current time.

use std::time::Duration;

/// Default quiet period before a pending write fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct WriteScheduler {
    delay_millis: u64,
    due_at: Option<u64>,
}

impl WriteScheduler {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay_millis: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            due_at: None,
        }
    }

    /// Arm (or re-arm) the pending write relative to `now_millis`.
    pub fn schedule(&mut self, now_millis: u64) {
        self.due_at = Some(now_millis.saturating_add(self.delay_millis));
    }

    /// Whether a write is pending and its quiet period has elapsed.
    #[must_use]
    pub fn is_due(&self, now_millis: u64) -> bool {
        self.due_at.is_some_and(|due| now_millis >= due)
    }

    /// Clear and return `true` if the pending write is due.
    pub fn take_if_due(&mut self, now_millis: u64) -> bool {
        if self.is_due(now_millis) {
            self.due_at = None;
            true
        } else {
            false
        }
    }

    /// Clear the pending write regardless of its deadline.
    pub fn take(&mut self) -> bool {
        self.due_at.take().is_some()
    }

    pub fn cancel(&mut self) {
        self.due_at = None;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.due_at.is_some()
    }

    #[must_use]
    pub const fn due_at(&self) -> Option<u64> {
        self.due_at
    }

    #[must_use]
    pub const fn delay_millis(&self) -> u64 {
        self.delay_millis
    }
}

impl Default for WriteScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
