//! Single cancellable dismissal timer
//!
//! Deadline based: the event loop polls with the current instant and the
//! timer hands back its payload once the deadline has passed. Scheduling
//! always replaces the pending timer.

use std::time::{Duration, Instant};

/// Identifies one scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct PendingTimer<T> {
    handle: TimerHandle,
    deadline: Instant,
    on_fire: T,
}

/// Holds zero or one pending timer carrying an `on_fire` payload
#[derive(Debug, Clone)]
pub struct TimerService<T> {
    pending: Option<PendingTimer<T>>,
    next_id: u64,
}

impl<T> Default for TimerService<T> {
    fn default() -> Self {
        Self {
            pending: None,
            next_id: 0,
        }
    }
}

impl<T> TimerService<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a timer that fires `delay` after `now`, cancelling any pending one
    pub fn schedule(&mut self, now: Instant, delay: Duration, on_fire: T) -> TimerHandle {
        if let Some(prev) = self.pending.take() {
            tracing::trace!(handle = prev.handle.0, "Replacing pending timer");
        }

        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending = Some(PendingTimer {
            handle,
            deadline: now + delay,
            on_fire,
        });
        handle
    }

    /// Drop the pending timer, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(timer) => {
                tracing::trace!(handle = timer.handle.0, "Cancelled timer");
                true
            }
            None => false,
        }
    }

    /// Take the payload if the deadline has been reached
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(timer) if now >= timer.deadline => self.pending.take().map(|t| t.on_fire),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|t| t.deadline)
    }
}
