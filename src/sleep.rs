//! Sleep/wake signal source
//!
//! The overlay hides itself while the player is idle ("sleeping") and
//! listens for wake signals to cancel its auto-dismiss timer. The controller
//! depends only on the [`SleepBus`] trait; [`SleepTracker`] is the in-process
//! implementation driven by pointer activity and the event loop clock.

use std::fmt;
use std::time::{Duration, Instant};

/// Idle time after which the overlay goes to sleep
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_millis(5_000);

/// Callback invoked on every wake signal
pub type WakeListener = Box<dyn FnMut()>;

/// Identifies one wake subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Interface of the sleep/wake bus
pub trait SleepBus {
    fn is_sleeping(&self) -> bool;

    /// Stay awake for at least `duration` from `now`. Emits a wake signal.
    fn wake(&mut self, now: Instant, duration: Duration);

    fn subscribe(&mut self, listener: WakeListener) -> SubscriptionId;

    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// Idle-timeout based sleep tracking
pub struct SleepTracker {
    idle_timeout: Duration,
    now: Instant,
    awake_until: Instant,
    sleeping: bool,
    listeners: Vec<(SubscriptionId, WakeListener)>,
    next_id: u64,
}

impl fmt::Debug for SleepTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SleepTracker")
            .field("idle_timeout", &self.idle_timeout)
            .field("awake_until", &self.awake_until)
            .field("sleeping", &self.sleeping)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SleepTracker {
    /// Start awake; sleeps once `idle_timeout` passes without activity
    pub fn new(now: Instant, idle_timeout: Duration) -> Self {
        Self {
            idle_timeout,
            now,
            awake_until: now + idle_timeout,
            sleeping: false,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// User interaction (pointer movement, clicks). Wakes and notifies.
    pub fn activity(&mut self, now: Instant) {
        self.now = self.now.max(now);
        self.extend_awake(self.now + self.idle_timeout);
        self.emit_wake();
    }

    /// Advance the clock. Returns true if the sleeping state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.now = self.now.max(now);
        let should_sleep = self.now >= self.awake_until;
        if should_sleep == self.sleeping {
            return false;
        }
        self.sleeping = should_sleep;
        tracing::debug!(sleeping = self.sleeping, "Sleep state changed");
        true
    }

    /// When the tracker will next fall asleep, if awake
    pub fn next_deadline(&self) -> Option<Instant> {
        (!self.sleeping).then_some(self.awake_until)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn extend_awake(&mut self, until: Instant) {
        self.awake_until = self.awake_until.max(until);
        if self.sleeping {
            tracing::debug!("Woke from sleep");
            self.sleeping = false;
        }
    }

    fn emit_wake(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener();
        }
    }
}

impl SleepBus for SleepTracker {
    fn is_sleeping(&self) -> bool {
        self.sleeping
    }

    fn wake(&mut self, now: Instant, duration: Duration) {
        self.now = self.now.max(now);
        self.extend_awake(self.now + duration);
        self.emit_wake();
    }

    fn subscribe(&mut self, listener: WakeListener) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(sub, _)| *sub != id);
    }
}
