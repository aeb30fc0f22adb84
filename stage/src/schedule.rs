//! Cancellable schedule of delayed actions against one monotonic clock.
//!
//! DESIGN
//! ======
//! Timed behaviour (reveal stages, the proceed delay) is modelled as data
//! rather than as host timers: each entry is `(due, action)` relative to an
//! origin, and the host polls [`Schedule::due`] with the current time. One
//! [`Schedule::cancel_all`] switch guarantees nothing fires afterwards, so no
//! stale callback can touch state that has already been torn down.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

/// Handle returned by [`Schedule::at`], used to cancel a single entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Clone, Debug, PartialEq)]
struct Entry<A> {
    due_ms: f64,
    handle: TimerHandle,
    action: A,
}

/// Ordered pending actions.
#[derive(Clone, Debug, PartialEq)]
pub struct Schedule<A> {
    origin_ms: f64,
    /// Sorted by `(due_ms, handle)` so equal due times fire in insertion order.
    entries: Vec<Entry<A>>,
    next_handle: u64,
    cancelled: bool,
}

impl<A> Schedule<A> {
    /// Empty schedule whose delays are measured from `origin_ms`.
    #[must_use]
    pub fn new(origin_ms: f64) -> Self {
        Self { origin_ms, entries: Vec::new(), next_handle: 0, cancelled: false }
    }

    #[must_use]
    pub fn origin_ms(&self) -> f64 {
        self.origin_ms
    }

    /// Queue `action` at `origin + delay_ms`.
    ///
    /// Returns `None` once the schedule has been cancelled.
    pub fn at(&mut self, delay_ms: f64, action: A) -> Option<TimerHandle> {
        if self.cancelled {
            return None;
        }
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        let due_ms = self.origin_ms + delay_ms.max(0.0);
        let index = self.entries.partition_point(|e| e.due_ms <= due_ms);
        self.entries.insert(index, Entry { due_ms, handle, action });
        Some(handle)
    }

    /// Drop one pending entry. Returns whether it was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    /// Drop everything and refuse new entries.
    pub fn cancel_all(&mut self) {
        self.cancelled = true;
        self.entries.clear();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Remove and return every action due at or before `now_ms`, in order.
    pub fn due(&mut self, now_ms: f64) -> Vec<A> {
        if self.cancelled {
            return Vec::new();
        }
        let split = self.entries.partition_point(|e| e.due_ms <= now_ms);
        self.entries.drain(..split).map(|e| e.action).collect()
    }

    /// Absolute time of the next pending entry.
    #[must_use]
    pub fn next_due_ms(&self) -> Option<f64> {
        self.entries.first().map(|e| e.due_ms)
    }

    /// Number of entries still pending.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }
}
