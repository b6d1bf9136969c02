//! Cancellable delayed callbacks on a virtual clock.
//!
//! The queue never reads the wall clock. Its owner advances time explicitly,
//! and due entries are handed back one at a time in deadline order, so every
//! firing is serialized with the owner's other mutations. A cancelled entry
//! is removed from the queue and cannot fire.

use std::collections::BTreeMap;
use std::time::Duration;

/// Identifies one scheduled entry.
///
/// Handles are never reused, so cancelling a handle that already fired or was
/// already cancelled is a harmless no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    id: u64,
    deadline: Duration,
}

impl TimerHandle {
    /// Offset from queue start at which this entry is due.
    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

#[derive(Debug)]
pub struct TimerQueue<E> {
    now: Duration,
    next_id: u64,
    // Keyed by (deadline, id): deadline order, ties in scheduling order.
    pending: BTreeMap<(Duration, u64), E>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `event` to come due `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, event: E) -> TimerHandle {
        let handle = TimerHandle {
            id: self.next_id,
            deadline: self.now + delay,
        };
        self.next_id += 1;
        self.pending.insert((handle.deadline, handle.id), event);
        handle
    }

    /// Remove a pending entry. Returns its event if it had not fired yet.
    pub fn cancel(&mut self, handle: TimerHandle) -> Option<E> {
        self.pending.remove(&(handle.deadline, handle.id))
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.contains_key(&(handle.deadline, handle.id))
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Earliest deadline still pending.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Pop the earliest entry due at or before `until`, moving the clock to
    /// its deadline. Returns `None` once nothing more is due.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerHandle, E)> {
        let (&(deadline, id), _) = self.pending.iter().next()?;
        if deadline > until {
            return None;
        }
        let event = self.pending.remove(&(deadline, id))?;
        if deadline > self.now {
            self.now = deadline;
        }
        Some((TimerHandle { id, deadline }, event))
    }

    /// Move the clock forward. Time never runs backwards.
    ///
    /// Call after draining [`pop_due`](Self::pop_due) for the same instant;
    /// entries left behind the clock still fire on the next drain.
    pub fn set_now(&mut self, now: Duration) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Drop every pending entry. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }
}
