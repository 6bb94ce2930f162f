// SPDX-License-Identifier: MPL-2.0
//! Deadline table with cancelable entries.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

/// Handle returned by [`Timers::schedule`], used to cancel the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A timer that reached its deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<K> {
    /// The instant the timer was scheduled for.
    pub deadline: Instant,
    /// The payload given at scheduling time.
    pub key: K,
}

/// Pending timers ordered by deadline.
///
/// Timers sharing a deadline fire in scheduling order.
#[derive(Debug)]
pub struct Timers<K> {
    queue: BTreeMap<(Instant, TimerId), K>,
    deadlines: HashMap<TimerId, Instant>,
    next_id: u64,
}

impl<K> Default for Timers<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Timers<K> {
    /// Creates an empty timer table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
            next_id: 0,
        }
    }

    /// Schedules `key` to fire at `deadline`.
    pub fn schedule(&mut self, deadline: Instant, key: K) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.queue.insert((deadline, id), key);
        self.deadlines.insert(id, deadline);
        id
    }

    /// Cancels a timer, returning its payload if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<K> {
        let deadline = self.deadlines.remove(&id)?;
        self.queue.remove(&(deadline, id))
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Removes and returns the earliest timer whose deadline is at or
    /// before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<Fired<K>> {
        let (&(deadline, _), _) = self.queue.first_key_value()?;
        if deadline > now {
            return None;
        }
        let ((deadline, id), key) = self.queue.pop_first()?;
        self.deadlines.remove(&id);
        Some(Fired { deadline, key })
    }

    /// Returns whether `id` is still pending.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if no timer is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.deadlines.clear();
    }
}
