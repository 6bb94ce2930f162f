// SPDX-License-Identifier: MPL-2.0
//! Suppression of identical messages arriving in quick succession.
//!
//! Messages are keyed by their raw text, so two logically different
//! notifications with the same wording are indistinguishable here.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Remembers when each message text was last accepted.
#[derive(Debug, Default)]
pub struct DuplicateFilter {
    recent: HashMap<String, Instant>,
}

impl DuplicateFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` and records `now` if `message` was not accepted within
    /// `threshold`; returns `false` for a duplicate.
    ///
    /// Entries older than `threshold` are evicted on every accepted message,
    /// which keeps the map bounded by the number of distinct messages seen
    /// inside one window.
    pub fn admit(&mut self, message: &str, now: Instant, threshold: Duration) -> bool {
        if let Some(&last) = self.recent.get(message) {
            if now.saturating_duration_since(last) < threshold {
                return false;
            }
        }

        self.recent.insert(message.to_owned(), now);
        self.recent
            .retain(|_, seen| now.saturating_duration_since(*seen) <= threshold);
        true
    }

    /// Returns the number of remembered messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    /// Returns true if nothing is remembered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    /// Forgets every message.
    pub fn clear(&mut self) {
        self.recent.clear();
    }
}
