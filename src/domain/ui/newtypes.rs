// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Visible Slot Bounds
// =============================================================================

/// Bounds for the number of concurrently visible notifications.
pub mod max_visible_bounds {
    /// Minimum number of visible slots.
    pub const MIN: usize = 1;
    /// Default number of visible slots.
    pub const DEFAULT: usize = 5;
}

// =============================================================================
// MaxVisible
// =============================================================================

/// Number of notification slots shown at once, guaranteed to be at least 1.
///
/// A queue with zero slots would never show anything and never drain, so
/// out-of-range values are raised to the minimum rather than rejected.
///
/// # Example
///
/// ```
/// use iced_feedback::domain::ui::MaxVisible;
///
/// assert_eq!(MaxVisible::new(3).value(), 3);
/// assert_eq!(MaxVisible::new(0).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaxVisible(usize);

impl MaxVisible {
    /// Creates a new slot count, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.max(max_visible_bounds::MIN))
    }

    /// Returns the slot count.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= max_visible_bounds::MIN
    }
}

impl Default for MaxVisible {
    fn default() -> Self {
        Self(max_visible_bounds::DEFAULT)
    }
}
