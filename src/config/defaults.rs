// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Visible slots, per-kind durations, dedup window
//! - **Loading**: Show delay, minimum display time, overlay exit animation

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default number of notifications shown at once.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// Default auto-dismiss delay for success notifications (in milliseconds).
pub const DEFAULT_SUCCESS_DURATION_MS: u64 = 4000;

/// Default auto-dismiss delay for error notifications (in milliseconds).
/// Zero means errors stay until dismissed.
pub const DEFAULT_ERROR_DURATION_MS: u64 = 0;

/// Default auto-dismiss delay for warning notifications (in milliseconds).
pub const DEFAULT_WARNING_DURATION_MS: u64 = 6000;

/// Default auto-dismiss delay for info notifications (in milliseconds).
pub const DEFAULT_INFO_DURATION_MS: u64 = 4000;

/// Default length of the dismiss animation window (in milliseconds).
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 300;

/// Default window during which an identical message is suppressed (in milliseconds).
pub const DEFAULT_DUPLICATE_THRESHOLD_MS: u64 = 500;

// ==========================================================================
// Loading Defaults
// ==========================================================================

/// Default delay before a busy state becomes visible (in milliseconds).
pub const DEFAULT_LOADING_DELAY_MS: u64 = 400;

/// Default minimum time a shown loading indicator stays visible (in milliseconds).
pub const DEFAULT_LOADING_MIN_DURATION_MS: u64 = 200;

/// Default exit animation window of the loading overlay (in milliseconds).
pub const DEFAULT_OVERLAY_EXIT_MS: u64 = 300;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MAX_VISIBLE > 0);
    assert!(DEFAULT_WARNING_DURATION_MS >= DEFAULT_SUCCESS_DURATION_MS);
    assert!(DEFAULT_SUCCESS_DURATION_MS == DEFAULT_INFO_DURATION_MS);
    assert!(DEFAULT_ANIMATION_DURATION_MS < DEFAULT_SUCCESS_DURATION_MS);
    assert!(DEFAULT_LOADING_MIN_DURATION_MS < DEFAULT_LOADING_DELAY_MS);
};
