// SPDX-License-Identifier: MPL-2.0
//! Runtime configuration of the notification queue.

use super::notification::Kind;
use crate::config::{
    DEFAULT_ANIMATION_DURATION_MS, DEFAULT_DUPLICATE_THRESHOLD_MS, DEFAULT_ERROR_DURATION_MS,
    DEFAULT_INFO_DURATION_MS, DEFAULT_SUCCESS_DURATION_MS, DEFAULT_WARNING_DURATION_MS,
};
use crate::domain::ui::MaxVisible;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Screen corner or edge where toasts are stacked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    TopRight,
    TopLeft,
    TopCenter,
    BottomRight,
    BottomLeft,
    BottomCenter,
}

impl Position {
    /// Returns whether toasts stack from the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopRight | Position::TopLeft | Position::TopCenter
        )
    }
}

/// Default auto-dismiss delay per kind. Zero means manual dismiss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindDurations {
    pub success: Duration,
    pub error: Duration,
    pub warning: Duration,
    pub info: Duration,
}

impl KindDurations {
    /// Returns the duration configured for `kind`.
    #[must_use]
    pub fn get(&self, kind: Kind) -> Duration {
        match kind {
            Kind::Success => self.success,
            Kind::Error => self.error,
            Kind::Warning => self.warning,
            Kind::Info => self.info,
        }
    }
}

impl Default for KindDurations {
    fn default() -> Self {
        Self {
            success: Duration::from_millis(DEFAULT_SUCCESS_DURATION_MS),
            error: Duration::from_millis(DEFAULT_ERROR_DURATION_MS),
            warning: Duration::from_millis(DEFAULT_WARNING_DURATION_MS),
            info: Duration::from_millis(DEFAULT_INFO_DURATION_MS),
        }
    }
}

/// Effective queue settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueConfig {
    /// Maximum number of notifications on screen at once.
    pub max_visible: MaxVisible,
    /// Where the toast stack is anchored.
    pub position: Position,
    /// Default auto-dismiss delay per kind.
    pub durations: KindDurations,
    /// Identical messages closer together than this are suppressed.
    pub duplicate_threshold: Duration,
    /// How long a dismissed notification keeps its slot before removal.
    pub animation_duration: Duration,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            max_visible: MaxVisible::default(),
            position: Position::default(),
            durations: KindDurations::default(),
            duplicate_threshold: Duration::from_millis(DEFAULT_DUPLICATE_THRESHOLD_MS),
            animation_duration: Duration::from_millis(DEFAULT_ANIMATION_DURATION_MS),
        }
    }
}

impl QueueConfig {
    /// Overwrites every field set in `options`, leaving the others untouched.
    pub fn apply(&mut self, options: &QueueOptions) {
        if let Some(max_visible) = options.max_visible {
            self.max_visible = MaxVisible::new(max_visible);
        }
        if let Some(position) = options.position {
            self.position = position;
        }
        for kind in Kind::ALL {
            if let Some(duration) = options.duration(kind) {
                match kind {
                    Kind::Success => self.durations.success = duration,
                    Kind::Error => self.durations.error = duration,
                    Kind::Warning => self.durations.warning = duration,
                    Kind::Info => self.durations.info = duration,
                }
            }
        }
        if let Some(threshold) = options.duplicate_threshold {
            self.duplicate_threshold = threshold;
        }
        if let Some(animation) = options.animation_duration {
            self.animation_duration = animation;
        }
    }
}

/// Partial update for [`QueueConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueOptions {
    pub max_visible: Option<usize>,
    pub position: Option<Position>,
    pub success_duration: Option<Duration>,
    pub error_duration: Option<Duration>,
    pub warning_duration: Option<Duration>,
    pub info_duration: Option<Duration>,
    pub duplicate_threshold: Option<Duration>,
    pub animation_duration: Option<Duration>,
}

impl QueueOptions {
    /// Returns the duration override for `kind`, if any.
    #[must_use]
    pub fn duration(&self, kind: Kind) -> Option<Duration> {
        match kind {
            Kind::Success => self.success_duration,
            Kind::Error => self.error_duration,
            Kind::Warning => self.warning_duration,
            Kind::Info => self.info_duration,
        }
    }
}
