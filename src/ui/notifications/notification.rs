// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the [`Request`] builder handed to the queue, the
//! [`Notification`] entity the queue creates from it, and the [`Kind`] enum.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification, allocated by the owning queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(super) fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Notification kind, which determines the default duration and how
/// urgently assistive technology should announce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    /// Operation completed successfully (green, 4s duration).
    Success,
    /// Error requiring attention (red, manual dismiss).
    Error,
    /// Warning that doesn't block operation (orange, 6s duration).
    Warning,
    /// Informational message (blue, 4s duration).
    #[default]
    Info,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Error, Kind::Warning, Kind::Info];

    /// Returns the primary color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Info => palette::INFO_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Error => palette::ERROR_500,
        }
    }

    /// Returns how this kind should be announced.
    #[must_use]
    pub fn politeness(&self) -> Politeness {
        match self {
            Kind::Error | Kind::Warning => Politeness::Assertive,
            Kind::Success | Kind::Info => Politeness::Polite,
        }
    }
}

/// Announcement urgency for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Politeness {
    /// Announced when the user is idle (status region).
    Polite,
    /// Announced immediately (alert region).
    Assertive,
}

/// Lifecycle state of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Accepted but waiting for a free visible slot.
    Pending,
    /// Shown to the user.
    Visible,
    /// Dismissed, still occupying its slot during the exit animation.
    Dismissing,
    /// Gone for good.
    Removed,
}

/// Callback run once after a shown notification has been removed.
pub type DismissCallback = Box<dyn FnOnce() + Send + 'static>;

/// A notification to be handed to the queue.
///
/// # Example
///
/// ```
/// use iced_feedback::ui::notifications::{Kind, Request};
/// use std::time::Duration;
///
/// let request = Request::error("Failed to save")
///     .title("Network Error")
///     .duration(Duration::from_secs(8));
/// assert_eq!(request.kind(), Kind::Error);
/// ```
pub struct Request {
    kind: Kind,
    message: String,
    title: Option<String>,
    duration: Option<Duration>,
    dismissible: bool,
    on_dismiss: Option<DismissCallback>,
}

impl Request {
    /// Creates a request with the given kind and message.
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            title: None,
            duration: None,
            dismissible: true,
            on_dismiss: None,
        }
    }

    /// Creates a success request.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Kind::Success, message)
    }

    /// Creates an error request.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Kind::Error, message)
    }

    /// Creates a warning request.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Kind::Warning, message)
    }

    /// Creates an info request.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Kind::Info, message)
    }

    /// Sets a title shown above the message.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Overrides the kind's default auto-dismiss duration.
    ///
    /// [`Duration::ZERO`] keeps the notification until it is dismissed.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Sets whether the user may dismiss the notification.
    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    /// Registers a callback run once the notification has been removed.
    #[must_use]
    pub fn on_dismiss(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_dismiss = Some(Box::new(callback));
        self
    }

    /// Returns the requested kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("title", &self.title)
            .field("duration", &self.duration)
            .field("dismissible", &self.dismissible)
            .field("on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}

/// A notification accepted by the queue.
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    message: String,
    title: Option<String>,
    auto_dismiss: Option<Duration>,
    dismissible: bool,
    created_at: Instant,
    state: State,
    on_dismiss: Option<DismissCallback>,
}

impl Notification {
    /// Builds the entity for an accepted request.
    ///
    /// `default_duration` applies when the request has no override; a zero
    /// duration from either source means manual dismiss.
    pub(super) fn accept(
        id: NotificationId,
        request: Request,
        default_duration: Duration,
        created_at: Instant,
    ) -> Self {
        let duration = request.duration.unwrap_or(default_duration);
        Self {
            id,
            kind: request.kind,
            message: request.message,
            title: request.title,
            auto_dismiss: (!duration.is_zero()).then_some(duration),
            dismissible: request.dismissible,
            created_at,
            state: State::Pending,
            on_dismiss: request.on_dismiss,
        }
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the auto-dismiss delay, `None` for manual dismiss.
    #[must_use]
    pub fn auto_dismiss(&self) -> Option<Duration> {
        self.auto_dismiss
    }

    /// Returns whether the user may dismiss this notification.
    #[must_use]
    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    /// Returns when the queue accepted this notification.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    pub(super) fn set_state(&mut self, state: State) {
        self.state = state;
    }

    pub(super) fn take_on_dismiss(&mut self) -> Option<DismissCallback> {
        self.on_dismiss.take()
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("title", &self.title)
            .field("auto_dismiss", &self.auto_dismiss)
            .field("dismissible", &self.dismissible)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::config::KindDurations;

    fn accept(request: Request) -> Notification {
        let default = KindDurations::default().get(request.kind());
        Notification::accept(NotificationId::from_raw(1), request, default, Instant::now())
    }

    #[test]
    fn kind_colors_are_distinct() {
        for (i, a) in Kind::ALL.iter().enumerate() {
            for b in &Kind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }

    #[test]
    fn error_kind_has_no_default_auto_dismiss() {
        assert!(accept(Request::error("boom")).auto_dismiss().is_none());
    }

    #[test]
    fn alerts_are_assertive() {
        assert_eq!(Kind::Error.politeness(), Politeness::Assertive);
        assert_eq!(Kind::Warning.politeness(), Politeness::Assertive);
        assert_eq!(Kind::Success.politeness(), Politeness::Polite);
        assert_eq!(Kind::Info.politeness(), Politeness::Polite);
    }

    #[test]
    fn explicit_duration_overrides_kind_default() {
        let notification = accept(Request::error("boom").duration(Duration::from_secs(2)));
        assert_eq!(notification.auto_dismiss(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn zero_duration_means_manual_dismiss() {
        let notification = accept(Request::success("saved").duration(Duration::ZERO));
        assert!(notification.auto_dismiss().is_none());
    }

    #[test]
    fn request_builder_pattern_works() {
        let notification = accept(
            Request::warning("disk almost full")
                .title("Storage")
                .dismissible(false)
                .on_dismiss(|| {}),
        );

        assert_eq!(notification.kind(), Kind::Warning);
        assert_eq!(notification.message(), "disk almost full");
        assert_eq!(notification.title(), Some("Storage"));
        assert!(!notification.is_dismissible());
        assert_eq!(notification.state(), State::Pending);
    }

    #[test]
    fn request_constructors_set_correct_kind() {
        assert_eq!(Request::success("").kind(), Kind::Success);
        assert_eq!(Request::info("").kind(), Kind::Info);
        assert_eq!(Request::warning("").kind(), Kind::Warning);
        assert_eq!(Request::error("").kind(), Kind::Error);
    }

    #[test]
    fn id_display_is_prefixed() {
        assert_eq!(NotificationId::from_raw(7).to_string(), "toast-7");
    }
}
