// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts, suppresses duplicates and manages
//! auto-dismiss and exit-animation timers against an injected [`Clock`].

use super::config::{QueueConfig, QueueOptions};
use super::dedup::DuplicateFilter;
use super::notification::{Kind, Notification, NotificationId, Request, State};
use crate::time::{Clock, SystemClock, TimerId, Timers};
use std::collections::VecDeque;
use std::fmt;
use std::time::Instant;

/// Number of lifecycle events kept when nobody drains them.
const EVENT_BACKLOG: usize = 256;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Dismiss the most recent dismissible notification (Escape key).
    DismissLatest,
    /// Fire timers that reached their deadline.
    Tick,
}

/// Lifecycle transitions, in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A notification took a visible slot.
    Shown(NotificationId),
    /// A visible notification started its exit animation.
    Dismissing(NotificationId),
    /// A shown notification left its slot.
    Removed(NotificationId),
    /// A pending notification was dropped before ever being shown.
    Cancelled(NotificationId),
}

/// Rendering layer hook.
pub trait Presenter: Send {
    /// Called when a notification becomes visible.
    fn present(&mut self, notification: &Notification);
    /// Called when a shown notification has been removed.
    fn retire(&mut self, notification: &Notification);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    AutoDismiss(NotificationId),
    Remove(NotificationId),
}

#[derive(Debug)]
struct Slot {
    notification: Notification,
    auto_dismiss: Option<TimerId>,
}

/// Manages the notification queue and visible notifications.
pub struct Manager<C: Clock = SystemClock> {
    config: QueueConfig,
    clock: C,
    /// Notifications holding a slot (visible or dismissing), oldest first.
    active: Vec<Slot>,
    /// Notifications waiting for a slot, in arrival order.
    queue: VecDeque<Notification>,
    recent: DuplicateFilter,
    timers: Timers<Timer>,
    next_id: u64,
    presenter: Option<Box<dyn Presenter>>,
    events: VecDeque<Event>,
}

impl Manager<SystemClock> {
    /// Creates a new empty notification manager with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(QueueConfig::default(), SystemClock)
    }
}

impl Default for Manager<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Manager<C> {
    /// Creates an empty manager reading time from `clock`.
    pub fn with_clock(config: QueueConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            active: Vec::new(),
            queue: VecDeque::new(),
            recent: DuplicateFilter::new(),
            timers: Timers::new(),
            next_id: 0,
            presenter: None,
            events: VecDeque::new(),
        }
    }

    /// Installs the rendering hook.
    pub fn set_presenter(&mut self, presenter: impl Presenter + 'static) {
        self.presenter = Some(Box::new(presenter));
    }

    /// Updates the settings used for notifications pushed from now on.
    ///
    /// Notifications already accepted keep their durations and timers.
    pub fn configure(&mut self, options: &QueueOptions) {
        self.config.apply(options);
        tracing::debug!(config = ?self.config, "notification queue reconfigured");
    }

    /// Returns the effective settings.
    #[must_use]
    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Returns the clock this manager reads.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If a visible slot is free it is displayed immediately. Otherwise it's
    /// queued and shown when space becomes available.
    ///
    /// Returns `None` without side effects when the message is empty or was
    /// already accepted within the duplicate threshold.
    pub fn push(&mut self, request: Request) -> Option<NotificationId> {
        if request.message().is_empty() {
            tracing::warn!(kind = ?request.kind(), "notification rejected: message is required");
            return None;
        }

        let now = self.clock.now();
        if !self
            .recent
            .admit(request.message(), now, self.config.duplicate_threshold)
        {
            tracing::debug!(message = request.message(), "duplicate notification suppressed");
            return None;
        }

        self.next_id += 1;
        let id = NotificationId::from_raw(self.next_id);
        let default_duration = self.config.durations.get(request.kind());
        let notification = Notification::accept(id, request, default_duration, now);
        tracing::debug!(%id, kind = ?notification.kind(), "notification accepted");

        self.queue.push_back(notification);
        self.promote_from_queue(now);
        Some(id)
    }

    /// Pushes a success notification.
    pub fn success(&mut self, message: impl Into<String>) -> Option<NotificationId> {
        self.push(Request::new(Kind::Success, message))
    }

    /// Pushes an error notification.
    pub fn error(&mut self, message: impl Into<String>) -> Option<NotificationId> {
        self.push(Request::new(Kind::Error, message))
    }

    /// Pushes a warning notification.
    pub fn warning(&mut self, message: impl Into<String>) -> Option<NotificationId> {
        self.push(Request::new(Kind::Warning, message))
    }

    /// Pushes an info notification.
    pub fn info(&mut self, message: impl Into<String>) -> Option<NotificationId> {
        self.push(Request::new(Kind::Info, message))
    }

    /// Dismisses a notification by its ID.
    ///
    /// A visible notification starts its exit animation and frees its slot
    /// once the animation window elapsed. A queued notification is dropped
    /// at once and its dismiss callback is not run, since it was never shown.
    ///
    /// Returns `true` if the notification was found in a dismissable state.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let now = self.clock.now();
        self.dismiss_at(id, now)
    }

    /// Dismisses the most recently shown notification the user may dismiss.
    pub fn dismiss_latest(&mut self) -> Option<NotificationId> {
        let id = self
            .active
            .iter()
            .rev()
            .map(|slot| &slot.notification)
            .find(|n| n.state() == State::Visible && n.is_dismissible())
            .map(Notification::id)?;
        self.dismiss(id);
        Some(id)
    }

    /// Drops every queued notification and dismisses every visible one.
    pub fn dismiss_all(&mut self) {
        for mut notification in self.queue.drain(..) {
            notification.set_state(State::Removed);
            Self::record(&mut self.events, Event::Cancelled(notification.id()));
        }

        let now = self.clock.now();
        let visible: Vec<NotificationId> = self
            .active
            .iter()
            .filter(|slot| slot.notification.state() == State::Visible)
            .map(|slot| slot.notification.id())
            .collect();
        for id in visible {
            self.dismiss_at(id, now);
        }
    }

    /// Dismisses everything and forgets the duplicate history.
    pub fn teardown(&mut self) {
        self.dismiss_all();
        self.recent.clear();
    }

    /// Fires every timer whose deadline has passed.
    ///
    /// Each timer is handled at its own deadline, so a late tick schedules
    /// follow-up timers exactly as a punctual one would have.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        while let Some(fired) = self.timers.pop_due(now) {
            match fired.key {
                Timer::AutoDismiss(id) => {
                    self.dismiss_at(id, fired.deadline);
                }
                Timer::Remove(id) => self.remove(id, fired.deadline),
            }
        }
    }

    /// Returns the earliest instant at which [`tick`](Self::tick) has work.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Handles a notification message.
    ///
    /// Messages come from the user, so `Dismiss` leaves non-dismissible
    /// notifications alone. [`dismiss`](Self::dismiss) still closes them.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                if self.get(*id).is_some_and(Notification::is_dismissible) {
                    self.dismiss(*id);
                }
            }
            Message::DismissLatest => {
                self.dismiss_latest();
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Drains the recorded lifecycle events.
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.drain(..).collect()
    }

    /// Returns the notifications holding a slot, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter().map(|slot| &slot.notification)
    }

    /// Returns the queued notifications, next to be shown first.
    pub fn pending(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    /// Looks up a visible or queued notification.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.visible()
            .chain(self.queue.iter())
            .find(|n| n.id() == id)
    }

    /// Returns the number of notifications holding a slot.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.active.len()
    }

    /// Returns the number of queued notifications.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns the number of notifications not yet removed.
    #[must_use]
    pub fn count(&self) -> usize {
        self.active.len() + self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty() || !self.queue.is_empty()
    }

    fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> bool {
        if let Some(slot) = self.active.iter_mut().find(|s| s.notification.id() == id) {
            if slot.notification.state() != State::Visible {
                return false;
            }
            if let Some(timer) = slot.auto_dismiss.take() {
                self.timers.cancel(timer);
            }
            slot.notification.set_state(State::Dismissing);
            Self::record(&mut self.events, Event::Dismissing(id));
            tracing::debug!(%id, "notification dismissing");

            let animation = self.config.animation_duration;
            if animation.is_zero() {
                self.remove(id, now);
            } else {
                self.timers.schedule(now + animation, Timer::Remove(id));
            }
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            if let Some(mut notification) = self.queue.remove(pos) {
                notification.set_state(State::Removed);
            }
            Self::record(&mut self.events, Event::Cancelled(id));
            tracing::debug!(%id, "queued notification cancelled");
            return true;
        }

        false
    }

    fn remove(&mut self, id: NotificationId, now: Instant) {
        let Some(pos) = self.active.iter().position(|s| s.notification.id() == id) else {
            return;
        };
        let mut slot = self.active.remove(pos);
        if let Some(timer) = slot.auto_dismiss.take() {
            self.timers.cancel(timer);
        }
        slot.notification.set_state(State::Removed);
        if let Some(presenter) = self.presenter.as_mut() {
            presenter.retire(&slot.notification);
        }
        Self::record(&mut self.events, Event::Removed(id));
        tracing::debug!(%id, "notification removed");

        if let Some(callback) = slot.notification.take_on_dismiss() {
            callback();
        }
        self.promote_from_queue(now);
    }

    /// Promotes queued notifications while there are free slots.
    fn promote_from_queue(&mut self, now: Instant) {
        while self.active.len() < self.config.max_visible.value() {
            let Some(mut notification) = self.queue.pop_front() else {
                break;
            };
            let id = notification.id();
            notification.set_state(State::Visible);
            let auto_dismiss = notification
                .auto_dismiss()
                .map(|after| self.timers.schedule(now + after, Timer::AutoDismiss(id)));
            if let Some(presenter) = self.presenter.as_mut() {
                presenter.present(&notification);
            }
            Self::record(&mut self.events, Event::Shown(id));
            tracing::debug!(%id, "notification shown");

            self.active.push(Slot {
                notification,
                auto_dismiss,
            });
        }
    }

    fn record(events: &mut VecDeque<Event>, event: Event) {
        if events.len() >= EVENT_BACKLOG {
            events.pop_front();
        }
        events.push_back(event);
    }
}

impl<C: Clock> fmt::Debug for Manager<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("config", &self.config)
            .field("active", &self.active)
            .field("queue", &self.queue)
            .field("pending_timers", &self.timers.len())
            .finish_non_exhaustive()
    }
}
