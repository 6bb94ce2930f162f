// SPDX-License-Identifier: MPL-2.0
//! Delayed visibility for loading indicators.
//!
//! [`DelayedVisibility`] turns a logical "busy" flag into a "visible" flag
//! that only turns on once the work has been running for `delay`, and then
//! stays on for at least `min_duration`. Fast operations never flash an
//! indicator, slow ones never show it for a single frame.

use crate::config::{DEFAULT_LOADING_DELAY_MS, DEFAULT_LOADING_MIN_DURATION_MS};
use crate::time::{Clock, SystemClock, TimerId, Timers};
use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

/// Number of visibility events kept when nobody drains them.
const EVENT_BACKLOG: usize = 256;

/// Timing settings of a [`DelayedVisibility`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityConfig {
    /// How long work must run before the indicator appears.
    pub delay: Duration,
    /// Minimum time the indicator stays up once shown.
    pub min_duration: Duration,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_LOADING_DELAY_MS),
            min_duration: Duration::from_millis(DEFAULT_LOADING_MIN_DURATION_MS),
        }
    }
}

/// Observable state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not busy, nothing shown.
    Idle,
    /// Busy, waiting for the show delay.
    Pending,
    /// Busy and shown.
    Shown,
    /// No longer busy, shown until the minimum duration elapsed.
    Draining,
}

/// Visibility transition recorded by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEvent {
    /// The indicator became visible at the given instant.
    Shown(Instant),
    /// The indicator was hidden at the given instant.
    Hidden(Instant),
}

/// Receives every visibility transition.
pub trait VisibilityListener: Send {
    /// Called with `true` when the indicator appears and `false` when it hides.
    fn apply_visible_state(&mut self, visible: bool);
}

impl<F> VisibilityListener for F
where
    F: FnMut(bool) + Send,
{
    fn apply_visible_state(&mut self, visible: bool) {
        self(visible);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    Show,
    Hide,
}

/// Debounced show/hide state machine.
pub struct DelayedVisibility<C: Clock = SystemClock> {
    config: VisibilityConfig,
    clock: C,
    busy: bool,
    visible: bool,
    shown_at: Option<Instant>,
    show: Option<TimerId>,
    hide: Option<TimerId>,
    timers: Timers<Timer>,
    listener: Option<Box<dyn VisibilityListener>>,
    events: VecDeque<VisibilityEvent>,
}

impl DelayedVisibility<SystemClock> {
    /// Creates an idle controller reading the system clock.
    #[must_use]
    pub fn new(config: VisibilityConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for DelayedVisibility<SystemClock> {
    fn default() -> Self {
        Self::new(VisibilityConfig::default())
    }
}

impl<C: Clock> DelayedVisibility<C> {
    /// Creates an idle controller reading time from `clock`.
    pub fn with_clock(config: VisibilityConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            busy: false,
            visible: false,
            shown_at: None,
            show: None,
            hide: None,
            timers: Timers::new(),
            listener: None,
            events: VecDeque::new(),
        }
    }

    /// Installs the listener notified on every visibility change.
    pub fn set_listener(&mut self, listener: impl VisibilityListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Replaces the timing settings. Already scheduled timers keep their deadlines.
    pub fn configure(&mut self, config: VisibilityConfig) {
        self.config = config;
    }

    /// Returns the current timing settings.
    #[must_use]
    pub fn config(&self) -> VisibilityConfig {
        self.config
    }

    /// Marks work as started.
    ///
    /// The indicator appears after the configured delay. Calling this while
    /// the indicator drains keeps it up without restarting the minimum
    /// display window.
    pub fn start(&mut self) {
        if self.busy {
            return;
        }
        self.busy = true;
        self.cancel_hide();
        if !self.visible {
            let deadline = self.clock.now() + self.config.delay;
            self.show = Some(self.timers.schedule(deadline, Timer::Show));
            tracing::trace!(delay = ?self.config.delay, "loading indicator scheduled");
        }
    }

    /// Marks work as started and shows the indicator without delay.
    pub fn start_immediately(&mut self) {
        self.busy = true;
        self.cancel_hide();
        self.cancel_show();
        if !self.visible {
            let now = self.clock.now();
            self.set_visible(true, now);
        }
    }

    /// Marks work as finished.
    ///
    /// A hidden indicator stays hidden. A visible one is hidden once it has
    /// been up for `min_duration`.
    pub fn stop(&mut self) {
        if !self.busy {
            return;
        }
        self.busy = false;
        self.cancel_show();
        if !self.visible {
            return;
        }

        let now = self.clock.now();
        let elapsed = self
            .shown_at
            .map_or(Duration::ZERO, |shown_at| now.saturating_duration_since(shown_at));
        let remaining = self.config.min_duration.saturating_sub(elapsed);
        if remaining.is_zero() {
            self.set_visible(false, now);
        } else {
            self.hide = Some(self.timers.schedule(now + remaining, Timer::Hide));
            tracing::trace!(?remaining, "loading indicator draining");
        }
    }

    /// Returns to idle without notifying the listener.
    pub fn reset(&mut self) {
        self.timers.clear();
        self.show = None;
        self.hide = None;
        self.busy = false;
        self.visible = false;
        self.shown_at = None;
    }

    /// Fires due show/hide timers at their own deadlines.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        while let Some(fired) = self.timers.pop_due(now) {
            match fired.key {
                Timer::Show => {
                    self.show = None;
                    if self.busy && !self.visible {
                        self.set_visible(true, fired.deadline);
                    }
                }
                Timer::Hide => {
                    self.hide = None;
                    if !self.busy && self.visible {
                        self.set_visible(false, fired.deadline);
                    }
                }
            }
        }
    }

    /// Returns when [`tick`](Self::tick) next has work, if ever.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Returns whether work is in progress.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Returns whether the listener was last told `true`.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// When the indicator was last shown, if it is visible.
    #[must_use]
    pub fn shown_at(&self) -> Option<Instant> {
        self.shown_at
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.busy, self.visible) {
            (false, false) => Phase::Idle,
            (true, false) => Phase::Pending,
            (true, true) => Phase::Shown,
            (false, true) => Phase::Draining,
        }
    }

    /// Drains recorded visibility transitions.
    pub fn take_events(&mut self) -> Vec<VisibilityEvent> {
        self.events.drain(..).collect()
    }

    /// Returns the clock this controller reads.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn set_visible(&mut self, visible: bool, at: Instant) {
        self.visible = visible;
        self.shown_at = visible.then_some(at);
        let event = if visible {
            VisibilityEvent::Shown(at)
        } else {
            VisibilityEvent::Hidden(at)
        };
        if self.events.len() >= EVENT_BACKLOG {
            self.events.pop_front();
        }
        self.events.push_back(event);
        tracing::debug!(visible, "loading indicator visibility changed");

        if let Some(listener) = self.listener.as_mut() {
            listener.apply_visible_state(visible);
        }
    }

    fn cancel_show(&mut self) {
        if let Some(id) = self.show.take() {
            self.timers.cancel(id);
        }
    }

    fn cancel_hide(&mut self) {
        if let Some(id) = self.hide.take() {
            self.timers.cancel(id);
        }
    }
}

impl<C: Clock> fmt::Debug for DelayedVisibility<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelayedVisibility")
            .field("config", &self.config)
            .field("phase", &self.phase())
            .field("shown_at", &self.shown_at)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;
    use std::sync::{Arc, Mutex};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn controller(delay: u64, min: u64) -> (DelayedVisibility<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let config = VisibilityConfig {
            delay: ms(delay),
            min_duration: ms(min),
        };
        (DelayedVisibility::with_clock(config, clock.clone()), clock)
    }

    fn advance(controller: &mut DelayedVisibility<ManualClock>, clock: &ManualClock, by: u64) {
        clock.advance(ms(by));
        controller.tick();
    }

    fn recording_listener(
        controller: &mut DelayedVisibility<ManualClock>,
    ) -> Arc<Mutex<Vec<bool>>> {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        controller.set_listener(move |visible| sink.lock().unwrap().push(visible));
        calls
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = VisibilityConfig::default();
        assert_eq!(config.delay, ms(400));
        assert_eq!(config.min_duration, ms(200));
    }

    #[test]
    fn fast_operation_never_shows() {
        let (mut controller, clock) = controller(100, 200);
        let calls = recording_listener(&mut controller);

        controller.start();
        assert_eq!(controller.phase(), Phase::Pending);
        advance(&mut controller, &clock, 50);
        controller.stop();
        advance(&mut controller, &clock, 1000);

        assert!(!controller.is_visible());
        assert!(calls.lock().unwrap().is_empty());
        assert!(controller.next_deadline().is_none());
    }

    #[test]
    fn slow_operation_shows_after_delay() {
        let (mut controller, clock) = controller(100, 200);
        controller.start();

        advance(&mut controller, &clock, 99);
        assert!(!controller.is_visible());
        advance(&mut controller, &clock, 1);
        assert!(controller.is_visible());
        assert_eq!(controller.phase(), Phase::Shown);
    }

    #[test]
    fn minimum_duration_holds_indicator() {
        let (mut controller, clock) = controller(100, 200);
        let calls = recording_listener(&mut controller);
        controller.start();
        advance(&mut controller, &clock, 100);

        advance(&mut controller, &clock, 50);
        controller.stop();
        assert_eq!(controller.phase(), Phase::Draining);

        advance(&mut controller, &clock, 149);
        assert!(controller.is_visible());
        advance(&mut controller, &clock, 1);
        assert!(!controller.is_visible());
        assert_eq!(*calls.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn stop_after_minimum_hides_immediately() {
        let (mut controller, clock) = controller(100, 200);
        controller.start();
        advance(&mut controller, &clock, 100);
        advance(&mut controller, &clock, 500);

        controller.stop();
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(controller.next_deadline().is_none());
    }

    #[test]
    fn restart_while_draining_keeps_shown_at() {
        let (mut controller, clock) = controller(100, 200);
        let calls = recording_listener(&mut controller);
        controller.start();
        advance(&mut controller, &clock, 100);
        let shown_at = controller.shown_at();

        advance(&mut controller, &clock, 50);
        controller.stop();
        advance(&mut controller, &clock, 10);
        controller.start();

        assert_eq!(controller.phase(), Phase::Shown);
        assert_eq!(controller.shown_at(), shown_at);
        advance(&mut controller, &clock, 1000);
        assert!(controller.is_visible());
        assert_eq!(*calls.lock().unwrap(), vec![true]);
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let (mut controller, clock) = controller(100, 0);
        controller.start();
        advance(&mut controller, &clock, 60);
        controller.start();
        advance(&mut controller, &clock, 40);
        assert!(controller.is_visible(), "second start must not push the delay back");

        controller.stop();
        controller.stop();
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.take_events().len(), 2);
    }

    #[test]
    fn start_immediately_shows_at_once() {
        let (mut controller, clock) = controller(400, 200);
        let calls = recording_listener(&mut controller);
        controller.start_immediately();
        assert!(controller.is_visible());
        assert_eq!(controller.shown_at(), Some(clock.now()));
        assert_eq!(*calls.lock().unwrap(), vec![true]);
    }

    #[test]
    fn reset_is_silent() {
        let (mut controller, clock) = controller(100, 200);
        controller.start();
        advance(&mut controller, &clock, 100);
        let calls = recording_listener(&mut controller);

        controller.reset();
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(controller.shown_at().is_none());
        assert!(controller.next_deadline().is_none());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn late_tick_uses_timer_deadlines() {
        let (mut controller, clock) = controller(100, 200);
        let start = clock.now();
        controller.start();
        advance(&mut controller, &clock, 250);

        assert_eq!(controller.shown_at(), Some(start + ms(100)));
        controller.stop();
        // Shown for 150ms already, 50ms left.
        assert_eq!(controller.next_deadline(), Some(start + ms(300)));
    }

    #[test]
    fn events_record_transition_instants() {
        let (mut controller, clock) = controller(0, 0);
        let start = clock.now();
        controller.start();
        advance(&mut controller, &clock, 5);
        controller.stop();

        assert_eq!(
            controller.take_events(),
            vec![
                VisibilityEvent::Shown(start),
                VisibilityEvent::Hidden(start + ms(5))
            ]
        );
        assert!(controller.take_events().is_empty());
    }
}
