// SPDX-License-Identifier: MPL-2.0
//! Full-window loading overlay.
//!
//! The overlay wraps a [`DelayedVisibility`] and adds a message plus an exit
//! animation window: once the controller hides, the overlay stays rendered
//! (fading out) for `exit_animation` before it is fully hidden.

use super::controller::{DelayedVisibility, VisibilityConfig, VisibilityEvent, VisibilityListener};
use crate::config::DEFAULT_OVERLAY_EXIT_MS;
use crate::time::{Clock, SystemClock};
use std::time::{Duration, Instant};

/// Rendering phase of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Hidden,
    Visible,
    /// Fading out after the controller hid it.
    Exiting,
}

/// Settings of a [`LoadingOverlay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayConfig {
    /// Delay and minimum display time of the overlay.
    pub visibility: VisibilityConfig,
    /// How long the overlay fades out after hiding.
    pub exit_animation: Duration,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            visibility: VisibilityConfig::default(),
            exit_animation: Duration::from_millis(DEFAULT_OVERLAY_EXIT_MS),
        }
    }
}

/// A message-bearing loading overlay with flicker suppression.
#[derive(Debug)]
pub struct LoadingOverlay<C: Clock = SystemClock> {
    controller: DelayedVisibility<C>,
    message: String,
    exit_animation: Duration,
    exit_deadline: Option<Instant>,
}

impl LoadingOverlay<SystemClock> {
    /// Creates a hidden overlay reading the system clock.
    #[must_use]
    pub fn new(config: OverlayConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for LoadingOverlay<SystemClock> {
    fn default() -> Self {
        Self::new(OverlayConfig::default())
    }
}

impl<C: Clock> LoadingOverlay<C> {
    /// Creates a hidden overlay reading time from `clock`.
    pub fn with_clock(config: OverlayConfig, clock: C) -> Self {
        Self {
            controller: DelayedVisibility::with_clock(config.visibility, clock),
            message: String::new(),
            exit_animation: config.exit_animation,
            exit_deadline: None,
        }
    }

    /// Installs a listener on the underlying controller.
    pub fn set_listener(&mut self, listener: impl VisibilityListener + 'static) {
        self.controller.set_listener(listener);
    }

    /// Replaces the settings. A running exit animation keeps its deadline.
    pub fn configure(&mut self, config: OverlayConfig) {
        self.controller.configure(config.visibility);
        self.exit_animation = config.exit_animation;
    }

    /// Shows the overlay after the show delay.
    ///
    /// If it is already up only the message changes. If it is fading out it
    /// comes back at once rather than disappearing and reappearing.
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = message.into();
        if self.exit_deadline.take().is_some() {
            self.controller.start_immediately();
        } else {
            self.controller.start();
        }
        self.sync();
    }

    /// Shows the overlay without delay.
    pub fn show_now(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.exit_deadline = None;
        self.controller.start_immediately();
        self.sync();
    }

    /// Hides the overlay once its minimum display time elapsed.
    pub fn hide(&mut self) {
        self.controller.stop();
        self.sync();
    }

    /// Fires due timers.
    pub fn tick(&mut self) {
        self.controller.tick();
        self.sync();
        if let Some(deadline) = self.exit_deadline {
            if deadline <= self.controller.clock().now() {
                self.exit_deadline = None;
                self.message.clear();
                tracing::debug!("loading overlay hidden");
            }
        }
    }

    /// Returns when [`tick`](Self::tick) next has work, if ever.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.controller.next_deadline(), self.exit_deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Returns the render phase.
    #[must_use]
    pub fn phase(&self) -> OverlayPhase {
        if self.controller.is_visible() {
            OverlayPhase::Visible
        } else if self.exit_deadline.is_some() {
            OverlayPhase::Exiting
        } else {
            OverlayPhase::Hidden
        }
    }

    /// Returns whether the overlay is rendered, including while it fades out.
    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.phase() != OverlayPhase::Hidden
    }

    /// Returns the text shown under the spinner.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the underlying visibility controller.
    #[must_use]
    pub fn controller(&self) -> &DelayedVisibility<C> {
        &self.controller
    }

    /// Starts the exit window when the controller reports a hide.
    fn sync(&mut self) {
        for event in self.controller.take_events() {
            match event {
                VisibilityEvent::Shown(_) => self.exit_deadline = None,
                VisibilityEvent::Hidden(at) => {
                    self.exit_deadline = Some(at + self.exit_animation);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn overlay() -> (LoadingOverlay<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let config = OverlayConfig {
            visibility: VisibilityConfig {
                delay: ms(100),
                min_duration: ms(200),
            },
            exit_animation: ms(300),
        };
        (LoadingOverlay::with_clock(config, clock.clone()), clock)
    }

    fn advance(overlay: &mut LoadingOverlay<ManualClock>, clock: &ManualClock, by: u64) {
        clock.advance(ms(by));
        overlay.tick();
    }

    #[test]
    fn show_is_delayed() {
        let (mut overlay, clock) = overlay();
        overlay.show("Saving...");
        assert_eq!(overlay.phase(), OverlayPhase::Hidden);
        assert_eq!(overlay.message(), "Saving...");

        advance(&mut overlay, &clock, 100);
        assert_eq!(overlay.phase(), OverlayPhase::Visible);
    }

    #[test]
    fn hide_before_delay_never_shows() {
        let (mut overlay, clock) = overlay();
        overlay.show("Saving...");
        advance(&mut overlay, &clock, 50);
        overlay.hide();
        advance(&mut overlay, &clock, 1000);
        assert_eq!(overlay.phase(), OverlayPhase::Hidden);
        assert!(overlay.next_deadline().is_none());
    }

    #[test]
    fn hide_goes_through_exit_window() {
        let (mut overlay, clock) = overlay();
        overlay.show_now("Loading");
        advance(&mut overlay, &clock, 250);
        overlay.hide();
        assert_eq!(overlay.phase(), OverlayPhase::Exiting);
        assert!(overlay.is_showing());

        advance(&mut overlay, &clock, 299);
        assert_eq!(overlay.phase(), OverlayPhase::Exiting);
        assert_eq!(overlay.message(), "Loading");
        advance(&mut overlay, &clock, 1);
        assert_eq!(overlay.phase(), OverlayPhase::Hidden);
        assert!(!overlay.is_showing());
    }

    #[test]
    fn exit_window_follows_minimum_duration() {
        let (mut overlay, clock) = overlay();
        overlay.show_now("Loading");
        overlay.hide();
        assert_eq!(overlay.phase(), OverlayPhase::Visible);

        // Hidden at 200, gone at 500 even with one late tick.
        advance(&mut overlay, &clock, 450);
        assert_eq!(overlay.phase(), OverlayPhase::Exiting);
        advance(&mut overlay, &clock, 50);
        assert_eq!(overlay.phase(), OverlayPhase::Hidden);
    }

    #[test]
    fn show_while_visible_only_updates_message() {
        let (mut overlay, clock) = overlay();
        overlay.show_now("Step 1");
        let shown_at = overlay.controller().shown_at();
        advance(&mut overlay, &clock, 50);
        overlay.show("Step 2");

        assert_eq!(overlay.message(), "Step 2");
        assert_eq!(overlay.controller().shown_at(), shown_at);
    }

    #[test]
    fn show_during_exit_revives_immediately() {
        let (mut overlay, clock) = overlay();
        overlay.show_now("Loading");
        advance(&mut overlay, &clock, 300);
        overlay.hide();
        advance(&mut overlay, &clock, 100);

        overlay.show("Again");
        assert_eq!(overlay.phase(), OverlayPhase::Visible);
        advance(&mut overlay, &clock, 1000);
        assert_eq!(overlay.phase(), OverlayPhase::Visible);
    }
}
