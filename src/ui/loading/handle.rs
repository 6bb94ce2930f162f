// SPDX-License-Identifier: MPL-2.0
//! Async wrapper running a [`DelayedVisibility`] on the tokio runtime.
//!
//! A driver task sleeps until the controller's next deadline and ticks it,
//! so callers only flip the busy flag (directly or through [`LoadingHandle::wrap`])
//! and the listener sees debounced visibility changes.

use super::controller::{DelayedVisibility, Phase, VisibilityConfig, VisibilityListener};
use crate::time::Clock;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use tokio::sync::Notify;

/// Clock reading tokio's time, which honours paused test time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

#[derive(Debug)]
struct Shared {
    controller: Mutex<DelayedVisibility<TokioClock>>,
    wake: Notify,
    closed: AtomicBool,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, DelayedVisibility<TokioClock>> {
        self.controller
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Cloneable handle to a controller driven by a background task.
///
/// The listener runs with the controller locked: it must not call back
/// into the handle. Dropping the last clone shuts the driver task down.
#[derive(Debug, Clone)]
pub struct LoadingHandle {
    inner: Arc<Inner>,
}

/// Owned by the handles only. The driver task keeps just the [`Shared`] half.
#[derive(Debug)]
struct Inner {
    shared: Arc<Shared>,
}

impl Inner {
    fn close(&self) {
        self.shared.closed.store(true, Ordering::Release);
        self.shared.wake.notify_one();
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.close();
    }
}

impl LoadingHandle {
    /// Creates the controller and spawns its driver task.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    #[must_use]
    pub fn spawn(config: VisibilityConfig) -> Self {
        let shared = Arc::new(Shared {
            controller: Mutex::new(DelayedVisibility::with_clock(config, TokioClock)),
            wake: Notify::new(),
            closed: AtomicBool::new(false),
        });
        tokio::spawn(drive(Arc::clone(&shared)));
        Self {
            inner: Arc::new(Inner { shared }),
        }
    }

    fn shared(&self) -> &Shared {
        &self.inner.shared
    }

    /// Replaces the callback told about visibility changes.
    pub fn set_listener(&self, listener: impl VisibilityListener + 'static) {
        self.shared().lock().set_listener(listener);
    }

    /// Marks work as started and wakes the driver.
    pub fn start(&self) {
        self.shared().lock().start();
        self.shared().wake.notify_one();
    }

    /// Marks work as finished. Hiding may wait for the minimum duration.
    pub fn stop(&self) {
        self.shared().lock().stop();
        self.shared().wake.notify_one();
    }

    /// Forces the indicator back to idle, skipping the minimum duration.
    pub fn reset(&self) {
        self.shared().lock().reset();
        self.shared().wake.notify_one();
    }

    /// Returns whether work is in progress.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.shared().lock().is_busy()
    }

    /// Returns whether the indicator is currently shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.shared().lock().is_visible()
    }

    /// Returns the controller's current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.shared().lock().phase()
    }

    /// Runs `future` with the indicator marked busy.
    ///
    /// `stop` runs exactly once when the future completes, whatever its
    /// output, and also when the returned future is dropped before that.
    pub async fn wrap<F>(&self, future: F) -> F::Output
    where
        F: Future,
    {
        self.start();
        let _guard = StopGuard(self);
        future.await
    }

    /// Calls `operation` and wraps the future it returns.
    pub async fn run<F, Fut>(&self, operation: F) -> Fut::Output
    where
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        self.wrap(operation()).await
    }

    /// Stops the driver task. Timers no longer fire afterwards.
    pub fn shutdown(&self) {
        self.inner.close();
    }
}

struct StopGuard<'a>(&'a LoadingHandle);

impl Drop for StopGuard<'_> {
    fn drop(&mut self) {
        self.0.stop();
    }
}

async fn drive(shared: Arc<Shared>) {
    loop {
        if shared.closed.load(Ordering::Acquire) {
            tracing::debug!("loading driver stopped");
            break;
        }

        // Read the deadline without holding the lock across the await.
        let next = shared.lock().next_deadline();
        match next {
            Some(deadline) => {
                tokio::select! {
                    () = tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)) => {}
                    () = shared.wake.notified() => {}
                }
            }
            None => shared.wake.notified().await,
        }

        if !shared.closed.load(Ordering::Acquire) {
            shared.lock().tick();
        }
    }
}
