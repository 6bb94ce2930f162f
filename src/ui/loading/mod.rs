// SPDX-License-Identifier: MPL-2.0
//! Loading indicators that do not flicker.
//!
//! # Components
//!
//! - [`controller`] - `DelayedVisibility`, the busy to visible state machine
//! - [`overlay`] - `LoadingOverlay`, a full-window overlay with a message
//! - [`handle`] - `LoadingHandle`, a controller driven on the tokio runtime
//! - [`view`] - Iced rendering of the overlay
//!
//! # Usage
//!
//! ```
//! use iced_feedback::time::ManualClock;
//! use iced_feedback::ui::loading::{DelayedVisibility, VisibilityConfig};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut loading = DelayedVisibility::with_clock(VisibilityConfig::default(), clock.clone());
//!
//! loading.start();
//! clock.advance(Duration::from_millis(100));
//! loading.stop();
//! loading.tick();
//!
//! // Finished before the 400ms delay: never shown.
//! assert!(!loading.is_visible());
//! ```

pub mod controller;
pub mod handle;
pub mod overlay;
mod spinner;
pub mod view;

pub use controller::{
    DelayedVisibility, Phase, VisibilityConfig, VisibilityEvent, VisibilityListener,
};
pub use handle::{LoadingHandle, TokioClock};
pub use overlay::{LoadingOverlay, OverlayConfig, OverlayPhase};
pub use view::view_overlay;
