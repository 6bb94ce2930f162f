// SPDX-License-Identifier: MPL-2.0
//! Time sources and cancelable deadlines.
//!
//! The feedback state machines never sleep or spawn timers themselves. They
//! read the current instant from an injected [`Clock`] and keep their pending
//! deadlines in a [`Timers`] table. The host wakes them at
//! `next_deadline()` and calls `tick()`, which makes the same code drivable
//! by an Iced subscription, a tokio task, or a test advancing a
//! [`ManualClock`].

mod clock;
mod timers;

pub use clock::{Clock, ManualClock, SystemClock};
pub use timers::{Fired, TimerId, Timers};
