// SPDX-License-Identifier: MPL-2.0
//! `iced_feedback` provides user feedback components for Iced applications.
//!
//! - [`ui::notifications`]: a toast queue with deduplication, a visible-slot
//!   cap, FIFO promotion, auto-dismiss and a dismiss animation window.
//! - [`ui::loading`]: loading indicators that only appear for slow work and
//!   then stay up long enough to be read.
//!
//! Both components are plain state machines reading time from an injected
//! [`time::Clock`]. The host calls `tick()` when `next_deadline()` is reached;
//! the [`app`] module shows the wiring in a small Iced program.

#![doc(html_root_url = "https://docs.rs/iced_feedback/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod time;
pub mod ui;
