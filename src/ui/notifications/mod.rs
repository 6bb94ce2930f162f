// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, errors, etc.) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Request` builder, `Notification` entity and `Kind`
//! - [`manager`] - `Manager` queue handling dedup, slots and timers
//! - [`config`] - Queue settings and partial updates
//! - [`toast`] - Iced rendering of toasts
//!
//! # Usage
//!
//! ```
//! use iced_feedback::ui::notifications::{Manager, Request};
//! use std::time::Duration;
//!
//! let mut manager = Manager::new();
//! manager.success("Profile saved");
//! manager.push(Request::warning("Disk almost full").duration(Duration::from_secs(10)));
//!
//! // Repeated text inside the duplicate window is dropped.
//! assert!(manager.success("Profile saved").is_none());
//! assert_eq!(manager.count(), 2);
//! ```
//!
//! The host calls [`Manager::tick`] at [`Manager::next_deadline`] (for Iced,
//! a subscription sending [`NotificationMessage::Tick`]) and renders
//! [`toast::view_overlay`] on top of its content.
//!
//! # Design Considerations
//!
//! - Toast duration: 4s for success/info, 6s for warnings, manual dismiss for errors
//! - Max visible toasts: 5 (others are queued in arrival order)
//! - A dismissed toast keeps its slot during the exit animation
//! - Identical text is treated as the same notification

pub mod config;
mod dedup;
pub mod manager;
pub mod notification;
pub mod toast;

pub use config::{KindDurations, Position, QueueConfig, QueueOptions};
pub use manager::{Event, Manager, Message as NotificationMessage, Presenter};
pub use notification::{
    DismissCallback, Kind, Notification, NotificationId, Politeness, Request, State,
};
