// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: state
//! machines own their data, Iced views borrow it and emit messages.
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`loading`] - Delayed loading indicators and overlay
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod loading;
pub mod notifications;
