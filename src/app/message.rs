// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications::{self, Kind};
use std::path::PathBuf;
use std::time::Instant;

/// How a simulated form submission behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Finishes before the loading delay, so no indicator is shown.
    Quick,
    /// Takes long enough for the loading overlay to appear.
    Slow,
    /// Takes long and then fails.
    Failing,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Submit(Submission),
    Submitted(Result<String, String>),
    /// Push a sample notification of the given kind.
    Notify(Kind),
    DismissAll,
    Notification(notifications::NotificationMessage),
    Tick(Instant),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Directory holding `settings.toml`, overriding the default location.
    pub config_dir: Option<PathBuf>,
    /// Overrides `[notifications] max_visible` from the settings file.
    pub max_visible: Option<usize>,
}
