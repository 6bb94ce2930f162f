// SPDX-License-Identifier: MPL-2.0
//! Demo application composing the notification queue and the loading overlay.
//!
//! A simulated form submission shows the loading overlay while it runs and
//! pushes a toast with its outcome, the same way a real form would wire the
//! two components together. They never talk to each other directly.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message, Submission};

use crate::config;
use crate::ui::loading::LoadingOverlay;
use crate::ui::notifications::{self, Kind, Request};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Simulated latency of a submission finishing before the loading delay.
const QUICK_LATENCY: Duration = Duration::from_millis(150);

/// Simulated latency of a submission long enough to show the overlay.
const SLOW_LATENCY: Duration = Duration::from_millis(1800);

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;

/// Root Iced application state.
pub struct App {
    notifications: notifications::Manager,
    loading: LoadingOverlay,
    submissions: u32,
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("notifications", &self.notifications.count())
            .field("loading", &self.loading.phase())
            .field("submissions", &self.submissions)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure, flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            notifications: notifications::Manager::new(),
            loading: LoadingOverlay::default(),
            submissions: 0,
            config_warning: None,
        }
    }
}

impl App {
    /// Initializes application state from the settings file and the flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load_with_override(flags.config_dir);
        if flags.max_visible.is_some() {
            config.notifications.max_visible = flags.max_visible;
        }

        let mut app = App {
            config_warning,
            ..Self::default()
        };
        app.notifications.configure(&config.notifications.options());
        app.loading.configure(config.loading.overlay());

        (app, Task::none())
    }

    fn title(&self) -> String {
        if self.loading.is_showing() {
            format!("{} - IcedFeedback", self.loading.message())
        } else {
            "IcedFeedback".to_string()
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let has_deadline = self.notifications.next_deadline().is_some()
            || self.loading.next_deadline().is_some();
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(has_deadline, self.loading.is_showing()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Submit(submission) => {
                if self.loading.controller().is_busy() {
                    return Task::none();
                }
                self.submissions += 1;
                self.loading.show("Submitting...");
                Task::perform(submit(self.submissions, submission), Message::Submitted)
            }
            Message::Submitted(outcome) => {
                self.loading.hide();
                match outcome {
                    Ok(text) => self.notifications.success(text),
                    Err(text) => self
                        .notifications
                        .push(Request::error(text).title("Submission failed")),
                };
                Task::none()
            }
            Message::Notify(kind) => {
                self.notifications.push(sample_request(kind));
                Task::none()
            }
            Message::DismissAll => {
                self.notifications.dismiss_all();
                Task::none()
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                self.loading.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            notifications: &self.notifications,
            loading: &self.loading,
            submissions: self.submissions,
            config_warning: self.config_warning.as_deref(),
        })
    }
}

fn sample_request(kind: Kind) -> Request {
    match kind {
        Kind::Success => Request::success("Changes saved"),
        Kind::Info => Request::info("A new version is available"),
        Kind::Warning => Request::warning("Storage is almost full").title("Heads up"),
        Kind::Error => Request::error("Connection lost"),
    }
}

/// Simulated server round trip.
async fn submit(attempt: u32, submission: Submission) -> Result<String, String> {
    let latency = match submission {
        Submission::Quick => QUICK_LATENCY,
        Submission::Slow | Submission::Failing => SLOW_LATENCY,
    };
    tokio::time::sleep(latency).await;

    if submission == Submission::Failing {
        tracing::debug!(attempt, "simulated submission failed");
        Err(format!("Submission #{attempt} was rejected by the server"))
    } else {
        Ok(format!("Submission #{attempt} saved"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::loading::OverlayPhase;
    use tempfile::tempdir;

    #[test]
    fn new_applies_settings_and_flags() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::fs::write(
            temp_dir.path().join("settings.toml"),
            "[notifications]\nmax_visible = 4\n\n[loading]\ndelay_ms = 10\n",
        )
        .expect("failed to write settings");

        let (app, _task) = App::new(Flags {
            config_dir: Some(temp_dir.path().to_path_buf()),
            max_visible: Some(2),
        });

        assert_eq!(app.notifications.config().max_visible.value(), 2);
        assert_eq!(
            app.loading.controller().config().delay,
            Duration::from_millis(10)
        );
        assert!(app.config_warning.is_none());
    }

    #[test]
    fn submit_marks_busy_and_outcome_pushes_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Submit(Submission::Quick));
        assert!(app.loading.controller().is_busy());
        assert_eq!(app.loading.phase(), OverlayPhase::Hidden);

        let _ = app.update(Message::Submitted(Ok("saved".into())));
        assert!(!app.loading.controller().is_busy());
        assert_eq!(app.notifications.count(), 1);
    }

    #[test]
    fn second_submit_while_busy_is_ignored() {
        let mut app = App::default();
        let _ = app.update(Message::Submit(Submission::Slow));
        let _ = app.update(Message::Submit(Submission::Slow));
        assert_eq!(app.submissions, 1);
    }

    #[test]
    fn failed_submission_pushes_sticky_error() {
        let mut app = App::default();
        let _ = app.update(Message::Submit(Submission::Failing));
        let _ = app.update(Message::Submitted(Err("rejected".into())));

        let toast = app.notifications.visible().next().expect("error toast");
        assert_eq!(toast.kind(), Kind::Error);
        assert_eq!(toast.title(), Some("Submission failed"));
        assert!(toast.auto_dismiss().is_none());
    }

    #[test]
    fn dismiss_all_message_clears_queue() {
        let mut app = App::default();
        for kind in Kind::ALL {
            let _ = app.update(Message::Notify(kind));
        }
        let _ = app.update(Message::DismissAll);
        assert!(app
            .notifications
            .visible()
            .all(|n| n.state() == notifications::State::Dismissing));
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_submissions_resolve() {
        assert_eq!(submit(1, Submission::Quick).await, Ok("Submission #1 saved".into()));
        assert!(submit(2, Submission::Failing).await.is_err());
    }
}
