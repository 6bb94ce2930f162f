// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::ui::notifications::NotificationMessage;
use iced::keyboard::{self, key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Tick period while timers are pending.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Tick period while the spinner is on screen.
const ANIMATION_INTERVAL: Duration = Duration::from_millis(33);

/// Routes Escape to the notification queue when no widget consumed it.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status != event::Status::Ignored {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key::Named::Escape),
                ..
            }) => Some(Message::Notification(NotificationMessage::DismissLatest)),
            _ => None,
        }
    })
}

/// Creates the tick subscription driving notification and loading timers.
///
/// Nothing ticks while no deadline is pending and no overlay is animating.
pub fn create_tick_subscription(has_deadline: bool, animating: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_INTERVAL).map(Message::Tick)
    } else if has_deadline {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
