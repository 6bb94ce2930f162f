// SPDX-License-Identifier: MPL-2.0
use iced_feedback::config::{self, Config, LoadingConfig, NotificationsConfig};
use iced_feedback::time::{Clock, ManualClock};
use iced_feedback::ui::loading::{DelayedVisibility, LoadingOverlay, OverlayPhase};
use iced_feedback::ui::notifications::{Event, Kind, Manager, Position, Request, State};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::tempdir;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn settings_file_drives_both_components() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = Config {
        notifications: NotificationsConfig {
            max_visible: Some(2),
            position: Some(Position::BottomCenter),
            duplicate_threshold_ms: Some(0),
            ..NotificationsConfig::default()
        },
        loading: LoadingConfig {
            delay_ms: Some(50),
            min_duration_ms: Some(100),
            overlay_exit_ms: Some(0),
        },
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, config);

    let clock = ManualClock::new();
    let mut queue = Manager::with_clock(loaded.notifications.queue_config(), clock.clone());
    let mut overlay = LoadingOverlay::with_clock(loaded.loading.overlay(), clock.clone());

    // Zero threshold disables deduplication.
    assert!(queue.error("same").is_some());
    assert!(queue.error("same").is_some());
    assert!(queue.error("same").is_some());
    assert_eq!(queue.visible_count(), 2);
    assert_eq!(queue.pending_count(), 1);
    assert_eq!(queue.config().position, Position::BottomCenter);

    overlay.show("Loading");
    clock.advance(ms(50));
    overlay.tick();
    assert_eq!(overlay.phase(), OverlayPhase::Visible);
    overlay.hide();
    clock.advance(ms(100));
    overlay.tick();
    assert_eq!(overlay.phase(), OverlayPhase::Hidden);

    dir.close().expect("Failed to close temporary directory");
}

/// Form submission: start the indicator, finish the work, stop the
/// indicator and report the result with a toast.
#[test]
fn form_submission_pattern() {
    let clock = ManualClock::new();
    let mut loading = DelayedVisibility::with_clock(Default::default(), clock.clone());
    let mut toasts = Manager::with_clock(Default::default(), clock.clone());
    let transitions = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&transitions);
    let observer = clock.clone();
    loading.set_listener(move |visible| sink.lock().unwrap().push((visible, observer.now())));

    let start = clock.now();
    loading.start();
    for _ in 0..12 {
        clock.advance(ms(100));
        loading.tick();
        toasts.tick();
    }
    loading.stop();
    let id = toasts
        .push(Request::success("Form submitted").title("Done"))
        .expect("toast accepted");

    // Shown at 400ms, stopped at 1200ms: longer than the minimum, hidden at once.
    assert_eq!(
        *transitions.lock().unwrap(),
        vec![(true, start + ms(400)), (false, start + ms(1200))]
    );
    assert_eq!(toasts.get(id).map(|n| n.state()), Some(State::Visible));

    clock.advance(ms(4000));
    toasts.tick();
    clock.advance(ms(300));
    toasts.tick();
    assert_eq!(
        toasts.take_events(),
        vec![Event::Shown(id), Event::Dismissing(id), Event::Removed(id)]
    );
    assert!(!toasts.has_notifications());
}

#[test]
fn hosts_can_sleep_until_the_next_deadline() {
    let clock = ManualClock::new();
    let mut toasts = Manager::with_clock(Default::default(), clock.clone());
    for kind in Kind::ALL {
        toasts.push(Request::new(kind, format!("{kind:?}")));
    }

    // Jump straight from deadline to deadline like an event loop would.
    let mut wakeups = 0;
    while let Some(deadline) = toasts.next_deadline() {
        let now = clock.now();
        if deadline > now {
            clock.advance(deadline - now);
        }
        toasts.tick();
        wakeups += 1;
        assert!(wakeups < 100, "deadlines must drain");
    }

    // Only the error stays: it never auto-dismisses.
    let remaining: Vec<_> = toasts.visible().map(|n| n.kind()).collect();
    assert_eq!(remaining, vec![Kind::Error]);
}
