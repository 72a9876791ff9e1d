use crate::core::gesture::HoldSignal;
use crate::core::session::{DisplayControl, SessionController, SessionSample};
use crate::core::types::SessionState;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// One recorded display/window side-effect request
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum DisplayCall {
    HideCursor,
    ShowCursor,
    EnterFullScreen,
    ExitFullScreen,
    ControlsEnabled(bool),
}

/// Test double recording every DisplayControl call in order
#[derive(Clone, Default)]
struct RecordingDisplay {
    calls: Rc<RefCell<Vec<DisplayCall>>>,
}

impl DisplayControl for RecordingDisplay {
    fn hide_cursor(&self) {
        self.calls.borrow_mut().push(DisplayCall::HideCursor);
    }

    fn show_cursor(&self) {
        self.calls.borrow_mut().push(DisplayCall::ShowCursor);
    }

    fn enter_full_screen(&self) {
        self.calls.borrow_mut().push(DisplayCall::EnterFullScreen);
    }

    fn exit_full_screen(&self) {
        self.calls.borrow_mut().push(DisplayCall::ExitFullScreen);
    }

    fn set_window_controls_enabled(&self, enabled: bool) {
        self.calls
            .borrow_mut()
            .push(DisplayCall::ControlsEnabled(enabled));
    }
}

/// Helper: controller with the standard 5-second deadline plus a handle
/// onto the recorded side-effect calls
fn session() -> (
    SessionController<RecordingDisplay>,
    Rc<RefCell<Vec<DisplayCall>>>,
) {
    let display = RecordingDisplay::default();
    let calls = display.calls.clone();
    (
        SessionController::new(display, Duration::from_secs(5)),
        calls,
    )
}

#[test]
fn test_starts_unlocked() {
    let (session, calls) = session();

    assert_eq!(session.state(), SessionState::Unlocked);
    assert!(!session.is_monitoring());
    assert!(calls.borrow().is_empty(), "no side effects before enable()");
}

#[test]
fn test_enable_locks_and_applies_side_effects() {
    let (mut session, calls) = session();

    let token = session.enable();

    assert!(token.is_some());
    assert_eq!(session.state(), SessionState::Locked);
    assert!(session.is_monitoring());
    assert_eq!(
        *calls.borrow(),
        vec![
            DisplayCall::HideCursor,
            DisplayCall::EnterFullScreen,
            DisplayCall::ControlsEnabled(false),
        ]
    );
}

#[test]
fn test_enable_is_idempotent() {
    let (mut session, calls) = session();

    session.enable();
    let second = session.enable();

    assert_eq!(second, None, "enable() while locked is a no-op");
    assert_eq!(session.state(), SessionState::Locked);
    assert!(session.is_monitoring());
    assert_eq!(calls.borrow().len(), 3, "side effects requested only once");
}

#[test]
fn test_full_hold_unlocks() {
    let (mut session, calls) = session();
    let token = session.enable().unwrap();
    let t0 = Instant::now();

    session.on_modifier_event(true, t0);
    let sample = session.on_sample_tick(token, t0 + Duration::from_secs(5));

    assert_eq!(sample, SessionSample::Unlocked);
    assert_eq!(session.state(), SessionState::Unlocked);
    assert!(!session.is_monitoring());

    // Lock effects followed by the full restore sequence
    assert_eq!(
        *calls.borrow(),
        vec![
            DisplayCall::HideCursor,
            DisplayCall::EnterFullScreen,
            DisplayCall::ControlsEnabled(false),
            DisplayCall::ShowCursor,
            DisplayCall::ExitFullScreen,
            DisplayCall::ControlsEnabled(true),
        ]
    );
}

#[test]
fn test_early_release_keeps_session_locked() {
    let (mut session, _calls) = session();
    let token = session.enable().unwrap();
    let t0 = Instant::now();

    session.on_modifier_event(true, t0);

    let sample = session.on_sample_tick(token, t0 + Duration::from_secs(3));
    match sample {
        SessionSample::Progress(fraction) => {
            assert!((fraction - 0.6).abs() < 1e-9, "expected ~0.6, got {}", fraction)
        }
        other => panic!("expected progress, got {:?}", other),
    }

    let signal = session.on_modifier_event(false, t0 + Duration::from_secs(3));
    assert_eq!(signal, Some(HoldSignal::Cancelled));
    assert_eq!(session.state(), SessionState::Locked);
    assert!((session.progress() - 0.0).abs() < 1e-9);

    // Monitoring stays live for the next attempt
    assert_eq!(
        session.on_sample_tick(token, t0 + Duration::from_secs(4)),
        SessionSample::Waiting
    );
}

#[test]
fn test_unlock_happens_exactly_once() {
    let (mut session, _calls) = session();
    let token = session.enable().unwrap();
    let t0 = Instant::now();

    session.on_modifier_event(true, t0);
    assert_eq!(
        session.on_sample_tick(token, t0 + Duration::from_secs(5)),
        SessionSample::Unlocked
    );

    // A tick still queued after the unlock must not act
    assert_eq!(
        session.on_sample_tick(token, t0 + Duration::from_secs(5)),
        SessionSample::Stopped
    );
}

#[test]
fn test_reactivation_reasserts_display_state() {
    let (mut session, calls) = session();
    session.enable();
    calls.borrow_mut().clear();

    session.on_application_reactivated();

    assert_eq!(
        *calls.borrow(),
        vec![DisplayCall::EnterFullScreen, DisplayCall::HideCursor]
    );
    assert_eq!(session.state(), SessionState::Locked, "state is unchanged");
}

#[test]
fn test_reactivation_noop_while_unlocked() {
    let (session, calls) = session();

    session.on_application_reactivated();

    assert!(calls.borrow().is_empty());
    assert_eq!(session.state(), SessionState::Unlocked);
}

#[test]
fn test_key_events_ignored_while_unlocked() {
    let (mut session, _calls) = session();

    assert_eq!(session.on_modifier_event(true, Instant::now()), None);
    assert_eq!(session.state(), SessionState::Unlocked);
}

#[test]
fn test_relock_after_unlock() {
    let (mut session, _calls) = session();
    let first = session.enable().unwrap();
    let t0 = Instant::now();

    session.on_modifier_event(true, t0);
    session.on_sample_tick(first, t0 + Duration::from_secs(5));
    assert_eq!(session.state(), SessionState::Unlocked);

    // A later enable() issues a fresh token; the old one stays dead
    let second = session.enable().unwrap();
    assert_ne!(first, second);
    assert_eq!(
        session.on_sample_tick(first, t0 + Duration::from_secs(6)),
        SessionSample::Stopped
    );
    assert_eq!(
        session.on_sample_tick(second, t0 + Duration::from_secs(6)),
        SessionSample::Waiting
    );
}

#[test]
fn test_hold_duration_update_only_while_unlocked() {
    let (mut session, _calls) = session();

    session.set_hold_duration(Duration::from_secs(3));
    assert_eq!(session.hold_duration(), Duration::from_secs(3));

    session.enable();
    session.set_hold_duration(Duration::from_secs(1));
    assert_eq!(
        session.hold_duration(),
        Duration::from_secs(3),
        "a locked session keeps the deadline it was locked with"
    );
}
