use crate::core::gesture::{HoldGestureTracker, HoldSignal, TickOutcome, TrackerPhase};
use std::time::{Duration, Instant};

/// Helper to create a tracker with the standard 5-second deadline
fn tracker() -> HoldGestureTracker {
    HoldGestureTracker::new(Duration::from_secs(5))
}

fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected progress ~{}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_new_tracker_is_idle() {
    let t = tracker();
    assert_eq!(t.phase(), TrackerPhase::Idle);
    assert!(!t.is_active());
    assert_approx(t.progress(), 0.0);
}

#[test]
fn test_start_arms_tracker() {
    let mut t = tracker();
    t.start();

    assert_eq!(t.phase(), TrackerPhase::Armed);
    assert!(t.is_active());
}

#[test]
fn test_events_ignored_while_idle() {
    let mut t = tracker();
    let now = Instant::now();

    assert_eq!(t.on_modifier_event(true, now), None);
    assert_eq!(t.phase(), TrackerPhase::Idle);
}

#[test]
fn test_hold_enters_counting() {
    let mut t = tracker();
    t.start();

    let now = Instant::now();
    let signal = t.on_modifier_event(true, now);

    assert_eq!(signal, Some(HoldSignal::Started));
    assert_eq!(t.phase(), TrackerPhase::Counting);
}

#[test]
fn test_progress_rises_with_elapsed_time() {
    let mut t = tracker();
    let token = t.start();
    let t0 = Instant::now();

    t.on_modifier_event(true, t0);

    let outcome = t.on_sample_tick(token, t0 + Duration::from_secs(1));
    assert_eq!(outcome, TickOutcome::Progress(0.2));

    let outcome = t.on_sample_tick(token, t0 + Duration::from_secs(3));
    match outcome {
        TickOutcome::Progress(fraction) => assert_approx(fraction, 0.6),
        other => panic!("expected progress, got {:?}", other),
    }
}

#[test]
fn test_no_completion_before_deadline() {
    let mut t = tracker();
    let token = t.start();
    let t0 = Instant::now();

    t.on_modifier_event(true, t0);

    // 4.95s held: just short of the deadline
    let outcome = t.on_sample_tick(token, t0 + Duration::from_millis(4950));
    assert!(
        matches!(outcome, TickOutcome::Progress(_)),
        "must not complete before the deadline, got {:?}",
        outcome
    );
}

#[test]
fn test_completion_at_deadline() {
    let mut t = tracker();
    let token = t.start();
    let t0 = Instant::now();

    t.on_modifier_event(true, t0);

    let outcome = t.on_sample_tick(token, t0 + Duration::from_secs(5));
    assert_eq!(outcome, TickOutcome::Completed);
}

#[test]
fn test_completion_emitted_exactly_once() {
    let mut t = tracker();
    let token = t.start();
    let t0 = Instant::now();

    t.on_modifier_event(true, t0);
    assert_eq!(
        t.on_sample_tick(token, t0 + Duration::from_secs(5)),
        TickOutcome::Completed
    );

    // Tracker returned to Armed: later ticks emit nothing further
    assert_eq!(
        t.on_sample_tick(token, t0 + Duration::from_secs(6)),
        TickOutcome::Waiting
    );
    assert_approx(t.progress(), 0.0);
}

#[test]
fn test_late_tick_clamps_and_completes() {
    let mut t = tracker();
    let token = t.start();
    let t0 = Instant::now();

    t.on_modifier_event(true, t0);

    // A tick arriving well past the deadline still completes (once)
    let outcome = t.on_sample_tick(token, t0 + Duration::from_secs(12));
    assert_eq!(outcome, TickOutcome::Completed);
}

#[test]
fn test_release_cancels_attempt() {
    let mut t = tracker();
    let token = t.start();
    let t0 = Instant::now();

    t.on_modifier_event(true, t0);
    t.on_sample_tick(token, t0 + Duration::from_secs(3));

    let signal = t.on_modifier_event(false, t0 + Duration::from_secs(3));
    assert_eq!(signal, Some(HoldSignal::Cancelled));
    assert_eq!(t.phase(), TrackerPhase::Armed);
    assert_approx(t.progress(), 0.0);

    // No completion for the abandoned attempt, ever
    assert_eq!(
        t.on_sample_tick(token, t0 + Duration::from_secs(10)),
        TickOutcome::Waiting
    );
}

#[test]
fn test_restart_resets_elapsed_to_zero() {
    let mut t = tracker();
    let token = t.start();
    let t0 = Instant::now();

    // Hold for 3s, release, re-press at 4s
    t.on_modifier_event(true, t0);
    t.on_sample_tick(token, t0 + Duration::from_secs(3));
    t.on_modifier_event(false, t0 + Duration::from_secs(3));
    t.on_modifier_event(true, t0 + Duration::from_secs(4));

    // 2s into the second attempt: progress is 2/5, not (3+2)/5
    let outcome = t.on_sample_tick(token, t0 + Duration::from_secs(6));
    match outcome {
        TickOutcome::Progress(fraction) => assert_approx(fraction, 0.4),
        other => panic!("expected progress, got {:?}", other),
    }
}

#[test]
fn test_repeat_held_events_do_not_restart_timer() {
    let mut t = tracker();
    let token = t.start();
    let t0 = Instant::now();

    t.on_modifier_event(true, t0);

    // Key-repeat transition while already counting carries no information
    assert_eq!(t.on_modifier_event(true, t0 + Duration::from_secs(2)), None);

    // Deadline still measured from the original press
    assert_eq!(
        t.on_sample_tick(token, t0 + Duration::from_secs(5)),
        TickOutcome::Completed
    );
}

#[test]
fn test_release_without_hold_is_ignored() {
    let mut t = tracker();
    t.start();

    assert_eq!(t.on_modifier_event(false, Instant::now()), None);
}

#[test]
fn test_tick_while_armed_emits_nothing() {
    let mut t = tracker();
    let token = t.start();

    assert_eq!(t.on_sample_tick(token, Instant::now()), TickOutcome::Waiting);
}

#[test]
fn test_stale_token_rejected() {
    let mut t = tracker();
    let old_token = t.start();
    let new_token = t.start();

    assert_ne!(old_token, new_token);
    assert_eq!(
        t.on_sample_tick(old_token, Instant::now()),
        TickOutcome::Stopped
    );
    assert_eq!(
        t.on_sample_tick(new_token, Instant::now()),
        TickOutcome::Waiting
    );
}

#[test]
fn test_restart_fully_stops_previous_activation() {
    let mut t = tracker();
    let old_token = t.start();
    let t0 = Instant::now();

    t.on_modifier_event(true, t0);
    assert_eq!(t.phase(), TrackerPhase::Counting);

    // start() while active tears the previous activation down first
    t.start();
    assert_eq!(t.phase(), TrackerPhase::Armed);
    assert_approx(t.progress(), 0.0);
    assert_eq!(
        t.on_sample_tick(old_token, t0 + Duration::from_secs(5)),
        TickOutcome::Stopped
    );
}

#[test]
fn test_stop_is_idempotent() {
    let mut t = tracker();
    let token = t.start();

    t.stop();
    t.stop();

    assert_eq!(t.phase(), TrackerPhase::Idle);
    assert!(!t.is_active());
    assert_eq!(t.on_sample_tick(token, Instant::now()), TickOutcome::Stopped);
}

#[test]
fn test_stop_before_start_is_safe() {
    let mut t = tracker();
    t.stop();

    assert_eq!(t.phase(), TrackerPhase::Idle);
}

#[test]
fn test_queued_tick_after_stop_is_rejected() {
    let mut t = tracker();
    let token = t.start();
    let t0 = Instant::now();

    t.on_modifier_event(true, t0);
    t.stop();

    // A tick queued before stop() must not emit progress or completion
    assert_eq!(
        t.on_sample_tick(token, t0 + Duration::from_secs(5)),
        TickOutcome::Stopped
    );
}

#[test]
fn test_rearm_after_completion_counts_from_zero() {
    let mut t = tracker();
    let token = t.start();
    let t0 = Instant::now();

    t.on_modifier_event(true, t0);
    assert_eq!(
        t.on_sample_tick(token, t0 + Duration::from_secs(5)),
        TickOutcome::Completed
    );

    // Caller chose to keep listening; a fresh hold starts a fresh attempt
    t.on_modifier_event(true, t0 + Duration::from_secs(7));
    let outcome = t.on_sample_tick(token, t0 + Duration::from_secs(8));
    match outcome {
        TickOutcome::Progress(fraction) => assert_approx(fraction, 0.2),
        other => panic!("expected progress, got {:?}", other),
    }
}

#[test]
fn test_set_hold_duration_only_while_idle() {
    let mut t = tracker();

    t.set_hold_duration(Duration::from_secs(2));
    assert_eq!(t.hold_duration(), Duration::from_secs(2));

    t.start();
    t.set_hold_duration(Duration::from_secs(9));
    assert_eq!(
        t.hold_duration(),
        Duration::from_secs(2),
        "a live activation keeps the deadline it started with"
    );
}
