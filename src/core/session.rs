//! src/core/session.rs
//!
//! Lock/unlock session state machine
//!
//! `SessionController` is the single authority for whether the device is in
//! cleaning mode. It owns the `SessionState`, drives the
//! `HoldGestureTracker`, and keeps the OS-level side effects (cursor
//! visibility, full-screen takeover, window-chrome lockout) consistent with
//! that state through the `DisplayControl` collaborator.
//!
//! The controller holds no GTK types. The presentation layer implements
//! `DisplayControl` and forwards key events and sample ticks; everything
//! here runs on whatever single thread the caller lives on.

use std::time::{Duration, Instant};

use crate::core::gesture::{HoldGestureTracker, HoldSignal, MonitoringToken, TickOutcome};
use crate::core::types::SessionState;

/// Display and window side effects requested by the session controller
///
/// All calls are fire-and-forget and best-effort: implementations silently
/// no-op when the environment cannot honour them (e.g., no window exists
/// yet). This is a UX lockout, not a security boundary, and the controller
/// never inspects the outcome.
pub trait DisplayControl {
    /// Hides the pointer cursor
    fn hide_cursor(&self);

    /// Restores the pointer cursor
    fn show_cursor(&self);

    /// Takes over the full screen
    fn enter_full_screen(&self);

    /// Leaves full-screen mode
    fn exit_full_screen(&self);

    /// Enables or disables window chrome (close/minimise controls)
    fn set_window_controls_enabled(&self, enabled: bool);
}

/// Outcome of a sample tick as seen by the presentation layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionSample {
    /// Locked, monitoring live, no hold in progress
    Waiting,
    /// Locked, hold in progress; fraction of the deadline completed
    Progress(f64),
    /// The hold completed: the session just transitioned to Unlocked and
    /// all display side effects were reverted. The driver must dismantle
    /// its sampling timer.
    Unlocked,
    /// The tick arrived after teardown (stale token or not locked); the
    /// driver must dismantle its sampling timer
    Stopped,
}

/// Single authority over the cleaning-mode session
///
/// Owns the lock/unlock state, the enable/disable transitions, and the
/// side-effect orchestration. Unlocking is possible only through the hold
/// gesture: `disable()` is private and invoked solely by the tracker's
/// completion signal.
///
/// # Example
///
/// ```
/// use clean_lock::core::{DisplayControl, SessionController, SessionState};
/// use std::time::Duration;
///
/// struct Headless;
/// impl DisplayControl for Headless {
///     fn hide_cursor(&self) {}
///     fn show_cursor(&self) {}
///     fn enter_full_screen(&self) {}
///     fn exit_full_screen(&self) {}
///     fn set_window_controls_enabled(&self, _enabled: bool) {}
/// }
///
/// let mut session = SessionController::new(Headless, Duration::from_secs(5));
/// assert_eq!(session.state(), SessionState::Unlocked);
///
/// session.enable();
/// assert_eq!(session.state(), SessionState::Locked);
/// ```
pub struct SessionController<D: DisplayControl> {
    /// Current session state; mutated only by enable()/disable()
    state: SessionState,
    /// Hold-gesture detector, started while Locked
    tracker: HoldGestureTracker,
    /// Display/window collaborator
    display: D,
}

impl<D: DisplayControl> SessionController<D> {
    /// Creates an unlocked controller with the given hold deadline
    pub fn new(display: D, hold_duration: Duration) -> Self {
        Self {
            state: SessionState::Unlocked,
            tracker: HoldGestureTracker::new(hold_duration),
            display,
        }
    }

    /// Enters cleaning mode
    ///
    /// Transitions to `Locked`, starts hold monitoring, and requests
    /// cursor-hide, full-screen takeover, and window-control lockout.
    ///
    /// Returns the token the caller must schedule sample ticks under, or
    /// `None` if the session was already locked (idempotent no-op).
    pub fn enable(&mut self) -> Option<MonitoringToken> {
        if self.state == SessionState::Locked {
            return None;
        }

        self.state = SessionState::Locked;
        let token = self.tracker.start();

        self.display.hide_cursor();
        self.display.enter_full_screen();
        self.display.set_window_controls_enabled(false);

        Some(token)
    }

    /// Exits cleaning mode
    ///
    /// Only the completion signal reaches here; there is no user-facing
    /// bypass.
    fn disable(&mut self) {
        self.state = SessionState::Unlocked;
        self.tracker.stop();

        self.display.show_cursor();
        self.display.exit_full_screen();
        self.display.set_window_controls_enabled(true);
    }

    /// Reconciles display state after the application regains focus
    ///
    /// Full-screen state can be externally disturbed by the compositor, so
    /// it is re-asserted here rather than assumed to hold. Never alters
    /// `SessionState`; does nothing while unlocked.
    pub fn on_application_reactivated(&self) {
        if self.state != SessionState::Locked {
            return;
        }

        self.display.enter_full_screen();
        self.display.hide_cursor();
    }

    /// Forwards a designated-modifier transition event
    ///
    /// Ignored while unlocked. See `HoldGestureTracker::on_modifier_event`.
    pub fn on_modifier_event(&mut self, held: bool, now: Instant) -> Option<HoldSignal> {
        if self.state != SessionState::Locked {
            return None;
        }

        self.tracker.on_modifier_event(held, now)
    }

    /// Processes one sample tick, unlocking on completion
    pub fn on_sample_tick(&mut self, token: MonitoringToken, now: Instant) -> SessionSample {
        if self.state != SessionState::Locked {
            return SessionSample::Stopped;
        }

        match self.tracker.on_sample_tick(token, now) {
            TickOutcome::Waiting => SessionSample::Waiting,
            TickOutcome::Progress(fraction) => SessionSample::Progress(fraction),
            TickOutcome::Completed => {
                self.disable();
                SessionSample::Unlocked
            }
            TickOutcome::Stopped => SessionSample::Stopped,
        }
    }

    /// Current session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the session is in cleaning mode
    pub fn is_locked(&self) -> bool {
        self.state == SessionState::Locked
    }

    /// Current hold progress fraction in `[0, 1]`
    pub fn progress(&self) -> f64 {
        self.tracker.progress()
    }

    /// The configured hold deadline
    pub fn hold_duration(&self) -> Duration {
        self.tracker.hold_duration()
    }

    /// Updates the hold deadline
    ///
    /// Accepted only while unlocked; a locked session keeps the deadline
    /// it was locked with.
    pub fn set_hold_duration(&mut self, hold_duration: Duration) {
        if self.state == SessionState::Unlocked {
            self.tracker.set_hold_duration(hold_duration);
        }
    }

    /// Whether hold monitoring is live
    ///
    /// True exactly while the session is locked.
    pub fn is_monitoring(&self) -> bool {
        self.tracker.is_active()
    }
}
