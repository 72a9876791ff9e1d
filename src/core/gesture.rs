// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/gesture.rs
//!
//! Continuous key-hold detection
//!
//! `HoldGestureTracker` observes modifier-key transition events and measures
//! how long the designated key has been held continuously. When the hold
//! reaches the configured deadline it emits a single completion signal.
//!
//! The tracker is a plain state machine driven from outside: the caller
//! feeds it key transitions (`on_modifier_event`) and periodic sample ticks
//! (`on_sample_tick`). It never owns a timer itself, which keeps it free of
//! any event-loop dependency and trivially testable.
//!
//! # State machine
//!
//! ```text
//! Idle --start()--> Armed --key held--> Counting
//!                     ^                    |
//!                     |   key released /   |
//!                     +---- completed -----+
//!
//! stop() from any state returns to Idle.
//! ```

use std::time::{Duration, Instant};

use crate::core::types::HoldGesture;

/// Opaque token identifying one monitoring activation
///
/// A fresh token is issued by every `start()`. Sample ticks must present
/// the token they were scheduled under; ticks carrying a stale token are
/// rejected, so a stopped tracker can never emit progress or completion
/// through a timer that was queued before `stop()` returned.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MonitoringToken(u64);

/// Tracker lifecycle phase
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TrackerPhase {
    /// Not monitoring; no subscription active
    Idle,
    /// Monitoring, no hold in progress
    Armed,
    /// A hold attempt is being timed
    Counting,
}

/// Signal produced by a modifier transition event
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HoldSignal {
    /// The designated key went down; a new attempt is being timed from zero
    Started,
    /// The key was released before the deadline; progress reset to zero
    Cancelled,
}

/// Outcome of a sample tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Monitoring is live but no hold is in progress
    Waiting,
    /// Hold in progress; fraction of the deadline completed, in `[0, 1]`
    Progress(f64),
    /// The deadline was reached; emitted exactly once per successful hold
    Completed,
    /// The token is stale or the tracker is idle; the caller must tear
    /// down whatever timer produced this tick
    Stopped,
}

/// Detects a continuous hold of the designated modifier key
///
/// Exactly one activation can exist at a time: `start()` always stops any
/// previous activation before issuing a new token, so duplicate
/// subscriptions and leaked timers cannot occur.
///
/// # Example
///
/// ```
/// use clean_lock::core::{HoldGestureTracker, TickOutcome};
/// use std::time::{Duration, Instant};
///
/// let mut tracker = HoldGestureTracker::new(Duration::from_secs(5));
/// let token = tracker.start();
///
/// let t0 = Instant::now();
/// tracker.on_modifier_event(true, t0);
///
/// // Deadline reached five seconds later
/// let outcome = tracker.on_sample_tick(token, t0 + Duration::from_secs(5));
/// assert_eq!(outcome, TickOutcome::Completed);
/// ```
#[derive(Debug)]
pub struct HoldGestureTracker {
    /// Continuous-hold time required for completion
    hold_duration: Duration,
    /// Current lifecycle phase
    phase: TrackerPhase,
    /// The in-progress hold attempt, if any
    gesture: HoldGesture,
    /// Token of the live activation; `None` while Idle
    active: Option<MonitoringToken>,
    /// Monotonic counter backing token identity
    next_token: u64,
}

impl HoldGestureTracker {
    /// Creates an idle tracker with the given hold deadline
    pub fn new(hold_duration: Duration) -> Self {
        Self {
            hold_duration,
            phase: TrackerPhase::Idle,
            gesture: HoldGesture::new(),
            active: None,
            next_token: 0,
        }
    }

    /// Begins monitoring and returns the token for this activation
    ///
    /// Any previous activation is fully stopped first, so at most one
    /// token is ever live. The gesture is reset to zero.
    pub fn start(&mut self) -> MonitoringToken {
        self.stop();

        let token = MonitoringToken(self.next_token);
        self.next_token += 1;

        self.active = Some(token);
        self.phase = TrackerPhase::Armed;

        token
    }

    /// Stops monitoring and clears any in-progress hold
    ///
    /// Safe to call multiple times and safe to call before `start()`.
    /// Invalidates the current token, so ticks queued before this call
    /// are rejected once it returns.
    pub fn stop(&mut self) {
        self.active = None;
        self.phase = TrackerPhase::Idle;
        self.gesture.clear();
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> TrackerPhase {
        self.phase
    }

    /// Whether an activation is live
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Current progress fraction in `[0, 1]`
    pub fn progress(&self) -> f64 {
        self.gesture.progress()
    }

    /// The configured hold deadline
    pub fn hold_duration(&self) -> Duration {
        self.hold_duration
    }

    /// Updates the hold deadline
    ///
    /// Only applied while Idle; a live activation keeps the deadline it
    /// started with so a running countdown can never be shortened or
    /// stretched mid-attempt.
    pub fn set_hold_duration(&mut self, hold_duration: Duration) {
        if self.phase == TrackerPhase::Idle {
            self.hold_duration = hold_duration;
        }
    }

    /// Feeds a modifier-key transition event into the tracker
    ///
    /// Only transitions of the designated key belong here; the caller
    /// filters out every other key. `held` reports whether the key is down
    /// after the transition.
    ///
    /// Returns `Some(HoldSignal::Started)` when a new attempt begins,
    /// `Some(HoldSignal::Cancelled)` when an attempt is abandoned by
    /// release, `None` otherwise (idle tracker, or repeat events that do
    /// not change the hold state).
    pub fn on_modifier_event(&mut self, held: bool, now: Instant) -> Option<HoldSignal> {
        if self.phase == TrackerPhase::Idle {
            return None;
        }

        if held {
            // Repeat key events while already counting carry no information
            if self.gesture.is_active() {
                return None;
            }

            self.gesture.begin(now);
            self.phase = TrackerPhase::Counting;
            Some(HoldSignal::Started)
        } else {
            if !self.gesture.is_active() {
                return None;
            }

            // Release before the deadline abandons the attempt entirely
            self.gesture.clear();
            self.phase = TrackerPhase::Armed;
            Some(HoldSignal::Cancelled)
        }
    }

    /// Processes one periodic sample tick
    ///
    /// The tick must present the token it was scheduled under. Completion
    /// is determined by wall-clock elapsed time against the recorded start
    /// timestamp, so tick-period jitter does not move the deadline.
    ///
    /// After `Completed` the tracker returns to Armed and keeps listening;
    /// the caller decides whether to `stop()` entirely.
    pub fn on_sample_tick(&mut self, token: MonitoringToken, now: Instant) -> TickOutcome {
        if self.active != Some(token) {
            return TickOutcome::Stopped;
        }

        match self.phase {
            TrackerPhase::Idle => TickOutcome::Stopped,
            TrackerPhase::Armed => TickOutcome::Waiting,
            TrackerPhase::Counting => {
                let Some(elapsed) = self.gesture.advance(now, self.hold_duration) else {
                    // Counting with no recorded start cannot happen; treat
                    // it as a hold that never began
                    self.phase = TrackerPhase::Armed;
                    return TickOutcome::Waiting;
                };

                if elapsed >= self.hold_duration {
                    self.gesture.clear();
                    self.phase = TrackerPhase::Armed;
                    TickOutcome::Completed
                } else {
                    TickOutcome::Progress(self.gesture.progress())
                }
            }
        }
    }
}
