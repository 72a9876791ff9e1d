//! src/core/types.rs
//!
//! Core type definitions for cleaning-mode session management
//!
//! This module defines the fundamental types used throughout the application:
//! - `Modifier`: the designated unlock key (SUPER, CTRL, SHIFT, ALT)
//! - `SessionState`: whether the device is locked for cleaning
//! - `HoldGesture`: an in-progress continuous key-hold attempt
//!
//! All types are plain values with no GUI dependency so the state machine
//! can be tested without a display server.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Keyboard modifier keys eligible as the designated unlock key
///
/// The unlock gesture is a continuous hold of exactly one of these keys.
/// Names are mapped from their common aliases (e.g., MOD4, WIN → Super).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Modifier {
    /// Super/Windows/Command key (MOD4)
    Super,
    /// Control key
    Ctrl,
    /// Shift key
    Shift,
    /// Alt key (MOD1)
    Alt,
}

impl Modifier {
    /// Resolves a modifier from its config-file name
    ///
    /// Accepts the common aliases:
    /// - "SUPER" | "MOD4" | "WIN" → Super
    /// - "CTRL" | "CONTROL" → Ctrl
    /// - "SHIFT" → Shift
    /// - "ALT" | "MOD1" → Alt
    ///
    /// Matching is case-insensitive. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_uppercase().as_str() {
            "SUPER" | "MOD4" | "WIN" => Some(Modifier::Super),
            "CTRL" | "CONTROL" => Some(Modifier::Ctrl),
            "SHIFT" => Some(Modifier::Shift),
            "ALT" | "MOD1" => Some(Modifier::Alt),
            _ => None,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Super => write!(f, "SUPER"),
            Modifier::Ctrl => write!(f, "CTRL"),
            Modifier::Shift => write!(f, "SHIFT"),
            Modifier::Alt => write!(f, "ALT"),
        }
    }
}

/// Whether the device is in cleaning mode
///
/// A single instance is owned by `SessionController` and mutated only by
/// its transition methods. Created as `Unlocked` at process start.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    /// Normal operation - input and display behave as usual
    Unlocked,
    /// Cleaning mode - input suppressed, display taken over
    Locked,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Unlocked => write!(f, "unlocked"),
            SessionState::Locked => write!(f, "locked"),
        }
    }
}

/// An in-progress key-hold attempt
///
/// Created when the designated modifier transitions from not-held to held;
/// reset when the key is released before the deadline or when the deadline
/// is reached.
///
/// # Invariants
///
/// - `progress` is always `elapsed / hold_duration` clamped to `[0, 1]`
/// - `progress` is `0.0` whenever `started_at` is absent
#[derive(Clone, Debug, Default)]
pub struct HoldGesture {
    /// When the current hold began; absent means no active hold
    started_at: Option<Instant>,
    /// Fraction of the hold duration completed, in `[0, 1]`
    progress: f64,
}

impl HoldGesture {
    /// Creates an empty gesture (no active hold, zero progress)
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the start of a hold attempt
    pub fn begin(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.progress = 0.0;
    }

    /// Resets to the no-active-hold state
    ///
    /// Partial progress is never preserved: the next attempt starts from zero.
    pub fn clear(&mut self) {
        self.started_at = None;
        self.progress = 0.0;
    }

    /// Whether a hold attempt is currently in progress
    pub fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    /// Current progress fraction in `[0, 1]`
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Recomputes progress from wall-clock elapsed time
    ///
    /// The elapsed time is measured against the recorded start timestamp,
    /// not against tick counts, so sampling-period jitter never changes the
    /// effective deadline. Returns the elapsed duration clamped to
    /// `[0, hold_duration]`, or `None` if no hold is active.
    pub fn advance(&mut self, now: Instant, hold_duration: Duration) -> Option<Duration> {
        let started_at = self.started_at?;

        let elapsed = now
            .saturating_duration_since(started_at)
            .min(hold_duration);

        self.progress = if hold_duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f64() / hold_duration.as_secs_f64()
        };

        Some(elapsed)
    }
}
