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

//! Clean Lock
//!
//! Keyboard cleaning mode for Linux desktops: locks input and takes over
//! the display while you wipe down your machine, unlocking only after the
//! designated modifier key is held continuously for a configurable
//! duration (5 seconds by default).
//!
//! # Features
//!
//! - **Hold-to-unlock gesture:** continuous wall-clock hold against a
//!   deadline, with live progress feedback
//! - **Full takeover:** cursor hidden, full-screen, window chrome disabled
//!   while locked
//! - **Self-healing display state:** full-screen is re-asserted whenever
//!   the compositor disturbs it
//! - **Configurable:** hold duration, designated key, and sampling period
//!   from a simple settings file, live-reloaded while unlocked
//!
//! # Architecture
//!
//! - **`core`:** the lock/unlock state machine (session controller, hold
//!   gesture tracker) - no GTK, fully unit-testable
//! - **`config`:** settings file parsing, validation, and atomic writes
//! - **`ui`:** GTK4 screens and main-loop wiring
//!
//! # Limitations
//!
//! Compositor-level shortcuts (workspace gestures, virtual terminal
//! switching) cannot be intercepted by an unprivileged process. This is a
//! best-effort UX lockout for cleaning sessions, not a security boundary.
//!
//! # Examples
//!
//! ## Driving the state machine directly
//!
//! ```
//! use clean_lock::core::{DisplayControl, SessionController, SessionSample, SessionState};
//! use std::time::{Duration, Instant};
//!
//! struct Headless;
//! impl DisplayControl for Headless {
//!     fn hide_cursor(&self) {}
//!     fn show_cursor(&self) {}
//!     fn enter_full_screen(&self) {}
//!     fn exit_full_screen(&self) {}
//!     fn set_window_controls_enabled(&self, _enabled: bool) {}
//! }
//!
//! let mut session = SessionController::new(Headless, Duration::from_secs(5));
//! let token = session.enable().expect("was unlocked");
//!
//! let t0 = Instant::now();
//! session.on_modifier_event(true, t0);
//! let sample = session.on_sample_tick(token, t0 + Duration::from_secs(5));
//!
//! assert_eq!(sample, SessionSample::Unlocked);
//! assert_eq!(session.state(), SessionState::Unlocked);
//! ```
//!
//! ## Running the GUI
//!
//! ```no_run
//! use clean_lock::config::ConfigManager;
//! use clean_lock::ui::App;
//!
//! let config_path = ConfigManager::default_path();
//! let app = App::new(config_path, false)?;
//! app.run(); // Blocks until the window closes
//! # Ok::<(), clean_lock::config::ConfigError>(())
//! ```

pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use self::config::{ConfigManager, Settings};
pub use self::core::{HoldGestureTracker, Modifier, SessionController, SessionState};
