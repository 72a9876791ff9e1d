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

//! src/core/mod.rs
//!
//! Core session state machine
//!
//! This module contains the lock/unlock logic for cleaning mode:
//! - Type definitions for the session state and hold gesture
//! - `HoldGestureTracker`: continuous key-hold detection against a deadline
//! - `SessionController`: lock/unlock transitions and side-effect
//!   orchestration through the `DisplayControl` trait
//!
//! All business logic is isolated from UI and I/O concerns to enable
//! comprehensive unit testing without requiring a display server.

pub mod gesture;
pub mod session;
pub mod types;

pub use gesture::{HoldGestureTracker, HoldSignal, MonitoringToken, TickOutcome, TrackerPhase};
pub use session::{DisplayControl, SessionController, SessionSample};
pub use types::*;

#[cfg(test)]
mod tests;
