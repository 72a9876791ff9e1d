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

//! GTK4 user interface for cleaning mode
//!
//! # Architecture
//!
//! - **Model**: `SessionController` and `HoldGestureTracker` (in `core`)
//! - **View**: GTK4 screens (in `components/`)
//! - **Glue**: `App` wires key events, the sample timer, and the config
//!   watcher into the controller; `GtkDisplay` translates the controller's
//!   side-effect requests onto the window
//!
//! # Module Structure
//!
//! ```text
//! ui/
//! ├── mod.rs          // This file - exports
//! ├── app.rs          // GTK4 Application setup and event wiring
//! ├── display.rs      // DisplayControl implementation on the GTK window
//! ├── file_watcher.rs // Live settings reload
//! └── components/     // Idle and lock screens
//! ```

pub mod app;
pub mod components;
pub mod display;
pub mod file_watcher;

pub use {app::App, display::GtkDisplay};

#[cfg(test)]
mod tests;
