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

//! GTK4 Application wrapper
//!
//! Sets up the GTK4 application lifecycle and wires the session controller
//! into the main loop:
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates SessionController (over GtkDisplay)
//!   ├─ Builds idle/lock screens in a Stack
//!   ├─ Routes modifier key events into the controller
//!   ├─ Runs the sample-tick timeout while locked
//!   └─ Reloads settings from disk while unlocked
//! ```
//!
//! Everything runs on the GTK main thread: key events, sample ticks, and
//! the watcher poll are all main-loop callbacks, so the core never needs
//! locks.

use gtk4::prelude::*;
use gtk4::{
    gdk, Application, ApplicationWindow, EventControllerKey, PropagationPhase, Stack,
    StackTransitionType,
};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chrono::Local;

use crate::config::{ConfigError, ConfigManager, Settings};
use crate::core::gesture::HoldSignal;
use crate::core::session::{SessionController, SessionSample};
use crate::core::types::Modifier;
use crate::ui::components::{IdleScreen, LockScreen};
use crate::ui::display::GtkDisplay;
use crate::ui::file_watcher::ConfigWatcher;

/// How often the settings watcher is polled while the app runs
const WATCHER_POLL: Duration = Duration::from_millis(500);

/// GTK4 Application for cleaning mode
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// Session state machine (shared with main-loop callbacks)
    controller: Rc<RefCell<SessionController<GtkDisplay>>>,
    /// Display collaborator; window attached during UI build
    display: GtkDisplay,
    /// Effective settings (replaced on live reload)
    settings: Rc<RefCell<Settings>>,
    /// Settings file location, for the watcher and reloads
    config_path: PathBuf,
    /// Whether to enter cleaning mode immediately on startup
    start_locked: bool,
}

impl App {
    /// Creates a new App reading settings from the given path
    ///
    /// A missing settings file falls back to the defaults; a present but
    /// invalid one is an error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use clean_lock::ui::App;
    /// use std::path::PathBuf;
    ///
    /// let app = App::new(
    ///     PathBuf::from("~/.config/clean-lock/clean-lock.conf"),
    ///     false,
    /// )?;
    /// app.run(); // Blocks until the window closes
    /// # Ok::<(), clean_lock::config::ConfigError>(())
    /// ```
    pub fn new(config_path: PathBuf, start_locked: bool) -> Result<Self, ConfigError> {
        let app = Application::builder()
            .application_id("com.tidynest.clean-lock")
            .build();

        let settings = ConfigManager::new(config_path.clone()).load_or_default()?;

        // The display starts detached; the window is attached in build_ui.
        // Until then every side-effect request silently no-ops.
        let display = GtkDisplay::new();
        let controller = Rc::new(RefCell::new(SessionController::new(
            display.clone(),
            settings.hold_duration(),
        )));

        Ok(Self {
            app,
            controller,
            display,
            settings: Rc::new(RefCell::new(settings)),
            config_path,
            start_locked,
        })
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop and blocks until the application
    /// exits.
    pub fn run(self) {
        let controller = self.controller.clone();
        let display = self.display.clone();
        let settings = self.settings.clone();
        let config_path = self.config_path.clone();
        let start_locked = self.start_locked;

        self.app.connect_activate(move |app| {
            Self::build_ui(
                app,
                controller.clone(),
                display.clone(),
                settings.clone(),
                config_path.clone(),
                start_locked,
            );
        });

        // Run the application (blocks until exit); CLI args were consumed
        // by clap already
        self.app.run_with_args::<&str>(&[]);
    }

    /// Loads custom CSS styling for the application
    ///
    /// Applies the CSS from `style.css` to the default display
    /// at APPLICATION priority level.
    fn load_css() {
        let provider = gtk4::CssProvider::new();
        let css = include_str!("style.css");
        provider.load_from_string(css);

        gtk4::style_context_add_provider_for_display(
            &gdk::Display::default().expect("Could not connect to a display"),
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }

    /// Builds the main window UI and wires it to the session controller
    fn build_ui(
        app: &Application,
        controller: Rc<RefCell<SessionController<GtkDisplay>>>,
        display: GtkDisplay,
        settings: Rc<RefCell<Settings>>,
        config_path: PathBuf,
        start_locked: bool,
    ) {
        Self::load_css();

        let window = ApplicationWindow::builder()
            .application(app)
            .title("Clean Lock")
            .default_width(720)
            .default_height(480)
            .build();

        // From here on the controller's side-effect requests reach a real
        // window
        display.attach_window(&window);

        let (idle_screen, lock_screen) = {
            let current = settings.borrow();
            (
                Rc::new(IdleScreen::new(&current)),
                Rc::new(LockScreen::new(&current)),
            )
        };

        let stack = Stack::new();
        stack.set_transition_type(StackTransitionType::Crossfade);
        stack.add_named(idle_screen.widget(), Some("idle"));
        stack.add_named(lock_screen.widget(), Some("locked"));
        stack.set_visible_child_name("idle");
        window.set_child(Some(&stack));

        // ====================================================================
        // Lock action: engage the session and start the sample-tick loop
        // ====================================================================
        let controller_for_lock = controller.clone();
        let settings_for_lock = settings.clone();
        let stack_for_lock = stack.clone();
        let lock_screen_for_lock = lock_screen.clone();

        let engage = Rc::new(move || {
            let token = match controller_for_lock.borrow_mut().enable() {
                Some(token) => token,
                None => return, // already locked
            };

            stack_for_lock.set_visible_child_name("locked");
            lock_screen_for_lock.set_progress(0.0);
            eprintln!(
                "🔒 Cleaning mode enabled at {}",
                Local::now().format("%H:%M:%S")
            );

            // One timeout source per locked session. The token guard makes
            // the source remove itself once the session it belongs to is
            // gone, so a stale tick can never repaint or unlock anything.
            let controller_for_tick = controller_for_lock.clone();
            let stack_for_tick = stack_for_lock.clone();
            let lock_screen_for_tick = lock_screen_for_lock.clone();
            let period = settings_for_lock.borrow().sample_period();

            glib::timeout_add_local(period, move || {
                let sample = controller_for_tick
                    .borrow_mut()
                    .on_sample_tick(token, Instant::now());

                match sample {
                    SessionSample::Waiting => {
                        lock_screen_for_tick.set_progress(0.0);
                        glib::ControlFlow::Continue
                    }
                    SessionSample::Progress(fraction) => {
                        lock_screen_for_tick.set_progress(fraction);
                        glib::ControlFlow::Continue
                    }
                    SessionSample::Unlocked => {
                        lock_screen_for_tick.set_progress(0.0);
                        stack_for_tick.set_visible_child_name("idle");
                        eprintln!(
                            "🔓 Cleaning mode disabled at {}",
                            Local::now().format("%H:%M:%S")
                        );
                        glib::ControlFlow::Break
                    }
                    SessionSample::Stopped => glib::ControlFlow::Break,
                }
            });
        });

        {
            let engage = engage.clone();
            idle_screen.connect_lock(move || engage());
        }

        // ====================================================================
        // Key events: the designated modifier drives the unlock countdown;
        // everything else is swallowed while locked
        // ====================================================================
        let key_controller = EventControllerKey::new();
        key_controller.set_propagation_phase(PropagationPhase::Capture);

        let controller_for_press = controller.clone();
        let settings_for_press = settings.clone();
        key_controller.connect_key_pressed(move |_, key, _code, _state| {
            if !controller_for_press.borrow().is_locked() {
                return glib::Propagation::Proceed;
            }

            if modifier_matches(settings_for_press.borrow().modifier, key) {
                controller_for_press
                    .borrow_mut()
                    .on_modifier_event(true, Instant::now());
            }

            glib::Propagation::Stop
        });

        let controller_for_release = controller.clone();
        let settings_for_release = settings.clone();
        let lock_screen_for_release = lock_screen.clone();
        key_controller.connect_key_released(move |_, key, _code, _state| {
            if !modifier_matches(settings_for_release.borrow().modifier, key) {
                return;
            }

            let signal = controller_for_release
                .borrow_mut()
                .on_modifier_event(false, Instant::now());

            if signal == Some(HoldSignal::Cancelled) {
                lock_screen_for_release.set_progress(0.0);
            }
        });

        window.add_controller(key_controller);

        // ====================================================================
        // Reactivation: the compositor can kick the window out of
        // full-screen behind our back; reconcile on every focus return
        // ====================================================================
        let controller_for_focus = controller.clone();
        window.connect_is_active_notify(move |w| {
            if w.is_active() {
                controller_for_focus.borrow().on_application_reactivated();
            }
        });

        // ====================================================================
        // Live settings reload, paused while locked
        // ====================================================================
        match ConfigWatcher::new(config_path.clone()) {
            Ok(watcher) => {
                let controller_for_reload = controller.clone();
                let settings_for_reload = settings.clone();
                let idle_for_reload = idle_screen.clone();
                let lock_for_reload = lock_screen.clone();
                let reload_path = config_path;

                glib::timeout_add_local(WATCHER_POLL, move || {
                    if controller_for_reload.borrow().is_locked()
                        || !watcher.check_for_changes()
                    {
                        return glib::ControlFlow::Continue;
                    }

                    match ConfigManager::new(reload_path.clone()).load_or_default() {
                        Ok(updated) => {
                            controller_for_reload
                                .borrow_mut()
                                .set_hold_duration(updated.hold_duration());
                            idle_for_reload.update_hint(&updated);
                            lock_for_reload.update_hint(&updated);
                            *settings_for_reload.borrow_mut() = updated;
                            eprintln!("🔄 Settings reloaded from {}", reload_path.display());
                        }
                        Err(e) => eprintln!("⚠ Ignoring settings change: {}", e),
                    }

                    glib::ControlFlow::Continue
                });
            }
            Err(e) => eprintln!("⚠ Settings watcher unavailable: {}", e),
        }

        window.present();

        if start_locked {
            engage();
        }
    }
}

/// Whether a keyval is one of the physical keys for the designated modifier
///
/// Left and right variants map to the same logical key; on some layouts the
/// Super key reports as Meta, so both are accepted.
fn modifier_matches(modifier: Modifier, key: gdk::Key) -> bool {
    match modifier {
        Modifier::Super => {
            key == gdk::Key::Super_L
                || key == gdk::Key::Super_R
                || key == gdk::Key::Meta_L
                || key == gdk::Key::Meta_R
        }
        Modifier::Ctrl => key == gdk::Key::Control_L || key == gdk::Key::Control_R,
        Modifier::Shift => key == gdk::Key::Shift_L || key == gdk::Key::Shift_R,
        Modifier::Alt => key == gdk::Key::Alt_L || key == gdk::Key::Alt_R,
    }
}
