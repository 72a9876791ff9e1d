//! DisplayControl implementation on the GTK4 window
//!
//! Translates the session controller's side-effect requests (cursor,
//! full-screen, window chrome) onto the application window. Every call is
//! best-effort: before the window is built, or after it is gone, the
//! requests silently no-op and the next state change retries naturally.

use gtk4::prelude::*;
use gtk4::ApplicationWindow;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::core::session::DisplayControl;

/// Window-backed display collaborator
///
/// Created before the window exists and attached to it during UI build,
/// so the session controller can be constructed first. Clones share the
/// same underlying window slot.
#[derive(Clone)]
pub struct GtkDisplay {
    /// The application window, once built
    window: Rc<RefCell<Option<ApplicationWindow>>>,
    /// Whether window chrome is currently allowed to act
    controls_enabled: Rc<Cell<bool>>,
}

impl GtkDisplay {
    /// Creates a detached display collaborator (window not yet built)
    pub fn new() -> Self {
        Self {
            window: Rc::new(RefCell::new(None)),
            controls_enabled: Rc::new(Cell::new(true)),
        }
    }

    /// Attaches the built window and installs the close-request veto
    ///
    /// While window controls are disabled, close requests (including
    /// Alt+F4 style shortcuts routed through the window manager) are
    /// swallowed.
    pub fn attach_window(&self, window: &ApplicationWindow) {
        *self.window.borrow_mut() = Some(window.clone());

        let controls_enabled = self.controls_enabled.clone();
        window.connect_close_request(move |_| {
            if controls_enabled.get() {
                glib::Propagation::Proceed
            } else {
                glib::Propagation::Stop
            }
        });
    }
}

impl Default for GtkDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayControl for GtkDisplay {
    fn hide_cursor(&self) {
        if let Some(window) = self.window.borrow().as_ref() {
            window.set_cursor_from_name(Some("none"));
        }
    }

    fn show_cursor(&self) {
        if let Some(window) = self.window.borrow().as_ref() {
            // Unsetting restores the inherited default cursor
            window.set_cursor_from_name(None);
        }
    }

    fn enter_full_screen(&self) {
        if let Some(window) = self.window.borrow().as_ref() {
            window.fullscreen();
        }
    }

    fn exit_full_screen(&self) {
        if let Some(window) = self.window.borrow().as_ref() {
            window.unfullscreen();
        }
    }

    fn set_window_controls_enabled(&self, enabled: bool) {
        self.controls_enabled.set(enabled);

        if let Some(window) = self.window.borrow().as_ref() {
            window.set_deletable(enabled);
        }
    }
}
