//! Lock screen shown while cleaning mode is active
//!
//! Dark full-surface takeover with the lock icon, the unlock instruction,
//! and a progress bar rendering the hold fraction reported by the session
//! controller on every sample tick.

use gtk4::prelude::*;
use gtk4::{Align, Image, Label, Orientation, ProgressBar};

use crate::config::Settings;
use crate::ui::components::unlock_hint;

/// The locked view: icon, labels, and hold progress
pub struct LockScreen {
    container: gtk4::Box,
    progress: ProgressBar,
    hint: Label,
}

impl LockScreen {
    /// Builds the screen with hints derived from the current settings
    pub fn new(settings: &Settings) -> Self {
        let container = gtk4::Box::new(Orientation::Vertical, 0);
        container.set_hexpand(true);
        container.set_vexpand(true);
        container.add_css_class("lock-screen");

        let inner = gtk4::Box::new(Orientation::Vertical, 24);
        inner.set_valign(Align::Center);
        inner.set_halign(Align::Center);
        inner.set_vexpand(true);

        let icon = Image::from_icon_name("system-lock-screen-symbolic");
        icon.set_pixel_size(96);
        icon.add_css_class("lock-icon");
        inner.append(&icon);

        let title = Label::new(Some("Cleaning Mode Enabled"));
        title.add_css_class("lock-title");
        inner.append(&title);

        let hint = Label::new(None);
        hint.add_css_class("lock-hint");
        inner.append(&hint);

        let progress = ProgressBar::new();
        progress.set_fraction(0.0);
        progress.set_size_request(360, -1);
        progress.add_css_class("unlock-progress");
        inner.append(&progress);

        container.append(&inner);

        let screen = Self {
            container,
            progress,
            hint,
        };
        screen.update_hint(settings);
        screen
    }

    /// Root widget for embedding in the stack
    pub fn widget(&self) -> &gtk4::Box {
        &self.container
    }

    /// Renders the current hold fraction
    pub fn set_progress(&self, fraction: f64) {
        self.progress.set_fraction(fraction.clamp(0.0, 1.0));
    }

    /// Refreshes the gesture hint after a settings change
    pub fn update_hint(&self, settings: &Settings) {
        self.hint.set_text(&unlock_hint(settings));
    }
}
