//! Idle screen shown while the session is unlocked
//!
//! A single prominent lock button plus the unlock instruction, mirroring
//! what the lock screen will ask for.

use gtk4::prelude::*;
use gtk4::{Align, Button, Label, Orientation};

use crate::config::Settings;
use crate::ui::components::unlock_hint;

/// The unlocked view: lock button and gesture hint
pub struct IdleScreen {
    container: gtk4::Box,
    lock_button: Button,
    hint: Label,
}

impl IdleScreen {
    /// Builds the screen with hints derived from the current settings
    pub fn new(settings: &Settings) -> Self {
        let container = gtk4::Box::new(Orientation::Vertical, 24);
        container.set_valign(Align::Center);
        container.set_halign(Align::Center);
        container.add_css_class("idle-screen");

        let lock_button = Button::builder().label("Lock My Screen").build();
        lock_button.add_css_class("lock-button");
        lock_button.add_css_class("suggested-action");
        container.append(&lock_button);

        let hint = Label::new(None);
        hint.add_css_class("hint-label");
        container.append(&hint);

        let screen = Self {
            container,
            lock_button,
            hint,
        };
        screen.update_hint(settings);
        screen
    }

    /// Root widget for embedding in the stack
    pub fn widget(&self) -> &gtk4::Box {
        &self.container
    }

    /// Invokes `callback` when the lock button is clicked
    pub fn connect_lock<F: Fn() + 'static>(&self, callback: F) {
        self.lock_button.connect_clicked(move |_| callback());
    }

    /// Refreshes the gesture hint after a settings change
    pub fn update_hint(&self, settings: &Settings) {
        self.hint.set_text(&unlock_hint(settings));
    }
}
