//! Reusable UI screens
//!
//! Each component wraps its root widget and exposes a `widget()` accessor
//! plus the small mutation surface the app wiring needs.

mod idle_screen;
mod lock_screen;

pub use idle_screen::IdleScreen;
pub use lock_screen::LockScreen;

use crate::config::Settings;

/// Human-readable unlock instruction for the current settings
///
/// Whole-second deadlines print without a decimal point ("5 seconds"),
/// fractional ones keep it ("2.5 seconds").
pub(crate) fn unlock_hint(settings: &Settings) -> String {
    let seconds = if settings.hold_seconds.fract() == 0.0 {
        format!("{}", settings.hold_seconds as u64)
    } else {
        format!("{}", settings.hold_seconds)
    };

    format!("Hold {} for {} seconds to unlock", settings.modifier, seconds)
}
