//! src/config/validator.rs
//!
//! Settings range validation
//!
//! Runs after parsing and rejects values that would make the lock unusable:
//! a hold deadline short enough to trigger accidentally, long enough to feel
//! broken, or a sampling period that cannot produce smooth progress
//! feedback.

use thiserror::Error;

use crate::config::Settings;

/// Shortest accepted hold deadline, in seconds
pub const MIN_HOLD_SECONDS: f64 = 0.5;
/// Longest accepted hold deadline, in seconds
pub const MAX_HOLD_SECONDS: f64 = 60.0;
/// Shortest accepted sampling period, in milliseconds
pub const MIN_SAMPLE_MS: u64 = 10;
/// Longest accepted sampling period, in milliseconds
pub const MAX_SAMPLE_MS: u64 = 1000;

/// Settings rejected by range validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("hold_seconds must be between 0.5 and 60, found {0}")]
    HoldOutOfRange(f64),

    #[error("sample_ms must be between 10 and 1000, found {0}")]
    SamplePeriodOutOfRange(u64),

    #[error("sample_ms ({sample_ms}) must not exceed the hold deadline ({hold_seconds}s)")]
    SampleLongerThanHold { sample_ms: u64, hold_seconds: f64 },
}

/// Validates parsed settings against the accepted ranges
///
/// # Returns
///
/// * `Ok(())` - Settings are usable
/// * `Err(ValidationError)` - First violated constraint
pub fn validate_settings(settings: &Settings) -> Result<(), ValidationError> {
    if !settings.hold_seconds.is_finite()
        || settings.hold_seconds < MIN_HOLD_SECONDS
        || settings.hold_seconds > MAX_HOLD_SECONDS
    {
        return Err(ValidationError::HoldOutOfRange(settings.hold_seconds));
    }

    if settings.sample_ms < MIN_SAMPLE_MS || settings.sample_ms > MAX_SAMPLE_MS {
        return Err(ValidationError::SamplePeriodOutOfRange(settings.sample_ms));
    }

    if settings.sample_ms as f64 > settings.hold_seconds * 1000.0 {
        return Err(ValidationError::SampleLongerThanHold {
            sample_ms: settings.sample_ms,
            hold_seconds: settings.hold_seconds,
        });
    }

    Ok(())
}
