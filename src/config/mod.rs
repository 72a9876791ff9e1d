//! Settings file management for cleaning mode.
//!
//! This module owns everything about the on-disk configuration:
//!
//! - **`Settings`**: the effective hold deadline, designated modifier, and
//!   sampling period
//! - **Parsing**: nom-based `key = value` parser with line-numbered errors
//! - **Validation**: range checks after parsing
//! - **`ConfigManager`**: path resolution, load-or-default semantics, and
//!   atomic default-file creation
//!
//! A missing config file is not an error - the defaults (5.0 s hold on
//! SUPER, 50 ms sampling) apply. All writes use temp-file-then-rename so a
//! half-written config can never exist.
//!
//! # Example
//!
//! ```no_run
//! use clean_lock::config::ConfigManager;
//!
//! let manager = ConfigManager::new("/home/user/.config/clean-lock/clean-lock.conf".into());
//! let settings = manager.load_or_default()?;
//! println!("hold for {}s", settings.hold_seconds);
//! # Ok::<(), clean_lock::config::ConfigError>(())
//! ```

use atomic_write_file::AtomicWriteFile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::types::Modifier;

pub mod error;
pub mod parser;
pub mod validator;

pub use error::ConfigError;
pub use parser::ParseError;
pub use validator::{validate_settings, ValidationError};

#[cfg(test)]
mod tests;

/// Default location of the settings file, tilde-expanded at runtime
const DEFAULT_CONFIG_PATH: &str = "~/.config/clean-lock/clean-lock.conf";

/// Commented template written by `clean-lock init`
const DEFAULT_CONFIG: &str = "\
# clean-lock settings
#
# Continuous hold of the designated modifier required to unlock, in seconds.
hold_seconds = 5.0

# Designated unlock key: SUPER, CTRL, SHIFT or ALT.
modifier = SUPER

# Progress sampling period while a hold is in progress, in milliseconds.
sample_ms = 50
";

/// Effective cleaning-mode settings
///
/// Produced by the parser, checked by the validator, and handed to the UI
/// layer at startup (and on live reload while unlocked).
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Settings {
    /// Continuous hold required to unlock, in seconds
    pub hold_seconds: f64,
    /// The designated unlock key
    pub modifier: Modifier,
    /// Progress sampling period, in milliseconds
    pub sample_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hold_seconds: 5.0,
            modifier: Modifier::Super,
            sample_ms: 50,
        }
    }
}

impl Settings {
    /// The hold deadline as a `Duration`
    pub fn hold_duration(&self) -> Duration {
        Duration::from_secs_f64(self.hold_seconds)
    }

    /// The sampling period as a `Duration`
    pub fn sample_period(&self) -> Duration {
        Duration::from_millis(self.sample_ms)
    }
}

/// Manages the settings file with safe atomic operations.
///
/// Unlike a config the application cannot run without, the settings file
/// here is optional: `load_or_default()` quietly falls back to the built-in
/// defaults when no file exists. Writes only happen through `write_default`
/// (the `init` subcommand) and are atomic.
#[derive(Debug)]
pub struct ConfigManager {
    /// Path to the settings file.
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for the given settings file.
    ///
    /// The file is not required to exist; see `load_or_default`.
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Resolves the default settings path under the user's home.
    pub fn default_path() -> PathBuf {
        let expanded = shellexpand::tilde(DEFAULT_CONFIG_PATH);
        PathBuf::from(expanded.as_ref())
    }

    /// The path this manager reads and writes.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Whether the settings file exists on disk.
    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    /// Reads, parses and validates the settings file.
    ///
    /// # Errors
    ///
    /// * `ConfigError::NotFound` - the file does not exist
    /// * `ConfigError::Parse` - malformed content (with line number)
    /// * `ConfigError::Validation` - values outside the accepted ranges
    pub fn load(&self) -> Result<Settings, ConfigError> {
        if !self.config_path.exists() {
            return Err(ConfigError::NotFound(self.config_path.clone()));
        }

        let content = fs::read_to_string(&self.config_path)?;
        let settings = parser::parse_settings(&content)?;
        validator::validate_settings(&settings)?;

        Ok(settings)
    }

    /// Like `load`, but a missing file yields the defaults.
    ///
    /// Malformed or out-of-range content in an existing file is still an
    /// error - a present config must be a valid one.
    pub fn load_or_default(&self) -> Result<Settings, ConfigError> {
        if !self.config_path.exists() {
            return Ok(Settings::default());
        }

        self.load()
    }

    /// Writes the commented default settings file atomically.
    ///
    /// Creates parent directories as needed. Refuses to overwrite an
    /// existing file unless `force` is set.
    ///
    /// # Errors
    ///
    /// * `ConfigError::AlreadyExists` - file present and `force` is false
    /// * `ConfigError::ConfigDirNotWritable` - parent cannot be created
    /// * `ConfigError::WriteFailed` - the atomic write itself failed
    pub fn write_default(&self, force: bool) -> Result<(), ConfigError> {
        if self.config_path.exists() && !force {
            return Err(ConfigError::AlreadyExists(self.config_path.clone()));
        }

        if let Some(parent) = self.config_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|_| ConfigError::ConfigDirNotWritable(parent.to_path_buf()))?;
            }
        }

        let mut file = AtomicWriteFile::options()
            .open(&self.config_path)
            .map_err(|e| {
                ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e))
            })?;

        file.write_all(DEFAULT_CONFIG.as_bytes())
            .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

        file.commit()
            .map_err(|e| ConfigError::WriteFailed(format!("Failed to commit atomic write: {}", e)))?;

        Ok(())
    }
}
