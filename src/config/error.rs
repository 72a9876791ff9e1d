use std::path::PathBuf;
use thiserror::Error;

use crate::config::parser::ParseError;
use crate::config::validator::ValidationError;

/// Errors that can occur during configuration management.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    /// Refused to overwrite an existing config file without --force.
    #[error("Config file already exists: {0}")]
    AlreadyExists(PathBuf),
    /// Config directory cannot be created or written to.
    #[error("Config directory not writable: {0}")]
    ConfigDirNotWritable(PathBuf),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// Config file content could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Parsed settings are out of the accepted ranges.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
