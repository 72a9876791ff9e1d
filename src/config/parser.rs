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

//! src/config/parser.rs
//!
//! Settings file parser
//!
//! Parses the `key = value` settings format:
//!
//! ```text
//! # Continuous hold required to unlock, in seconds
//! hold_seconds = 5.0
//! modifier = SUPER      # designated unlock key
//! sample_ms = 50
//! ```
//!
//! The parser handles comments (full-line and trailing), blank lines, and
//! reports errors with line numbers. It only reads and structures data -
//! range checking happens in validator.rs after parsing.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space0},
};
use nom::{IResult, Parser};
use thiserror::Error;

use crate::config::Settings;
use crate::core::types::Modifier;

/// Parse errors with line number context
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },

    #[error("Unknown setting '{key}' on line {line}")]
    UnknownKey { key: String, line: usize },

    #[error("Invalid value for '{key}' on line {line}: {message}")]
    InvalidValue {
        key: String,
        line: usize,
        message: String,
    },
}

/// Parse a complete settings file
///
/// Starts from `Settings::default()` and applies each assignment in file
/// order, so later lines win over earlier ones and omitted keys keep their
/// defaults.
///
/// # Arguments
/// * `content` - The full settings file content as a string
///
/// # Returns
/// The effective settings, or a ParseError naming the offending line
///
/// # Example
/// ```
/// use clean_lock::config::parser::parse_settings;
///
/// let settings = parse_settings("hold_seconds = 2.5\nmodifier = CTRL\n")?;
/// assert_eq!(settings.hold_seconds, 2.5);
/// # Ok::<(), clean_lock::config::parser::ParseError>(())
/// ```
pub fn parse_settings(content: &str) -> Result<Settings, ParseError> {
    let mut settings = Settings::default();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1; // Human-readable numbers start at 1

        // Skip empty lines and comments
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        match parse_setting_line(line_trimmed) {
            Ok((rest, (key, value))) => {
                // Anything after the value must be a trailing comment
                let rest = rest.trim_start();
                if !rest.is_empty() && !rest.starts_with('#') {
                    return Err(ParseError::InvalidSyntax {
                        line: line_num,
                        message: format!("unexpected trailing input: '{}'", rest),
                    });
                }

                apply_setting(&mut settings, key, value, line_num)?;
            }
            Err(e) => {
                return Err(ParseError::InvalidSyntax {
                    line: line_num,
                    message: format!("{:?}", e),
                });
            }
        }
    }

    Ok(settings)
}

/// Parse a single `key = value` line
///
/// Returns the key, the value with surrounding whitespace removed, and any
/// unconsumed remainder (trailing comments are handled by the caller).
pub fn parse_setting_line(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, key) = take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)?;
    let (input, _) = (space0, char('='), space0).parse(input)?;
    let (input, value) = take_while1(|c: char| c != '\n' && c != '#')(input)?;

    Ok((input, (key, value.trim())))
}

/// Apply one parsed assignment to the settings
///
/// Unknown keys are rejected rather than ignored so typos in the config
/// file surface immediately instead of silently keeping a default.
fn apply_setting(
    settings: &mut Settings,
    key: &str,
    value: &str,
    line: usize,
) -> Result<(), ParseError> {
    match key {
        "hold_seconds" => {
            settings.hold_seconds = value.parse::<f64>().map_err(|e| ParseError::InvalidValue {
                key: key.to_string(),
                line,
                message: e.to_string(),
            })?;
        }
        "modifier" => {
            settings.modifier =
                Modifier::from_name(value).ok_or_else(|| ParseError::InvalidValue {
                    key: key.to_string(),
                    line,
                    message: format!("unknown modifier '{}'", value),
                })?;
        }
        "sample_ms" => {
            settings.sample_ms = value.parse::<u64>().map_err(|e| ParseError::InvalidValue {
                key: key.to_string(),
                line,
                message: e.to_string(),
            })?;
        }
        _ => {
            return Err(ParseError::UnknownKey {
                key: key.to_string(),
                line,
            });
        }
    }

    Ok(())
}
