//! Config module tests
//!
//! Contains test suites for settings management:
//! - Parser tests (format, comments, aliases, error line numbers)
//! - Validator tests (accepted ranges)
//! - Manager tests (load-or-default, atomic init)

#[cfg(test)]
mod manager_tests;
