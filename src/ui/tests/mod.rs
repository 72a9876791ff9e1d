//! UI module tests
//!
//! Only the display-server-free parts are tested here: the settings
//! watcher. Widget behaviour is covered indirectly through the core
//! session tests.
