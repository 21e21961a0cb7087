//! File loading for profiles and engine settings.
//!
//! Thin I/O shell around `lin-core`: read a file, pick a format, hand the
//! parsed value to the engine. All parsing leniency lives in the core types.

pub mod error;
pub mod loader;

pub use error::{LoadError, Result};
pub use loader::{Format, load_profile, load_settings, parse_profile_str, parse_settings_str};
