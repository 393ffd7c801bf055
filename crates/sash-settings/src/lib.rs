//! Key-value settings persistence.
//!
//! A flat JSON object of scalar values, read in full at startup and
//! rewritten in full on every mutation. There is no schema versioning:
//! a file that fails to parse is a fatal error, surfaced loudly rather
//! than silently resetting state.

pub mod store;

pub use store::{default_settings_path, SettingsStore};
