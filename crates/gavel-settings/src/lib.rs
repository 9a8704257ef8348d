//! # gavel-settings
//!
//! Process-wide settings for the Gavel timekeeper: the [`Settings`]
//! record (theme, default trial setup, league, school-account link,
//! extra knobs) and the [`SettingsStore`] that persists it with
//! migrate-on-read and shallow-merge updates.
//!
//! Settings are the template; each trial snapshots `setup` and `league`
//! at creation and is immune to later settings edits.

#![deny(unsafe_code)]

pub mod errors;
pub mod store;
pub mod types;

pub use errors::{Result, SettingsError};
pub use store::{SettingsStore, SettingsUpdate};
pub use types::{AdditionalSetup, SchoolAccountSettings, Settings, Theme};
