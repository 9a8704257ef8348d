//! # gavel-sync
//!
//! The manual one-shot sync exchange for the Gavel timekeeper: a trial's
//! times and name packed into a self-identifying JSON envelope (shown as
//! a QR code by the host app), plus the contracts a host app implements
//! to upload trials to a school account backend.
//!
//! There is no sync protocol here. Export and import are a single JSON
//! round trip, and a stale or foreign envelope is rejected with a
//! distinct error so the user knows whether to rescan or update the app.

#![deny(unsafe_code)]

pub mod envelope;
pub mod remote;

pub use envelope::{SYNC_KEY, SYNC_SCHEMA_VERSION, SyncError, SyncPayload, export_trial, import_envelope};
pub use remote::{Connectivity, RemoteError, TrialRemote};
