//! # gavel-persist
//!
//! Key-value JSON persistence for the Gavel timekeeper.
//!
//! Every stored collection lives under a string key as a single JSON
//! blob, with a companion version-marker key recording which schema
//! generation the blob was written under. [`storage`] provides the
//! [`KeyValueStorage`] abstraction with a file-backed implementation
//! and an in-memory test double; [`migrations`] runs declared
//! version-to-version transforms on read so stale blobs are upgraded
//! exactly once and persisted back.

#![deny(unsafe_code)]

pub mod errors;
pub mod migrations;
pub mod storage;

pub use errors::{PersistError, Result};
pub use migrations::{Migration, get_storage_item, migrate, set_storage_item};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
