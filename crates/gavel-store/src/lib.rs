//! # gavel-store
//!
//! Persistence stores for the Gavel timekeeper's collections: the
//! [`TrialStore`] (the trial list with upsert semantics, migrate-on-read,
//! and settings-snapshot creation) and the [`PromoStore`] (dismissed
//! promo cards).
//!
//! Stores are plain structs over an injected [`gavel_persist::KeyValueStorage`];
//! nothing here owns a singleton or an ambient path.

#![deny(unsafe_code)]

pub mod errors;
pub mod promo_store;
pub mod trial_store;

pub use errors::{Result, StoreError};
pub use promo_store::PromoStore;
pub use trial_store::TrialStore;
