//! The dismissed-promo store.
//!
//! A flat list of promo card ids the user has dismissed, so a card
//! never comes back once closed. Single-version schema; the empty
//! migration chain still goes through the versioned read path so a
//! future format change only has to add a transform.

use gavel_core::ids::PromoId;
use gavel_persist::{KeyValueStorage, get_storage_item, set_storage_item};

use crate::errors::Result;

/// Storage key for the dismissed-promo list.
const PROMOS_KEY: &str = "promos";
/// Storage key for the promo list's version marker.
const PROMOS_VERSION_KEY: &str = "promos_schema_version";
/// Current promo schema version.
const CURRENT_VERSION: &str = "1";

/// Dismissed-promo persistence over any [`KeyValueStorage`].
#[derive(Debug)]
pub struct PromoStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> PromoStore<S> {
    /// A store over the given storage backend.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All dismissed promo ids.
    pub fn dismissed(&self) -> Result<Vec<PromoId>> {
        Ok(get_storage_item(
            &self.storage,
            PROMOS_KEY,
            PROMOS_VERSION_KEY,
            CURRENT_VERSION,
            &[],
            Vec::new(),
        )?)
    }

    /// Record a dismissal. Dismissing the same promo twice is a no-op.
    pub fn dismiss(&self, id: PromoId) -> Result<()> {
        let mut dismissed = self.dismissed()?;
        if dismissed.contains(&id) {
            return Ok(());
        }
        dismissed.push(id);
        set_storage_item(
            &self.storage,
            PROMOS_KEY,
            PROMOS_VERSION_KEY,
            CURRENT_VERSION,
            &dismissed,
        )?;
        Ok(())
    }

    /// Whether a promo has been dismissed.
    pub fn is_dismissed(&self, id: &PromoId) -> Result<bool> {
        Ok(self.dismissed()?.contains(id))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
