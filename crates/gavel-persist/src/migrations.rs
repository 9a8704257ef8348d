//! Versioned schema migrations over stored JSON blobs.
//!
//! Each stored collection carries a version-marker key alongside its
//! data key. On read, the blob is walked through the declared
//! version-to-version transforms until no transform applies, then the
//! upgraded blob and new marker are persisted back, so each migration
//! runs at most once per device.
//!
//! Transforms operate on raw [`Value`]s rather than typed structs: a
//! v1 blob by definition does not parse as the current type, so the
//! typed decode happens only after the chain has run.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::storage::KeyValueStorage;

/// One declared schema transform.
#[derive(Clone, Copy)]
pub struct Migration {
    /// Version the transform consumes.
    pub from_version: &'static str,
    /// Version the transform produces.
    pub to_version: &'static str,
    /// The transform itself. Total: must produce a valid blob for any
    /// input that was valid at `from_version`.
    pub apply: fn(Value) -> Value,
}

impl std::fmt::Debug for Migration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Migration")
            .field("from_version", &self.from_version)
            .field("to_version", &self.to_version)
            .finish_non_exhaustive()
    }
}

/// Run the migration chain starting from `version` until no declared
/// transform applies. Returns the upgraded blob and its final version.
///
/// # Panics
///
/// Panics when more than one transform consumes the same version. Two
/// transforms out of one version make the chain ambiguous, which is a
/// registration defect, not a data error.
#[must_use]
pub fn migrate(mut value: Value, version: &str, migrations: &[Migration]) -> (Value, String) {
    let mut current = version.to_string();
    loop {
        let mut matches = migrations.iter().filter(|m| m.from_version == current);
        let Some(step) = matches.next() else {
            return (value, current);
        };
        assert!(
            matches.next().is_none(),
            "ambiguous migration chain: multiple transforms from version {current}"
        );
        debug!(from = step.from_version, to = step.to_version, "applying migration");
        value = (step.apply)(value);
        current = step.to_version.to_string();
    }
}

/// The version to assume for a blob stored with no version marker.
///
/// Pre-versioning installs wrote data before markers existed, so the
/// oldest declared input version is the only safe guess. An empty
/// chain means the format never changed and the blob is current.
fn assumed_version(migrations: &[Migration], current_version: &str) -> String {
    migrations
        .iter()
        .map(|m| m.from_version)
        .min_by_key(|v| v.parse::<u64>().unwrap_or(u64::MAX))
        .unwrap_or(current_version)
        .to_string()
}

/// Read a typed item from storage, migrating stale blobs on the way.
///
/// - Absent key: the default is written out (with the current version
///   marker) and returned.
/// - Stale version marker: the chain is run, the upgraded blob is
///   persisted, then decoded.
/// - Blob that still fails to decode after migration: logged and
///   replaced with the default rather than surfaced as an error.
pub fn get_storage_item<S, T>(
    storage: &S,
    key: &str,
    version_key: &str,
    current_version: &str,
    migrations: &[Migration],
    default: T,
) -> Result<T>
where
    S: KeyValueStorage + ?Sized,
    T: Serialize + DeserializeOwned,
{
    let Some(raw) = storage.get(key)? else {
        set_storage_item(storage, key, version_key, current_version, &default)?;
        return Ok(default);
    };

    let stored_version = match storage.get(version_key)? {
        Some(Value::String(v)) => v,
        Some(other) => {
            warn!(key, ?other, "non-string version marker, assuming oldest");
            assumed_version(migrations, current_version)
        }
        None => assumed_version(migrations, current_version),
    };

    let value = if stored_version == current_version {
        raw
    } else {
        let (migrated, final_version) = migrate(raw, &stored_version, migrations);
        info!(key, from = stored_version, to = final_version, "migrated stored data");
        storage.set(key, &migrated)?;
        storage.set(version_key, &Value::String(final_version))?;
        migrated
    };

    match serde_json::from_value(value) {
        Ok(item) => Ok(item),
        Err(e) => {
            warn!(key, "stored data failed to decode, resetting to default: {e}");
            set_storage_item(storage, key, version_key, current_version, &default)?;
            Ok(default)
        }
    }
}

/// Write a typed item and stamp its version marker.
pub fn set_storage_item<S, T>(
    storage: &S,
    key: &str,
    version_key: &str,
    current_version: &str,
    item: &T,
) -> Result<()>
where
    S: KeyValueStorage + ?Sized,
    T: Serialize,
{
    storage.set(key, &serde_json::to_value(item)?)?;
    storage.set(version_key, &Value::String(current_version.to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use serde_json::json;

    fn add_flag(mut value: Value) -> Value {
        value["flag"] = json!(false);
        value
    }

    fn rename_count(mut value: Value) -> Value {
        if let Some(n) = value.as_object_mut().and_then(|o| o.remove("count")) {
            value["total"] = n;
        }
        value
    }

    const CHAIN: [Migration; 2] = [
        Migration { from_version: "1", to_version: "2", apply: add_flag },
        Migration { from_version: "2", to_version: "3", apply: rename_count },
    ];

    #[test]
    fn chain_composes_across_versions() {
        let (out, version) = migrate(json!({"count": 7}), "1", &CHAIN);
        assert_eq!(version, "3");
        assert_eq!(out, json!({"flag": false, "total": 7}));
    }

    #[test]
    fn current_version_is_untouched() {
        let (out, version) = migrate(json!({"total": 7}), "3", &CHAIN);
        assert_eq!(version, "3");
        assert_eq!(out, json!({"total": 7}));
    }

    #[test]
    #[should_panic(expected = "ambiguous migration chain")]
    fn duplicate_from_version_panics() {
        let bad = [
            Migration { from_version: "1", to_version: "2", apply: add_flag },
            Migration { from_version: "1", to_version: "3", apply: rename_count },
        ];
        let _ = migrate(json!({}), "1", &bad);
    }

    #[test]
    fn absent_key_seeds_default_and_marker() {
        let storage = MemoryStorage::new();
        let got: Vec<u32> =
            get_storage_item(&storage, "xs", "xs_v", "3", &CHAIN, vec![1, 2]).unwrap();
        assert_eq!(got, vec![1, 2]);
        assert_eq!(storage.get("xs").unwrap(), Some(json!([1, 2])));
        assert_eq!(storage.get("xs_v").unwrap(), Some(json!("3")));
    }

    #[test]
    fn stale_blob_migrates_and_persists() {
        #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        struct Item {
            flag: bool,
            total: u32,
        }

        let storage = MemoryStorage::new();
        storage.set("item", &json!({"count": 4})).unwrap();
        storage.set("item_v", &json!("1")).unwrap();

        let got: Item = get_storage_item(
            &storage,
            "item",
            "item_v",
            "3",
            &CHAIN,
            Item { flag: true, total: 0 },
        )
        .unwrap();
        assert_eq!(got, Item { flag: false, total: 4 });

        // Second read must not re-run the chain.
        assert_eq!(storage.get("item_v").unwrap(), Some(json!("3")));
        assert_eq!(storage.get("item").unwrap(), Some(json!({"flag": false, "total": 4})));
    }

    #[test]
    fn missing_marker_assumes_oldest_version() {
        let storage = MemoryStorage::new();
        storage.set("item", &json!({"count": 9})).unwrap();

        let got: Value =
            get_storage_item(&storage, "item", "item_v", "3", &CHAIN, json!({})).unwrap();
        assert_eq!(got, json!({"flag": false, "total": 9}));
    }

    #[test]
    fn missing_marker_with_empty_chain_reads_as_current() {
        let storage = MemoryStorage::new();
        storage.set("promos", &json!(["p1"])).unwrap();

        let got: Vec<String> =
            get_storage_item(&storage, "promos", "promos_v", "1", &[], Vec::new()).unwrap();
        assert_eq!(got, vec!["p1".to_string()]);
    }

    #[test]
    fn undecodable_blob_resets_to_default() {
        let storage = MemoryStorage::new();
        storage.set("xs", &json!("definitely not a list")).unwrap();
        storage.set("xs_v", &json!("3")).unwrap();

        let got: Vec<u32> = get_storage_item(&storage, "xs", "xs_v", "3", &CHAIN, vec![]).unwrap();
        assert!(got.is_empty());
        assert_eq!(storage.get("xs").unwrap(), Some(json!([])));
    }
}
