//! The manual sync envelope.
//!
//! Export packs a trial's times and name into
//! `{key, version, data: {times, name}}`. Import verifies `key` and
//! `version` before touching `data`, and each failure mode is reported
//! distinctly: garbage input, an envelope from some other app, and an
//! envelope from an app release on a different trial schema all need
//! different user guidance.

use gavel_store::trial_store::CURRENT_TRIAL_VERSION;
use gavel_trial::types::{Trial, TrialTimes};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Envelope discriminator. Anything else scanned from a QR code is not
/// ours.
pub const SYNC_KEY: &str = "gavel.trial.sync";

/// Envelope schema version. Tied to the trial schema: a times blob only
/// makes sense to a device on the same trial format.
pub const SYNC_SCHEMA_VERSION: &str = CURRENT_TRIAL_VERSION;

/// The data a sync exchange carries: stage times plus the display name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncPayload {
    /// Accumulated seconds per stage.
    pub times: TrialTimes,
    /// The trial's display name.
    pub name: String,
}

#[derive(Serialize, Deserialize)]
struct Envelope {
    key: String,
    version: String,
    data: SyncPayload,
}

/// Sync import failures, one per user remedy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyncError {
    /// The scanned text is not JSON at all.
    #[error("sync payload is not valid JSON")]
    NotJson,

    /// A JSON envelope, but not one of ours.
    #[error("sync payload has wrong key: {found}")]
    WrongKey {
        /// The key the envelope carried.
        found: String,
    },

    /// One of ours, but from an app release on a different trial schema.
    #[error("sync payload has wrong schema version: {found}")]
    WrongSchema {
        /// The version the envelope carried.
        found: String,
    },
}

/// Pack a trial into the envelope JSON.
pub fn export_trial(trial: &Trial) -> String {
    let envelope = Envelope {
        key: SYNC_KEY.to_string(),
        version: SYNC_SCHEMA_VERSION.to_string(),
        data: SyncPayload { times: trial.times, name: trial.name.clone() },
    };
    serde_json::to_string(&envelope).expect("envelope has no unserializable fields")
}

/// Unpack and verify an envelope.
pub fn import_envelope(raw: &str) -> Result<SyncPayload, SyncError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|_| SyncError::NotJson)?;

    let key = value.get("key").and_then(|k| k.as_str()).unwrap_or_default();
    if key != SYNC_KEY {
        return Err(SyncError::WrongKey { found: key.to_string() });
    }

    let version = value.get("version").and_then(|v| v.as_str()).unwrap_or_default();
    if version != SYNC_SCHEMA_VERSION {
        return Err(SyncError::WrongSchema { found: version.to_string() });
    }

    let envelope: Envelope = serde_json::from_value(value).map_err(|_| SyncError::NotJson)?;
    Ok(envelope.data)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use gavel_core::ids::TrialId;
    use gavel_trial::stage::Stage;
    use gavel_trial::types::{League, TrialSetup, WitnessSlots};

    fn sample_trial() -> Trial {
        let mut times = TrialTimes::default();
        times.open.pros = 240;
        Trial {
            id: TrialId::from("t"),
            league: League::California,
            name: "Sync me".to_string(),
            date: 0,
            setup: TrialSetup::default(),
            stage: Stage::OpenPros,
            times,
            witnesses: WitnessSlots::default(),
            loss: 0,
            details: None,
        }
    }

    #[test]
    fn export_then_import_round_trips() {
        let trial = sample_trial();
        let payload = import_envelope(&export_trial(&trial)).unwrap();
        assert_eq!(payload.name, "Sync me");
        assert_eq!(payload.times, trial.times);
    }

    #[test]
    fn export_carries_key_and_version_header() {
        let raw = export_trial(&sample_trial());
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["key"], SYNC_KEY);
        assert_eq!(value["version"], SYNC_SCHEMA_VERSION);
        assert_eq!(value["data"]["name"], "Sync me");
    }

    #[test]
    fn garbage_is_not_json() {
        assert_matches!(import_envelope("@@@not json@@@"), Err(SyncError::NotJson));
        assert_matches!(import_envelope(""), Err(SyncError::NotJson));
    }

    #[test]
    fn foreign_envelope_reports_wrong_key() {
        let raw = r#"{"key": "someone.elses.app", "version": "3", "data": {}}"#;
        assert_matches!(
            import_envelope(raw),
            Err(SyncError::WrongKey { found }) if found == "someone.elses.app"
        );
    }

    #[test]
    fn stale_envelope_reports_wrong_schema() {
        let raw = format!(
            r#"{{"key": "{SYNC_KEY}", "version": "2", "data": {{"times": {{}}, "name": "x"}}}}"#
        );
        assert_matches!(
            import_envelope(&raw),
            Err(SyncError::WrongSchema { found }) if found == "2"
        );
    }

    #[test]
    fn key_is_checked_before_schema() {
        // A foreign envelope with a stale version is still "wrong key":
        // telling the user to update the app would be misdirection.
        let raw = r#"{"key": "someone.elses.app", "version": "1", "data": {}}"#;
        assert_matches!(import_envelope(raw), Err(SyncError::WrongKey { .. }));
    }

    #[test]
    fn valid_header_with_malformed_data_is_not_json() {
        let raw = format!(r#"{{"key": "{SYNC_KEY}", "version": "{SYNC_SCHEMA_VERSION}"}}"#);
        assert_matches!(import_envelope(&raw), Err(SyncError::NotJson));
    }
}
