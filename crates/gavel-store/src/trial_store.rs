//! The trial store.
//!
//! All trials live in one JSON array under the `trials` key, versioned
//! by `trials_schema_version`. Saves upsert by id; creation snapshots
//! the current Settings so later settings edits never touch an existing
//! trial.

use chrono::Utc;
use gavel_core::ids::TrialId;
use gavel_persist::{KeyValueStorage, Migration, get_storage_item, set_storage_item};
use gavel_settings::Settings;
use gavel_trial::types::{Trial, TrialDetails, TrialTimes, WitnessSlots};
use gavel_trial::validate::validate_trial_name;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::errors::Result;

/// Storage key for the trial collection.
const TRIALS_KEY: &str = "trials";
/// Storage key for the trial collection's version marker.
const TRIALS_VERSION_KEY: &str = "trials_schema_version";
/// Current trial schema version.
pub const CURRENT_TRIAL_VERSION: &str = "3";

fn for_each_trial(value: Value, f: impl Fn(&mut serde_json::Map<String, Value>)) -> Value {
    match value {
        Value::Array(trials) => Value::Array(
            trials
                .into_iter()
                .map(|mut trial| {
                    if let Some(obj) = trial.as_object_mut() {
                        f(obj);
                    }
                    trial
                })
                .collect(),
        ),
        other => other,
    }
}

/// v1 → v2: witness slots and the joint stages arrived.
fn add_witnesses_and_joint_stages(value: Value) -> Value {
    for_each_trial(value, |trial| {
        if !trial.contains_key("witnesses") {
            let _ = trial.insert(
                "witnesses".to_string(),
                serde_json::to_value(WitnessSlots::default()).unwrap_or_else(|_| json!({})),
            );
        }
        if let Some(times) = trial.get_mut("times").and_then(Value::as_object_mut) {
            if !times.contains_key("joint") {
                let _ = times.insert(
                    "joint".to_string(),
                    json!({"prepClosings": 0, "conference": 0}),
                );
            }
        }
        if let Some(setup) = trial.get_mut("setup").and_then(Value::as_object_mut) {
            setup
                .entry("jointPrepClosingsEnabled".to_string())
                .or_insert(json!(false));
            setup
                .entry("jointConferenceEnabled".to_string())
                .or_insert(json!(false));
        }
    })
}

/// v2 → v3: flex time was retired; the field stays but always reads
/// `false`, and the optional upload `details` block arrived (absent on
/// old records, which decodes as `None`).
fn retire_flex_time(value: Value) -> Value {
    for_each_trial(value, |trial| {
        if let Some(setup) = trial.get_mut("setup").and_then(Value::as_object_mut) {
            let _ = setup.insert("flexEnabled".to_string(), json!(false));
        }
    })
}

const MIGRATIONS: [Migration; 2] = [
    Migration { from_version: "1", to_version: "2", apply: add_witnesses_and_joint_stages },
    Migration { from_version: "2", to_version: "3", apply: retire_flex_time },
];

/// Trial persistence over any [`KeyValueStorage`].
#[derive(Debug)]
pub struct TrialStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> TrialStore<S> {
    /// A store over the given storage backend.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All trials, most recent first. Stale blobs migrate on the way in.
    pub fn list(&self) -> Result<Vec<Trial>> {
        let mut trials: Vec<Trial> = get_storage_item(
            &self.storage,
            TRIALS_KEY,
            TRIALS_VERSION_KEY,
            CURRENT_TRIAL_VERSION,
            &MIGRATIONS,
            Vec::new(),
        )?;
        trials.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(trials)
    }

    /// Upsert a trial by id: replace in place when present, append when
    /// new. Saving the same state twice is a no-op.
    pub fn save(&self, trial: &Trial) -> Result<()> {
        let mut trials = self.list()?;
        match trials.iter_mut().find(|t| t.id == trial.id) {
            Some(existing) => *existing = trial.clone(),
            None => trials.push(trial.clone()),
        }
        debug!(id = %trial.id, "trial saved");
        self.persist(&trials)
    }

    /// Remove a trial by id. No-op when absent.
    pub fn delete(&self, id: &TrialId) -> Result<()> {
        let mut trials = self.list()?;
        trials.retain(|t| &t.id != id);
        self.persist(&trials)
    }

    /// Create and persist a new trial from the current Settings.
    ///
    /// Snapshots the Settings' setup and league so later settings edits
    /// leave this trial alone. Flex time is retired and always starts
    /// `false` regardless of what the snapshot carried. Every stage
    /// starts at zero seconds.
    pub fn create(
        &self,
        settings: &Settings,
        name: &str,
        loss: i64,
        witnesses: WitnessSlots,
        details: Option<TrialDetails>,
    ) -> Result<Trial> {
        validate_trial_name(name)?;

        let mut setup = settings.setup.clone();
        setup.flex_enabled = false;

        let trial = Trial {
            id: TrialId::new(),
            league: settings.league,
            name: name.trim().to_string(),
            date: Utc::now().timestamp_millis(),
            stage: Trial::initial_stage(&setup),
            setup,
            times: TrialTimes::default(),
            witnesses,
            loss,
            details,
        };
        info!(id = %trial.id, league = ?trial.league, "trial created");
        self.save(&trial)?;
        Ok(trial)
    }

    fn persist(&self, trials: &[Trial]) -> Result<()> {
        set_storage_item(
            &self.storage,
            TRIALS_KEY,
            TRIALS_VERSION_KEY,
            CURRENT_TRIAL_VERSION,
            &trials,
        )?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
