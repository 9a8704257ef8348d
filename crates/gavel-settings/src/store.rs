//! The settings store.
//!
//! One JSON blob under `settings`, versioned by
//! `settings_schema_version`. Reads migrate stale blobs through the
//! declared chain; updates are shallow merges where each provided field
//! replaces the whole corresponding sub-object.

use gavel_persist::{KeyValueStorage, Migration, get_storage_item, set_storage_item};
use gavel_trial::types::League;
use serde_json::{Value, json};
use tracing::info;

use crate::errors::Result;
use crate::types::{AdditionalSetup, SchoolAccountSettings, Settings, Theme};

/// Storage key for the settings blob.
const SETTINGS_KEY: &str = "settings";
/// Storage key for the settings version marker.
const SETTINGS_VERSION_KEY: &str = "settings_schema_version";
/// Current settings schema version.
const CURRENT_VERSION: &str = "3";

/// v1 → v2: `additionalSetup` block introduced.
fn add_additional_setup(mut value: Value) -> Value {
    if value.get("additionalSetup").is_none() {
        value["additionalSetup"] = serde_json::to_value(AdditionalSetup::default())
            .unwrap_or_else(|_| json!({}));
    }
    value
}

/// v2 → v3: `schoolAccount` block introduced.
fn add_school_account(mut value: Value) -> Value {
    if value.get("schoolAccount").is_none() {
        value["schoolAccount"] = serde_json::to_value(SchoolAccountSettings::default())
            .unwrap_or_else(|_| json!({}));
    }
    value
}

const MIGRATIONS: [Migration; 2] = [
    Migration { from_version: "1", to_version: "2", apply: add_additional_setup },
    Migration { from_version: "2", to_version: "3", apply: add_school_account },
];

/// A shallow-merge settings patch. Each `Some` field replaces the whole
/// corresponding sub-object; `None` fields are left untouched.
#[derive(Clone, Debug, Default)]
pub struct SettingsUpdate {
    /// New color scheme.
    pub theme: Option<Theme>,
    /// New trial setup template.
    pub setup: Option<gavel_trial::types::TrialSetup>,
    /// New school account link.
    pub school_account: Option<SchoolAccountSettings>,
    /// New league.
    pub league: Option<League>,
    /// New additional knobs.
    pub additional_setup: Option<AdditionalSetup>,
}

/// Settings persistence over any [`KeyValueStorage`].
#[derive(Debug)]
pub struct SettingsStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SettingsStore<S> {
    /// A store over the given storage backend.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the current settings, seeding defaults on first read and
    /// migrating stale blobs.
    pub fn get(&self) -> Result<Settings> {
        Ok(get_storage_item(
            &self.storage,
            SETTINGS_KEY,
            SETTINGS_VERSION_KEY,
            CURRENT_VERSION,
            &MIGRATIONS,
            Settings::default(),
        )?)
    }

    /// Apply a shallow-merge patch and return the stored result.
    pub fn update(&self, patch: SettingsUpdate) -> Result<Settings> {
        let mut settings = self.get()?;
        if let Some(theme) = patch.theme {
            settings.theme = theme;
        }
        if let Some(setup) = patch.setup {
            settings.setup = setup;
        }
        if let Some(school_account) = patch.school_account {
            settings.school_account = school_account;
        }
        if let Some(league) = patch.league {
            settings.league = league;
        }
        if let Some(additional_setup) = patch.additional_setup {
            settings.additional_setup = additional_setup;
        }
        self.persist(&settings)?;
        Ok(settings)
    }

    /// Switch leagues and reset the setup template to that league's
    /// defaults. Existing trials keep their own snapshots.
    pub fn set_league(&self, league: League) -> Result<Settings> {
        let mut settings = self.get()?;
        settings.league = league;
        settings.setup = league.default_setup();
        info!(league = ?league, "league changed, setup reset to league defaults");
        self.persist(&settings)?;
        Ok(settings)
    }

    fn persist(&self, settings: &Settings) -> Result<()> {
        set_storage_item(
            &self.storage,
            SETTINGS_KEY,
            SETTINGS_VERSION_KEY,
            CURRENT_VERSION,
            settings,
        )?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
