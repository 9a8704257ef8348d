//! Settings type definitions.

use gavel_core::ids::TeamId;
use gavel_trial::types::{League, TrialSetup};
use serde::{Deserialize, Serialize};

/// App color scheme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the device appearance.
    #[default]
    System,
    /// Always light.
    Light,
    /// Always dark.
    Dark,
}

/// Link to a school team account, for tournament uploads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchoolAccountSettings {
    /// Whether a school account is connected.
    pub connected: bool,
    /// The connected team, when any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
    /// Coach mode unlocks roster editing.
    pub coach_mode: bool,
}

/// Knobs that arrived after the original settings schema shipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalSetup {
    /// Default all-loss window in seconds, applied when creating a
    /// trial. Four hours covers a full round with deliberation.
    pub all_loss_duration: u32,
}

impl Default for AdditionalSetup {
    fn default() -> Self {
        Self { all_loss_duration: 4 * 60 * 60 }
    }
}

/// Process-wide settings record, stored as one JSON blob.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Color scheme preference.
    pub theme: Theme,
    /// Trial setup template snapshotted into each new trial.
    pub setup: TrialSetup,
    /// School account link.
    pub school_account: SchoolAccountSettings,
    /// Ruleset new trials are created under.
    pub league: League,
    /// Post-v1 knobs.
    pub additional_setup: AdditionalSetup,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
