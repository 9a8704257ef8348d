//! The [`TrialSetup`] configuration — toggles and per-stage allotments.

use serde::{Deserialize, Serialize};

/// Per-trial configuration snapshot.
///
/// Copied from Settings when a trial is created, so later changes to the
/// global defaults never retroactively alter an in-progress trial.
///
/// Exactly one of `statement_time` or the `open_time`/`close_time` pair
/// is meaningful, selected by `statements_separate`. Allotments whose
/// toggle is off are ignored by the accounting engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrialSetup {
    /// Whether pretrial motions are timed.
    pub pretrial_enabled: bool,
    /// Whether the rebuttal is capped separately from the closing budget.
    pub rebuttal_max_enabled: bool,
    /// Whether a joint closing-preparation period is timed.
    pub joint_prep_closings_enabled: bool,
    /// Whether a joint pretrial conference is timed.
    pub joint_conference_enabled: bool,
    /// Whether openings and closings draw from separate allotments.
    pub statements_separate: bool,
    /// Whether the all-loss deadline forfeits the round.
    pub all_loss_enabled: bool,
    /// Whether redirect/recross count toward direct/cross budgets.
    pub reexaminations_enabled: bool,
    /// Deprecated flex-timing rule. Retained for schema compatibility;
    /// always `false` and never read by the accounting engine.
    pub flex_enabled: bool,

    /// Pretrial motion allotment per side, seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pretrial_time: Option<u32>,
    /// Combined opening-plus-closing allotment per side, seconds.
    /// Used only when statements are not separate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_time: Option<u32>,
    /// Opening allotment per side, seconds. Used only when separate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_time: Option<u32>,
    /// Closing allotment per side, seconds. Used only when separate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_time: Option<u32>,
    /// Hard cap on rebuttal seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebuttal_max_time: Option<u32>,
    /// Joint closing-preparation allotment, seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joint_prep_closings_time: Option<u32>,
    /// Joint pretrial-conference allotment, seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joint_conference_time: Option<u32>,

    /// Direct-examination allotment per side, seconds. Always required.
    pub direct_time: u32,
    /// Cross-examination allotment per side, seconds. Always required.
    pub cross_time: u32,
}

impl Default for TrialSetup {
    /// Compiled defaults match the California high-school ruleset, the
    /// original app's home league.
    fn default() -> Self {
        Self {
            pretrial_enabled: true,
            rebuttal_max_enabled: false,
            joint_prep_closings_enabled: false,
            joint_conference_enabled: false,
            statements_separate: false,
            all_loss_enabled: true,
            reexaminations_enabled: true,
            flex_enabled: false,
            pretrial_time: Some(240),
            statement_time: Some(540),
            open_time: None,
            close_time: None,
            rebuttal_max_time: None,
            joint_prep_closings_time: None,
            joint_conference_time: None,
            direct_time: 1680,
            cross_time: 1500,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
