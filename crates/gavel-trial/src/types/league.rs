//! League rulesets and their default trial setups.

use chrono::{DateTime, Datelike};
use serde::{Deserialize, Serialize};

use super::setup::TrialSetup;

/// The competition rulesets the app knows about.
///
/// The league decides the default [`TrialSetup`] for new trials and how
/// the case type is resolved from the trial date.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum League {
    /// California high-school mock trial.
    #[default]
    #[serde(rename = "california")]
    California,
    /// AMTA collegiate mock trial.
    #[serde(rename = "amta")]
    Amta,
    /// Empire (New York) mock trial.
    #[serde(rename = "empire")]
    Empire,
}

/// Whether a case is tried as criminal or civil.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CaseType {
    /// Criminal case.
    Criminal,
    /// Civil case.
    Civil,
}

impl League {
    /// The default trial setup for this league's ruleset.
    #[must_use]
    pub fn default_setup(self) -> TrialSetup {
        match self {
            Self::California => TrialSetup::default(),
            Self::Amta => TrialSetup {
                pretrial_enabled: false,
                rebuttal_max_enabled: true,
                joint_prep_closings_enabled: false,
                joint_conference_enabled: false,
                statements_separate: true,
                all_loss_enabled: false,
                reexaminations_enabled: true,
                flex_enabled: false,
                pretrial_time: None,
                statement_time: None,
                open_time: Some(300),
                close_time: Some(540),
                rebuttal_max_time: Some(180),
                joint_prep_closings_time: None,
                joint_conference_time: None,
                direct_time: 1500,
                cross_time: 1500,
            },
            Self::Empire => TrialSetup {
                pretrial_enabled: false,
                rebuttal_max_enabled: false,
                joint_prep_closings_enabled: true,
                joint_conference_enabled: true,
                statements_separate: true,
                all_loss_enabled: true,
                reexaminations_enabled: false,
                flex_enabled: false,
                pretrial_time: None,
                statement_time: None,
                open_time: Some(300),
                close_time: Some(300),
                rebuttal_max_time: None,
                joint_prep_closings_time: Some(180),
                joint_conference_time: Some(300),
                direct_time: 1440,
                cross_time: 1200,
            },
        }
    }

    /// Resolve the case type from a trial's creation date (epoch ms).
    ///
    /// California and AMTA rotate between criminal and civil cases each
    /// season; Empire runs criminal cases only.
    #[must_use]
    pub fn case_type_for(self, date_ms: i64) -> CaseType {
        match self {
            Self::Empire => CaseType::Criminal,
            Self::California | Self::Amta => {
                let year = DateTime::from_timestamp_millis(date_ms)
                    .map_or(0, |dt| dt.year());
                if year % 2 == 0 {
                    CaseType::Criminal
                } else {
                    CaseType::Civil
                }
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
