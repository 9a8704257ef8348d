//! The [`Trial`] record and its satellite types.

use gavel_core::ids::{TournamentId, TrialId};
use serde::{Deserialize, Serialize};

use super::league::League;
use super::setup::TrialSetup;
use super::times::TrialTimes;
use crate::stage::{Side, Stage};

/// The ordered witness-call assignment for both sides.
///
/// Three slots per side, each empty until the timekeeper picks a witness.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WitnessSlots {
    /// Prosecution's called witnesses, in call order.
    pub pros: [Option<String>; 3],
    /// Defense's called witnesses, in call order.
    pub def: [Option<String>; 3],
}

impl WitnessSlots {
    /// Whether all six slots have been assigned.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pros.iter().chain(self.def.iter()).all(Option::is_some)
    }
}

/// Tournament association, present only on trials linked to a team round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrialDetails {
    /// Tournament the round belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tournament_id: Option<TournamentId>,
    /// Round number within the tournament.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,
    /// Which side the team argued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
}

/// A single timed mock-trial session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trial {
    /// Opaque unique identifier, assigned at creation.
    pub id: TrialId,
    /// Ruleset this trial was created under.
    pub league: League,
    /// User-editable display name.
    pub name: String,
    /// Creation timestamp, epoch milliseconds. Drives most-recent-first
    /// ordering and case-type resolution.
    pub date: i64,
    /// Configuration snapshot taken from Settings at creation time.
    pub setup: TrialSetup,
    /// Current position in the stage catalog.
    pub stage: Stage,
    /// Accumulated seconds per stage.
    pub times: TrialTimes,
    /// Witness-call assignment.
    pub witnesses: WitnessSlots,
    /// All-loss deadline, epoch milliseconds. The round is forfeited
    /// after this instant regardless of time remaining.
    pub loss: i64,
    /// Tournament association; absent for local-only trials.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub details: Option<TrialDetails>,
}

impl Trial {
    /// The initial stage for a given setup: the pretrial motion when
    /// pretrial is timed, otherwise the prosecution opening.
    #[must_use]
    pub fn initial_stage(setup: &TrialSetup) -> Stage {
        if setup.pretrial_enabled {
            Stage::PretrialPros
        } else {
            Stage::OpenPros
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
