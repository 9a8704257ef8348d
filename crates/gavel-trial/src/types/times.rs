//! The [`TrialTimes`] record — accumulated seconds per stage.
//!
//! Every stage in the catalog maps onto exactly one leaf of this
//! structure, and every leaf defaults to zero, so a freshly created trial
//! already carries a value for each stage (never a missing field).
//!
//! The stage-to-leaf mapping lives here as an exhaustive `match`, which
//! is the compile-time-checked rendition of the original app's
//! string-keyed path table.

use serde::{Deserialize, Serialize};

use crate::stage::Stage;

/// Seconds recorded for one stage on each side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SidePair {
    /// Prosecution seconds.
    pub pros: u32,
    /// Defense seconds.
    pub def: u32,
}

/// The four examination phases for one witness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WitnessExamination {
    /// Direct examination seconds.
    pub direct: u32,
    /// Cross-examination seconds.
    pub cross: u32,
    /// Redirect seconds (counted only when reexaminations are enabled).
    pub redirect: u32,
    /// Recross seconds (counted only when reexaminations are enabled).
    pub recross: u32,
}

/// One side's case-in-chief: three called witnesses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseInChief {
    /// First witness.
    pub witness_one: WitnessExamination,
    /// Second witness.
    pub witness_two: WitnessExamination,
    /// Third witness.
    pub witness_three: WitnessExamination,
}

impl CaseInChief {
    fn sum(&self, pick: impl Fn(&WitnessExamination) -> u32) -> u32 {
        pick(&self.witness_one) + pick(&self.witness_two) + pick(&self.witness_three)
    }

    /// Total direct-examination seconds across all three witnesses.
    #[must_use]
    pub fn direct_total(&self) -> u32 {
        self.sum(|w| w.direct)
    }

    /// Total cross-examination seconds across all three witnesses.
    #[must_use]
    pub fn cross_total(&self) -> u32 {
        self.sum(|w| w.cross)
    }

    /// Total redirect seconds across all three witnesses.
    #[must_use]
    pub fn redirect_total(&self) -> u32 {
        self.sum(|w| w.redirect)
    }

    /// Total recross seconds across all three witnesses.
    #[must_use]
    pub fn recross_total(&self) -> u32 {
        self.sum(|w| w.recross)
    }
}

/// Jointly-timed periods that belong to neither side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JointTimes {
    /// Closing-preparation seconds.
    pub prep_closings: u32,
    /// Pretrial-conference seconds.
    pub conference: u32,
}

/// Accumulated elapsed seconds for every stage of a trial.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrialTimes {
    /// Pretrial motion seconds per side.
    pub pretrial: SidePair,
    /// Opening statement seconds per side.
    pub open: SidePair,
    /// Closing argument seconds per side.
    pub close: SidePair,
    /// Prosecution rebuttal seconds.
    pub rebuttal: u32,
    /// Prosecution case-in-chief.
    pub pros_cic: CaseInChief,
    /// Defense case-in-chief.
    pub def_cic: CaseInChief,
    /// Joint periods.
    pub joint: JointTimes,
}

impl TrialTimes {
    /// The leaf value addressed by `stage`.
    #[must_use]
    pub fn stage_time(&self, stage: Stage) -> u32 {
        let mut copy = *self;
        *copy.stage_time_mut(stage)
    }

    /// Mutable access to the leaf addressed by `stage`.
    ///
    /// The match is exhaustive over [`Stage`], so every catalog member is
    /// guaranteed a slot here at compile time.
    pub fn stage_time_mut(&mut self, stage: Stage) -> &mut u32 {
        match stage {
            Stage::PretrialPros => &mut self.pretrial.pros,
            Stage::PretrialDef => &mut self.pretrial.def,
            Stage::JointConference => &mut self.joint.conference,
            Stage::OpenPros => &mut self.open.pros,
            Stage::OpenDef => &mut self.open.def,
            Stage::ProsOneDirect => &mut self.pros_cic.witness_one.direct,
            Stage::ProsOneCross => &mut self.pros_cic.witness_one.cross,
            Stage::ProsOneRedirect => &mut self.pros_cic.witness_one.redirect,
            Stage::ProsOneRecross => &mut self.pros_cic.witness_one.recross,
            Stage::ProsTwoDirect => &mut self.pros_cic.witness_two.direct,
            Stage::ProsTwoCross => &mut self.pros_cic.witness_two.cross,
            Stage::ProsTwoRedirect => &mut self.pros_cic.witness_two.redirect,
            Stage::ProsTwoRecross => &mut self.pros_cic.witness_two.recross,
            Stage::ProsThreeDirect => &mut self.pros_cic.witness_three.direct,
            Stage::ProsThreeCross => &mut self.pros_cic.witness_three.cross,
            Stage::ProsThreeRedirect => &mut self.pros_cic.witness_three.redirect,
            Stage::ProsThreeRecross => &mut self.pros_cic.witness_three.recross,
            Stage::DefOneDirect => &mut self.def_cic.witness_one.direct,
            Stage::DefOneCross => &mut self.def_cic.witness_one.cross,
            Stage::DefOneRedirect => &mut self.def_cic.witness_one.redirect,
            Stage::DefOneRecross => &mut self.def_cic.witness_one.recross,
            Stage::DefTwoDirect => &mut self.def_cic.witness_two.direct,
            Stage::DefTwoCross => &mut self.def_cic.witness_two.cross,
            Stage::DefTwoRedirect => &mut self.def_cic.witness_two.redirect,
            Stage::DefTwoRecross => &mut self.def_cic.witness_two.recross,
            Stage::DefThreeDirect => &mut self.def_cic.witness_three.direct,
            Stage::DefThreeCross => &mut self.def_cic.witness_three.cross,
            Stage::DefThreeRedirect => &mut self.def_cic.witness_three.redirect,
            Stage::DefThreeRecross => &mut self.def_cic.witness_three.recross,
            Stage::JointPrepClosings => &mut self.joint.prep_closings,
            Stage::ClosePros => &mut self.close.pros,
            Stage::CloseDef => &mut self.close.def,
            Stage::Rebuttal => &mut self.rebuttal,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
