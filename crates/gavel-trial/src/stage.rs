//! The [`Stage`] enum — the canonical catalog of proceeding stages.
//!
//! Every variant has an exact `#[serde(rename)]` matching the dot-separated
//! string code persisted by the mobile app (e.g. `"cic.pros.one.direct"`).
//! The catalog order is fixed at build time and navigation wraps around,
//! so `next`/`prev` form a true cyclic group over the 33 stages.
//!
//! Domain helper methods like [`Stage::side()`] replace the original
//! string-keyed lookup tables with compile-time exhaustiveness.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two sides of a trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Prosecution (or plaintiff, in a civil case).
    #[serde(rename = "p")]
    Pros,
    /// Defense.
    #[serde(rename = "d")]
    Def,
}

impl Side {
    /// The opposing side.
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Self::Pros => Self::Def,
            Self::Def => Self::Pros,
        }
    }
}

/// All proceeding stages, in catalog order.
///
/// Each variant serializes to the exact dot-separated code the persisted
/// trial records and the QR sync envelope use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    // -- Pretrial --
    /// Prosecution pretrial motion.
    #[serde(rename = "pretrial.pros")]
    PretrialPros,
    /// Defense pretrial motion.
    #[serde(rename = "pretrial.def")]
    PretrialDef,
    /// Joint pretrial conference.
    #[serde(rename = "joint.conference")]
    JointConference,

    // -- Statements --
    /// Prosecution opening statement.
    #[serde(rename = "open.pros")]
    OpenPros,
    /// Defense opening statement.
    #[serde(rename = "open.def")]
    OpenDef,

    // -- Prosecution case-in-chief --
    /// Prosecution witness one, direct examination.
    #[serde(rename = "cic.pros.one.direct")]
    ProsOneDirect,
    /// Prosecution witness one, cross-examination.
    #[serde(rename = "cic.pros.one.cross")]
    ProsOneCross,
    /// Prosecution witness one, redirect.
    #[serde(rename = "cic.pros.one.redirect")]
    ProsOneRedirect,
    /// Prosecution witness one, recross.
    #[serde(rename = "cic.pros.one.recross")]
    ProsOneRecross,
    /// Prosecution witness two, direct examination.
    #[serde(rename = "cic.pros.two.direct")]
    ProsTwoDirect,
    /// Prosecution witness two, cross-examination.
    #[serde(rename = "cic.pros.two.cross")]
    ProsTwoCross,
    /// Prosecution witness two, redirect.
    #[serde(rename = "cic.pros.two.redirect")]
    ProsTwoRedirect,
    /// Prosecution witness two, recross.
    #[serde(rename = "cic.pros.two.recross")]
    ProsTwoRecross,
    /// Prosecution witness three, direct examination.
    #[serde(rename = "cic.pros.three.direct")]
    ProsThreeDirect,
    /// Prosecution witness three, cross-examination.
    #[serde(rename = "cic.pros.three.cross")]
    ProsThreeCross,
    /// Prosecution witness three, redirect.
    #[serde(rename = "cic.pros.three.redirect")]
    ProsThreeRedirect,
    /// Prosecution witness three, recross.
    #[serde(rename = "cic.pros.three.recross")]
    ProsThreeRecross,

    // -- Defense case-in-chief --
    /// Defense witness one, direct examination.
    #[serde(rename = "cic.def.one.direct")]
    DefOneDirect,
    /// Defense witness one, cross-examination.
    #[serde(rename = "cic.def.one.cross")]
    DefOneCross,
    /// Defense witness one, redirect.
    #[serde(rename = "cic.def.one.redirect")]
    DefOneRedirect,
    /// Defense witness one, recross.
    #[serde(rename = "cic.def.one.recross")]
    DefOneRecross,
    /// Defense witness two, direct examination.
    #[serde(rename = "cic.def.two.direct")]
    DefTwoDirect,
    /// Defense witness two, cross-examination.
    #[serde(rename = "cic.def.two.cross")]
    DefTwoCross,
    /// Defense witness two, redirect.
    #[serde(rename = "cic.def.two.redirect")]
    DefTwoRedirect,
    /// Defense witness two, recross.
    #[serde(rename = "cic.def.two.recross")]
    DefTwoRecross,
    /// Defense witness three, direct examination.
    #[serde(rename = "cic.def.three.direct")]
    DefThreeDirect,
    /// Defense witness three, cross-examination.
    #[serde(rename = "cic.def.three.cross")]
    DefThreeCross,
    /// Defense witness three, redirect.
    #[serde(rename = "cic.def.three.redirect")]
    DefThreeRedirect,
    /// Defense witness three, recross.
    #[serde(rename = "cic.def.three.recross")]
    DefThreeRecross,

    // -- Closings --
    /// Joint closing-preparation period.
    #[serde(rename = "joint.prepClosings")]
    JointPrepClosings,
    /// Prosecution closing argument.
    #[serde(rename = "close.pros")]
    ClosePros,
    /// Defense closing argument.
    #[serde(rename = "close.def")]
    CloseDef,
    /// Prosecution rebuttal.
    #[serde(rename = "rebuttal")]
    Rebuttal,
}

impl Stage {
    /// The canonical, totally-ordered stage catalog.
    pub const CATALOG: [Self; 33] = [
        Self::PretrialPros,
        Self::PretrialDef,
        Self::JointConference,
        Self::OpenPros,
        Self::OpenDef,
        Self::ProsOneDirect,
        Self::ProsOneCross,
        Self::ProsOneRedirect,
        Self::ProsOneRecross,
        Self::ProsTwoDirect,
        Self::ProsTwoCross,
        Self::ProsTwoRedirect,
        Self::ProsTwoRecross,
        Self::ProsThreeDirect,
        Self::ProsThreeCross,
        Self::ProsThreeRedirect,
        Self::ProsThreeRecross,
        Self::DefOneDirect,
        Self::DefOneCross,
        Self::DefOneRedirect,
        Self::DefOneRecross,
        Self::DefTwoDirect,
        Self::DefTwoCross,
        Self::DefTwoRedirect,
        Self::DefTwoRecross,
        Self::DefThreeDirect,
        Self::DefThreeCross,
        Self::DefThreeRedirect,
        Self::DefThreeRecross,
        Self::JointPrepClosings,
        Self::ClosePros,
        Self::CloseDef,
        Self::Rebuttal,
    ];

    /// Position of this stage in the catalog.
    fn index(self) -> usize {
        Self::CATALOG
            .iter()
            .position(|s| *s == self)
            .expect("every stage appears in the catalog")
    }

    /// The stage immediately following this one, wrapping to the first
    /// stage after the last.
    #[must_use]
    pub fn next(self) -> Self {
        Self::CATALOG[(self.index() + 1) % Self::CATALOG.len()]
    }

    /// The stage immediately preceding this one, wrapping to the last
    /// stage before the first.
    #[must_use]
    pub fn prev(self) -> Self {
        let len = Self::CATALOG.len();
        Self::CATALOG[(self.index() + len - 1) % len]
    }

    /// The persisted string code for this stage.
    #[must_use]
    pub fn as_code(self) -> &'static str {
        match self {
            Self::PretrialPros => "pretrial.pros",
            Self::PretrialDef => "pretrial.def",
            Self::JointConference => "joint.conference",
            Self::OpenPros => "open.pros",
            Self::OpenDef => "open.def",
            Self::ProsOneDirect => "cic.pros.one.direct",
            Self::ProsOneCross => "cic.pros.one.cross",
            Self::ProsOneRedirect => "cic.pros.one.redirect",
            Self::ProsOneRecross => "cic.pros.one.recross",
            Self::ProsTwoDirect => "cic.pros.two.direct",
            Self::ProsTwoCross => "cic.pros.two.cross",
            Self::ProsTwoRedirect => "cic.pros.two.redirect",
            Self::ProsTwoRecross => "cic.pros.two.recross",
            Self::ProsThreeDirect => "cic.pros.three.direct",
            Self::ProsThreeCross => "cic.pros.three.cross",
            Self::ProsThreeRedirect => "cic.pros.three.redirect",
            Self::ProsThreeRecross => "cic.pros.three.recross",
            Self::DefOneDirect => "cic.def.one.direct",
            Self::DefOneCross => "cic.def.one.cross",
            Self::DefOneRedirect => "cic.def.one.redirect",
            Self::DefOneRecross => "cic.def.one.recross",
            Self::DefTwoDirect => "cic.def.two.direct",
            Self::DefTwoCross => "cic.def.two.cross",
            Self::DefTwoRedirect => "cic.def.two.redirect",
            Self::DefTwoRecross => "cic.def.two.recross",
            Self::DefThreeDirect => "cic.def.three.direct",
            Self::DefThreeCross => "cic.def.three.cross",
            Self::DefThreeRedirect => "cic.def.three.redirect",
            Self::DefThreeRecross => "cic.def.three.recross",
            Self::JointPrepClosings => "joint.prepClosings",
            Self::ClosePros => "close.pros",
            Self::CloseDef => "close.def",
            Self::Rebuttal => "rebuttal",
        }
    }

    /// Parse a persisted stage code. Returns `None` for unknown codes.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        Self::CATALOG.iter().copied().find(|s| s.as_code() == code)
    }

    /// Human-readable label for display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PretrialPros => "Prosecution Pretrial Motion",
            Self::PretrialDef => "Defense Pretrial Motion",
            Self::JointConference => "Pretrial Conference",
            Self::OpenPros => "Prosecution Opening",
            Self::OpenDef => "Defense Opening",
            Self::ProsOneDirect => "Prosecution Witness 1 Direct",
            Self::ProsOneCross => "Prosecution Witness 1 Cross",
            Self::ProsOneRedirect => "Prosecution Witness 1 Redirect",
            Self::ProsOneRecross => "Prosecution Witness 1 Recross",
            Self::ProsTwoDirect => "Prosecution Witness 2 Direct",
            Self::ProsTwoCross => "Prosecution Witness 2 Cross",
            Self::ProsTwoRedirect => "Prosecution Witness 2 Redirect",
            Self::ProsTwoRecross => "Prosecution Witness 2 Recross",
            Self::ProsThreeDirect => "Prosecution Witness 3 Direct",
            Self::ProsThreeCross => "Prosecution Witness 3 Cross",
            Self::ProsThreeRedirect => "Prosecution Witness 3 Redirect",
            Self::ProsThreeRecross => "Prosecution Witness 3 Recross",
            Self::DefOneDirect => "Defense Witness 1 Direct",
            Self::DefOneCross => "Defense Witness 1 Cross",
            Self::DefOneRedirect => "Defense Witness 1 Redirect",
            Self::DefOneRecross => "Defense Witness 1 Recross",
            Self::DefTwoDirect => "Defense Witness 2 Direct",
            Self::DefTwoCross => "Defense Witness 2 Cross",
            Self::DefTwoRedirect => "Defense Witness 2 Redirect",
            Self::DefTwoRecross => "Defense Witness 2 Recross",
            Self::DefThreeDirect => "Defense Witness 3 Direct",
            Self::DefThreeCross => "Defense Witness 3 Cross",
            Self::DefThreeRedirect => "Defense Witness 3 Redirect",
            Self::DefThreeRecross => "Defense Witness 3 Recross",
            Self::JointPrepClosings => "Closing Preparation",
            Self::ClosePros => "Prosecution Closing",
            Self::CloseDef => "Defense Closing",
            Self::Rebuttal => "Prosecution Rebuttal",
        }
    }

    /// The side whose time this stage belongs to, or `None` for joint
    /// stages. Cross and recross belong to the witness's side here; the
    /// accounting engine charges them to the examining side.
    #[must_use]
    pub fn side(self) -> Option<Side> {
        match self {
            Self::PretrialPros
            | Self::OpenPros
            | Self::ProsOneDirect
            | Self::ProsOneCross
            | Self::ProsOneRedirect
            | Self::ProsOneRecross
            | Self::ProsTwoDirect
            | Self::ProsTwoCross
            | Self::ProsTwoRedirect
            | Self::ProsTwoRecross
            | Self::ProsThreeDirect
            | Self::ProsThreeCross
            | Self::ProsThreeRedirect
            | Self::ProsThreeRecross
            | Self::ClosePros
            | Self::Rebuttal => Some(Side::Pros),
            Self::PretrialDef
            | Self::OpenDef
            | Self::DefOneDirect
            | Self::DefOneCross
            | Self::DefOneRedirect
            | Self::DefOneRecross
            | Self::DefTwoDirect
            | Self::DefTwoCross
            | Self::DefTwoRedirect
            | Self::DefTwoRecross
            | Self::DefThreeDirect
            | Self::DefThreeCross
            | Self::DefThreeRedirect
            | Self::DefThreeRecross
            | Self::CloseDef => Some(Side::Def),
            Self::JointConference | Self::JointPrepClosings => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Label for a raw stage code.
///
/// Unknown codes are returned unchanged rather than failing, so a stale
/// persisted code still renders something in the UI.
#[must_use]
pub fn label_for_code(code: &str) -> String {
    Stage::parse(code).map_or_else(|| code.to_string(), |s| s.label().to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
