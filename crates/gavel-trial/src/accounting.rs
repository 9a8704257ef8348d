//! The time-accounting engine.
//!
//! Translates raw per-stage second counts into per-side summaries:
//! how much time each side has used in each category, how much remains
//! of each allotment, and how far over any allotment the side has gone.
//!
//! Two rules here are easy to get backwards:
//!
//! - Rebuttal is prosecution-only and rides on top of the closing, so
//!   the prosecution's `statements` and `close` figures include rebuttal
//!   seconds; the defense's never do.
//! - Cross-examination is charged to the *examining* side. The
//!   prosecution's cross usage is the sum of the cross fields recorded
//!   under the defense's case-in-chief, because those are the witnesses
//!   the prosecution questions.

use serde::{Deserialize, Serialize};

use crate::stage::{Side, Stage};
use crate::types::{Trial, TrialSetup, TrialTimes};

/// Seconds a side has used, per category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsedTime {
    /// Pretrial motion seconds.
    pub pretrial: u32,
    /// Opening plus closing (plus rebuttal for the prosecution).
    pub statements: u32,
    /// Opening statement seconds.
    pub open: u32,
    /// Closing seconds (plus rebuttal for the prosecution).
    pub close: u32,
    /// Direct examination of the side's own witnesses, plus redirects
    /// when reexaminations are enabled.
    pub direct: u32,
    /// Cross-examination of the opposing side's witnesses, plus
    /// recrosses when reexaminations are enabled.
    pub cross: u32,
}

/// Seconds a side has left, per category.
///
/// A `None` means the category is not tracked under the trial's setup
/// (e.g. `open` when statements draw from a combined allotment). Values
/// go negative once a side is into overtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemainingTime {
    /// Pretrial allotment remainder; `None` unless pretrial is enabled.
    pub pretrial: Option<i64>,
    /// Combined statement remainder; `None` when statements are separate.
    pub statements: Option<i64>,
    /// Opening remainder; `None` unless statements are separate.
    pub open: Option<i64>,
    /// Closing remainder; `None` unless statements are separate.
    pub close: Option<i64>,
    /// Direct remainder. Always tracked.
    pub direct: i64,
    /// Cross remainder. Always tracked.
    pub cross: i64,
    /// Rebuttal budget remainder; prosecution only.
    pub rebuttal: Option<i64>,
}

/// One side's complete time summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SideTotals {
    /// Seconds used per category.
    pub used: UsedTime,
    /// Seconds remaining per category.
    pub remaining: RemainingTime,
    /// Total seconds over allotment, summed across direct, cross, open
    /// and close. Never negative; zero exactly when no tracked category
    /// is in deficit.
    pub overtime: u32,
}

/// Read the seconds recorded for `stage`.
#[must_use]
pub fn read_stage_time(trial: &Trial, stage: Stage) -> u32 {
    trial.times.stage_time(stage)
}

/// Produce a trial whose `times` has the one leaf addressed by `stage`
/// set to `seconds`, leaving every other leaf untouched.
#[must_use]
pub fn apply_stage_time(trial: &Trial, seconds: u32, stage: Stage) -> Trial {
    let mut next = trial.clone();
    *next.times.stage_time_mut(stage) = seconds;
    next
}

/// Compute the used/remaining/overtime summary for one side.
///
/// The overtime rule (sum of deficits over direct, cross, open, close;
/// pretrial and combined statements excluded) matches the shipped
/// behavior of the league rulesets the app currently supports.
#[must_use]
pub fn side_totals(trial: &Trial, side: Side) -> SideTotals {
    let times = &trial.times;
    let setup = &trial.setup;

    let used = used_time(times, setup, side);
    let remaining = remaining_time(times, setup, side, &used);

    let mut overtime: u32 = 0;
    for deficit in [
        Some(remaining.direct),
        Some(remaining.cross),
        remaining.open,
        remaining.close,
    ]
    .into_iter()
    .flatten()
    {
        if deficit < 0 {
            overtime += u32::try_from(deficit.unsigned_abs()).unwrap_or(u32::MAX);
        }
    }

    SideTotals { used, remaining, overtime }
}

fn used_time(times: &TrialTimes, setup: &TrialSetup, side: Side) -> UsedTime {
    let (own_cic, opp_cic) = match side {
        Side::Pros => (&times.pros_cic, &times.def_cic),
        Side::Def => (&times.def_cic, &times.pros_cic),
    };

    let rebuttal = match side {
        Side::Pros => times.rebuttal,
        Side::Def => 0,
    };
    let open = match side {
        Side::Pros => times.open.pros,
        Side::Def => times.open.def,
    };
    let close = match side {
        Side::Pros => times.close.pros,
        Side::Def => times.close.def,
    } + rebuttal;

    let mut direct = own_cic.direct_total();
    let mut cross = opp_cic.cross_total();
    if setup.reexaminations_enabled {
        direct += own_cic.redirect_total();
        cross += opp_cic.recross_total();
    }

    UsedTime {
        pretrial: match side {
            Side::Pros => times.pretrial.pros,
            Side::Def => times.pretrial.def,
        },
        statements: open + close,
        open,
        close,
        direct,
        cross,
    }
}

fn remaining_time(
    times: &TrialTimes,
    setup: &TrialSetup,
    side: Side,
    used: &UsedTime,
) -> RemainingTime {
    let allot = |v: Option<u32>| i64::from(v.unwrap_or(0));

    let pretrial = setup
        .pretrial_enabled
        .then(|| allot(setup.pretrial_time) - i64::from(used.pretrial));

    let (statements, open, close) = if setup.statements_separate {
        (
            None,
            Some(allot(setup.open_time) - i64::from(used.open)),
            Some(allot(setup.close_time) - i64::from(used.close)),
        )
    } else {
        (
            Some(allot(setup.statement_time) - i64::from(used.statements)),
            None,
            None,
        )
    };

    RemainingTime {
        pretrial,
        statements,
        open,
        close,
        direct: i64::from(setup.direct_time) - i64::from(used.direct),
        cross: i64::from(setup.cross_time) - i64::from(used.cross),
        rebuttal: rebuttal_remaining(times, setup, side),
    }
}

/// Remaining rebuttal budget for the prosecution.
///
/// The budget is whatever was left of the closing allotment when the
/// rebuttal started, capped by the configured maximum when the cap is
/// enabled, minus rebuttal seconds already used.
fn rebuttal_remaining(times: &TrialTimes, setup: &TrialSetup, side: Side) -> Option<i64> {
    if side == Side::Def {
        return None;
    }

    let close_pros = i64::from(times.close.pros);
    let budget_before_max = if setup.statements_separate {
        i64::from(setup.close_time.unwrap_or(0)) - close_pros
    } else {
        i64::from(setup.statement_time.unwrap_or(0)) - i64::from(times.open.pros) - close_pros
    };

    let total_budget = if setup.rebuttal_max_enabled {
        budget_before_max.min(i64::from(setup.rebuttal_max_time.unwrap_or(0)))
    } else {
        budget_before_max
    };

    Some(total_budget - i64::from(times.rebuttal))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{League, TrialTimes, WitnessSlots};
    use gavel_core::ids::TrialId;
    use proptest::prelude::*;

    fn trial_with(setup: TrialSetup) -> Trial {
        Trial {
            id: TrialId::from("t"),
            league: League::California,
            name: "test".to_string(),
            date: 0,
            stage: Trial::initial_stage(&setup),
            setup,
            times: TrialTimes::default(),
            witnesses: WitnessSlots::default(),
            loss: 0,
            details: None,
        }
    }

    fn arb_stage() -> impl Strategy<Value = Stage> {
        (0..Stage::CATALOG.len()).prop_map(|i| Stage::CATALOG[i])
    }

    #[test]
    fn apply_then_read_roundtrips() {
        let trial = trial_with(TrialSetup::default());
        let updated = apply_stage_time(&trial, 123, Stage::OpenDef);
        assert_eq!(read_stage_time(&updated, Stage::OpenDef), 123);
        assert_eq!(read_stage_time(&trial, Stage::OpenDef), 0, "input untouched");
    }

    #[test]
    fn overtime_scenario_direct_deficit() {
        // directTime = 1500, witness one direct = 1600, reexams off.
        let mut setup = TrialSetup::default();
        setup.direct_time = 1500;
        setup.reexaminations_enabled = false;
        let mut trial = trial_with(setup);
        trial.times.pros_cic.witness_one.direct = 1600;

        let totals = side_totals(&trial, Side::Pros);
        assert_eq!(totals.used.direct, 1600);
        assert_eq!(totals.remaining.direct, -100);
        assert_eq!(totals.overtime, 100);
    }

    #[test]
    fn disabled_categories_are_untracked() {
        // pretrial off, combined statements.
        let mut setup = TrialSetup::default();
        setup.pretrial_enabled = false;
        setup.statements_separate = false;
        let trial = trial_with(setup);

        let totals = side_totals(&trial, Side::Pros);
        assert_eq!(totals.remaining.pretrial, None);
        assert_eq!(totals.remaining.open, None);
        assert_eq!(totals.remaining.close, None);
        assert!(totals.remaining.statements.is_some());
    }

    #[test]
    fn rebuttal_budget_capped_by_closing_remainder() {
        // rebuttalMax 180, separate statements, closeTime 420,
        // close.pros 300, rebuttal 50 -> remaining 70.
        let mut setup = TrialSetup::default();
        setup.statements_separate = true;
        setup.statement_time = None;
        setup.open_time = Some(300);
        setup.close_time = Some(420);
        setup.rebuttal_max_enabled = true;
        setup.rebuttal_max_time = Some(180);
        let mut trial = trial_with(setup);
        trial.times.close.pros = 300;
        trial.times.rebuttal = 50;

        let totals = side_totals(&trial, Side::Pros);
        assert_eq!(totals.remaining.rebuttal, Some(70));
    }

    #[test]
    fn rebuttal_budget_capped_by_max() {
        // Closing remainder (400) exceeds the cap (180).
        let mut setup = TrialSetup::default();
        setup.statements_separate = true;
        setup.statement_time = None;
        setup.open_time = Some(300);
        setup.close_time = Some(420);
        setup.rebuttal_max_enabled = true;
        setup.rebuttal_max_time = Some(180);
        let mut trial = trial_with(setup);
        trial.times.close.pros = 20;
        trial.times.rebuttal = 30;

        let totals = side_totals(&trial, Side::Pros);
        assert_eq!(totals.remaining.rebuttal, Some(150));
    }

    #[test]
    fn rebuttal_budget_under_combined_statements() {
        // statementTime 540, open.pros 100, close.pros 200, rebuttal 40:
        // the budget is what's left of the combined allotment, 200.
        let mut setup = TrialSetup::default();
        setup.statements_separate = false;
        setup.statement_time = Some(540);
        setup.rebuttal_max_enabled = false;
        let mut trial = trial_with(setup);
        trial.times.open.pros = 100;
        trial.times.close.pros = 200;
        trial.times.rebuttal = 40;

        let totals = side_totals(&trial, Side::Pros);
        assert_eq!(totals.remaining.rebuttal, Some(200));

        // The cap still applies on top of the combined remainder.
        trial.setup.rebuttal_max_enabled = true;
        trial.setup.rebuttal_max_time = Some(120);
        let totals = side_totals(&trial, Side::Pros);
        assert_eq!(totals.remaining.rebuttal, Some(80));
    }

    #[test]
    fn rebuttal_is_none_for_defense() {
        let trial = trial_with(TrialSetup::default());
        assert_eq!(side_totals(&trial, Side::Def).remaining.rebuttal, None);
    }

    #[test]
    fn cross_is_charged_to_the_examining_side() {
        let mut trial = trial_with(TrialSetup::default());
        // Prosecution crosses the defense's witnesses.
        trial.times.def_cic.witness_one.cross = 100;
        trial.times.def_cic.witness_two.cross = 200;
        trial.times.def_cic.witness_three.cross = 300;
        // Noise on the prosecution's own cross fields must not count.
        trial.times.pros_cic.witness_one.cross = 999;

        let mut setup = trial.setup.clone();
        setup.reexaminations_enabled = false;
        trial.setup = setup;

        let totals = side_totals(&trial, Side::Pros);
        assert_eq!(totals.used.cross, 600);
    }

    #[test]
    fn reexaminations_add_redirect_and_recross() {
        let mut trial = trial_with(TrialSetup::default());
        trial.setup.reexaminations_enabled = true;
        trial.times.pros_cic.witness_one.direct = 500;
        trial.times.pros_cic.witness_one.redirect = 60;
        trial.times.def_cic.witness_two.cross = 400;
        trial.times.def_cic.witness_two.recross = 30;

        let totals = side_totals(&trial, Side::Pros);
        assert_eq!(totals.used.direct, 560);
        assert_eq!(totals.used.cross, 430);

        trial.setup.reexaminations_enabled = false;
        let totals = side_totals(&trial, Side::Pros);
        assert_eq!(totals.used.direct, 500);
        assert_eq!(totals.used.cross, 400);
    }

    #[test]
    fn prosecution_statements_include_rebuttal_defense_never() {
        let mut setup = TrialSetup::default();
        setup.statements_separate = true;
        setup.statement_time = None;
        setup.open_time = Some(300);
        setup.close_time = Some(420);
        let mut trial = trial_with(setup);
        trial.times.open.pros = 100;
        trial.times.close.pros = 200;
        trial.times.open.def = 110;
        trial.times.close.def = 210;
        trial.times.rebuttal = 40;

        let pros = side_totals(&trial, Side::Pros);
        assert_eq!(pros.used.close, 240);
        assert_eq!(pros.used.statements, 340);

        let def = side_totals(&trial, Side::Def);
        assert_eq!(def.used.close, 210);
        assert_eq!(def.used.statements, 320);
    }

    #[test]
    fn overtime_accumulates_across_categories() {
        let mut setup = TrialSetup::default();
        setup.statements_separate = true;
        setup.statement_time = None;
        setup.open_time = Some(100);
        setup.close_time = Some(100);
        setup.direct_time = 100;
        setup.cross_time = 100;
        setup.reexaminations_enabled = false;
        let mut trial = trial_with(setup);
        trial.times.open.pros = 150; // 50 over
        trial.times.pros_cic.witness_one.direct = 40; // 60 under
        trial.times.def_cic.witness_one.cross = 130; // 30 over

        let totals = side_totals(&trial, Side::Pros);
        assert_eq!(totals.overtime, 80, "deficits sum, surpluses never net");
    }

    proptest! {
        #[test]
        fn surgical_update_leaves_other_stages_alone(
            target in arb_stage(),
            probe in arb_stage(),
            value in 0u32..100_000,
        ) {
            let trial = trial_with(TrialSetup::default());
            let updated = apply_stage_time(&trial, value, target);
            if probe == target {
                prop_assert_eq!(read_stage_time(&updated, probe), value);
            } else {
                prop_assert_eq!(
                    read_stage_time(&updated, probe),
                    read_stage_time(&trial, probe)
                );
            }
        }

        #[test]
        fn overtime_is_zero_iff_no_deficit(
            open in 0u32..1_000,
            close in 0u32..1_000,
            direct in 0u32..3_000,
            cross in 0u32..3_000,
        ) {
            let mut setup = TrialSetup::default();
            setup.statements_separate = true;
            setup.statement_time = None;
            setup.open_time = Some(300);
            setup.close_time = Some(420);
            setup.direct_time = 1500;
            setup.cross_time = 1500;
            setup.reexaminations_enabled = false;
            let mut trial = trial_with(setup);
            trial.times.open.pros = open;
            trial.times.close.pros = close;
            trial.times.pros_cic.witness_one.direct = direct;
            trial.times.def_cic.witness_one.cross = cross;

            let totals = side_totals(&trial, Side::Pros);
            let any_deficit = [
                Some(totals.remaining.direct),
                Some(totals.remaining.cross),
                totals.remaining.open,
                totals.remaining.close,
            ]
            .into_iter()
            .flatten()
            .any(|r| r < 0);
            prop_assert_eq!(totals.overtime == 0, !any_deficit);
        }
    }
}
