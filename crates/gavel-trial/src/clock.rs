//! The running-timer commit protocol.
//!
//! Starting the clock captures a wall-clock instant and the stage's
//! currently stored seconds. Every tick recomputes
//! `baseline + floor(now - started_at)` and writes that through
//! [`apply_stage_time`] — elapsed time is always derived from the wall
//! clock, never incremented, so missed or delayed ticks (screen sleep,
//! app backgrounding) self-correct without drift.
//!
//! Pausing clears the baseline. Resuming captures a fresh baseline from
//! the stage's stored value, so time is never double-counted across
//! pause/resume cycles. Moving the stage pointer always pauses first:
//! advancing never silently keeps counting into the new stage.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::accounting::apply_stage_time;
use crate::stage::Stage;
use crate::types::Trial;

/// Wall-clock baseline captured when the timer starts.
#[derive(Clone, Copy, Debug)]
struct Baseline {
    started_at: DateTime<Utc>,
    stage_seconds: u32,
}

/// A trial plus its (possibly running) stage timer.
#[derive(Clone, Debug)]
pub struct TrialClock {
    trial: Trial,
    running: Option<Baseline>,
}

impl TrialClock {
    /// Wrap a trial with a paused clock.
    #[must_use]
    pub fn new(trial: Trial) -> Self {
        Self { trial, running: None }
    }

    /// The current trial state, including any committed ticks.
    #[must_use]
    pub fn trial(&self) -> &Trial {
        &self.trial
    }

    /// Unwrap the trial. Callers should [`pause`](Self::pause) first if
    /// the clock is running; an uncommitted baseline is discarded.
    #[must_use]
    pub fn into_trial(self) -> Trial {
        self.trial
    }

    /// Whether the timer is currently counting.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// The stage the clock is pointed at.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.trial.stage
    }

    /// Start counting against the current stage. No-op when already
    /// running (the original baseline stays authoritative).
    pub fn start(&mut self, now: DateTime<Utc>) {
        if self.running.is_some() {
            return;
        }
        let stage_seconds = self.trial.times.stage_time(self.trial.stage);
        debug!(stage = %self.trial.stage, baseline = stage_seconds, "timer started");
        self.running = Some(Baseline { started_at: now, stage_seconds });
    }

    /// Recompute the current stage's seconds from the wall clock and
    /// commit them to the trial. Returns the stage's committed seconds.
    ///
    /// Safe to call at any cadence; a late tick lands on the same value
    /// an on-time tick would have reached. No-op while paused.
    pub fn tick(&mut self, now: DateTime<Utc>) -> u32 {
        let stage = self.trial.stage;
        if let Some(baseline) = self.running {
            let elapsed = (now - baseline.started_at).num_seconds().max(0);
            let seconds = baseline
                .stage_seconds
                .saturating_add(u32::try_from(elapsed).unwrap_or(u32::MAX));
            self.trial = apply_stage_time(&self.trial, seconds, stage);
        }
        self.trial.times.stage_time(stage)
    }

    /// Commit a final tick and stop counting.
    pub fn pause(&mut self, now: DateTime<Utc>) {
        if self.running.is_none() {
            return;
        }
        let committed = self.tick(now);
        debug!(stage = %self.trial.stage, committed, "timer paused");
        self.running = None;
    }

    /// Pause, then advance to the next stage in the catalog.
    pub fn next_stage(&mut self, now: DateTime<Utc>) -> Stage {
        self.pause(now);
        self.trial.stage = self.trial.stage.next();
        self.trial.stage
    }

    /// Pause, then step back to the previous stage in the catalog.
    pub fn prev_stage(&mut self, now: DateTime<Utc>) -> Stage {
        self.pause(now);
        self.trial.stage = self.trial.stage.prev();
        self.trial.stage
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{League, TrialSetup, TrialTimes, WitnessSlots};
    use chrono::TimeDelta;
    use gavel_core::ids::TrialId;

    fn sample_trial() -> Trial {
        let setup = TrialSetup::default();
        Trial {
            id: TrialId::from("t"),
            league: League::California,
            name: "clock test".to_string(),
            date: 0,
            stage: Trial::initial_stage(&setup),
            setup,
            times: TrialTimes::default(),
            witnesses: WitnessSlots::default(),
            loss: 0,
            details: None,
        }
    }

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_750_000_000, 0).unwrap()
    }

    #[test]
    fn tick_accumulates_wall_clock_elapsed() {
        let mut clock = TrialClock::new(sample_trial());
        clock.start(t0());
        assert_eq!(clock.tick(t0() + TimeDelta::seconds(5)), 5);
        assert_eq!(clock.tick(t0() + TimeDelta::seconds(9)), 9);
    }

    #[test]
    fn missed_ticks_self_correct() {
        // One late tick lands on the same value as many on-time ticks.
        let mut clock = TrialClock::new(sample_trial());
        clock.start(t0());
        assert_eq!(clock.tick(t0() + TimeDelta::seconds(300)), 300);
    }

    #[test]
    fn tick_while_paused_is_a_read() {
        let mut clock = TrialClock::new(sample_trial());
        assert_eq!(clock.tick(t0()), 0);
        assert!(!clock.is_running());
    }

    #[test]
    fn pause_resume_never_double_counts() {
        let mut clock = TrialClock::new(sample_trial());
        clock.start(t0());
        clock.pause(t0() + TimeDelta::seconds(10));
        assert_eq!(clock.trial().times.stage_time(clock.stage()), 10);

        // A long idle gap while paused must not count.
        let resume_at = t0() + TimeDelta::seconds(500);
        clock.start(resume_at);
        assert_eq!(clock.tick(resume_at + TimeDelta::seconds(3)), 13);
    }

    #[test]
    fn start_while_running_keeps_original_baseline() {
        let mut clock = TrialClock::new(sample_trial());
        clock.start(t0());
        clock.start(t0() + TimeDelta::seconds(60));
        assert_eq!(clock.tick(t0() + TimeDelta::seconds(90)), 90);
    }

    #[test]
    fn stage_change_pauses_and_commits_first() {
        let mut clock = TrialClock::new(sample_trial());
        let first = clock.stage();
        clock.start(t0());
        let second = clock.next_stage(t0() + TimeDelta::seconds(42));

        assert!(!clock.is_running(), "advancing must pause the timer");
        assert_eq!(clock.trial().times.stage_time(first), 42);
        assert_eq!(clock.trial().times.stage_time(second), 0);

        // Ticking without restarting does not count into the new stage.
        assert_eq!(clock.tick(t0() + TimeDelta::seconds(100)), 0);
    }

    #[test]
    fn prev_stage_wraps_and_pauses() {
        let mut clock = TrialClock::new(sample_trial());
        let start = clock.stage();
        let back = clock.prev_stage(t0());
        assert_eq!(back.next(), start);
        assert!(!clock.is_running());
    }

    #[test]
    fn clock_skew_clamps_to_baseline() {
        let mut clock = TrialClock::new(sample_trial());
        clock.start(t0());
        // Wall clock stepped backwards; elapsed clamps to zero.
        assert_eq!(clock.tick(t0() - TimeDelta::seconds(30)), 0);
    }

    #[test]
    fn resume_baseline_comes_from_stored_value() {
        let mut trial = sample_trial();
        *trial.times.stage_time_mut(trial.stage) = 77;
        let mut clock = TrialClock::new(trial);
        clock.start(t0());
        assert_eq!(clock.tick(t0() + TimeDelta::seconds(3)), 80);
    }
}
