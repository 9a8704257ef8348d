//! Pure validation predicates.
//!
//! Each predicate is callable standalone so the UI can validate a form
//! field the moment it changes, and so every rule is testable without
//! any storage or screen in the loop.

use crate::errors::{Result, ValidationError};
use crate::types::Trial;

/// A trial name must be non-empty after trimming.
pub fn validate_trial_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

/// The all-loss deadline (epoch ms) must be strictly in the future.
pub fn validate_all_loss(loss_ms: i64, now_ms: i64) -> Result<()> {
    if loss_ms <= now_ms {
        return Err(ValidationError::AllLossInPast);
    }
    Ok(())
}

/// Parse a minutes/seconds pair of user entries into total seconds.
///
/// Rejects non-numeric input, negatives, a seconds field of 60 or more,
/// and totals too large to track. Fractional input fails the integer
/// parse and reports as non-numeric.
pub fn parse_time_entry(minutes: &str, seconds: &str) -> Result<u32> {
    let m = parse_component(minutes)?;
    let s = parse_component(seconds)?;
    if s >= 60 {
        return Err(ValidationError::SecondsOutOfRange { seconds: s });
    }
    m.checked_mul(60)
        .and_then(|total| total.checked_add(s))
        .and_then(|total| u32::try_from(total).ok())
        .ok_or(ValidationError::TimeTooLarge { minutes: m, seconds: s })
}

fn parse_component(entry: &str) -> Result<i64> {
    let trimmed = entry.trim();
    let value: i64 = trimmed.parse().map_err(|_| ValidationError::NotNumeric {
        entry: entry.to_string(),
    })?;
    if value < 0 {
        return Err(ValidationError::NegativeTime { value });
    }
    Ok(value)
}

/// Check that a trial is complete enough to upload.
///
/// A trial is uploadable only when its details carry a tournament, a
/// round number, and a side. When `require_witnesses` is set, all six
/// witness slots must also be assigned.
pub fn validate_trial_details(trial: &Trial, require_witnesses: bool) -> Result<()> {
    let Some(details) = &trial.details else {
        return Err(ValidationError::IncompleteDetails { missing: "details" });
    };
    if details.tournament_id.is_none() {
        return Err(ValidationError::IncompleteDetails { missing: "tournamentId" });
    }
    if details.round.is_none() {
        return Err(ValidationError::IncompleteDetails { missing: "round" });
    }
    if details.side.is_none() {
        return Err(ValidationError::IncompleteDetails { missing: "side" });
    }
    if require_witnesses && !trial.witnesses.is_complete() {
        return Err(ValidationError::IncompleteDetails { missing: "witnesses" });
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
