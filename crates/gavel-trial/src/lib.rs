//! # gavel-trial
//!
//! The trial time-state model for the Gavel mock-trial timekeeper.
//!
//! This crate owns everything with non-trivial invariants:
//!
//! - **Stage catalog**: the fixed, totally-ordered sequence of proceeding
//!   stages with wraparound navigation ([`Stage`], [`Side`])
//! - **Domain types**: [`Trial`], [`TrialSetup`], [`TrialTimes`],
//!   [`League`] and friends, serialized in the mobile app's camelCase
//!   JSON wire format
//! - **Time accounting**: mapping a running timer onto the nested
//!   time record and computing per-side used/remaining/overtime totals
//!   ([`apply_stage_time`], [`side_totals`])
//! - **Timer commit protocol**: the wall-clock-baseline [`TrialClock`]
//!   that self-corrects across missed ticks and never double-counts
//!   across pause/resume
//! - **Validation**: pure predicates for user-correctable input errors
//!   ([`validate`])

#![deny(unsafe_code)]

pub mod accounting;
pub mod clock;
pub mod errors;
pub mod stage;
pub mod types;
pub mod validate;

pub use accounting::{RemainingTime, SideTotals, UsedTime, apply_stage_time, read_stage_time, side_totals};
pub use clock::TrialClock;
pub use errors::{Result, ValidationError};
pub use stage::{Side, Stage, label_for_code};
pub use types::*;
