//! # gavel-core
//!
//! Foundation types for the Gavel mock-trial timekeeper.
//!
//! This crate provides the shared vocabulary the other Gavel crates
//! depend on:
//!
//! - **Branded IDs**: `TrialId`, `TournamentId`, `TeamId`, `PromoId` as
//!   newtypes for type safety
//! - **Duration utilities**: minute/second splitting and display
//!   formatting for signed second counts
//! - **Constants**: package name and version

#![deny(unsafe_code)]

pub mod constants;
pub mod duration;
pub mod ids;

pub use constants::{NAME, VERSION};
pub use duration::{MinutesSeconds, clock_format, split_seconds, verbose_format};
pub use ids::{PromoId, TeamId, TournamentId, TrialId};
