//! Trial domain type definitions.
//!
//! All persisted types use `#[serde(rename_all = "camelCase")]` to match
//! the mobile app's JSON wire format, and `#[serde(default)]` so blobs
//! written by older app releases deserialize with defaults for fields a
//! migration has not yet filled in.

mod league;
mod setup;
mod times;
mod trial;

pub use league::*;
pub use setup::*;
pub use times::*;
pub use trial::*;
