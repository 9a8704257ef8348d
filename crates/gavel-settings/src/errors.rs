//! Settings store error types.

use thiserror::Error;

/// Errors from settings reads and writes.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The underlying key-value storage failed.
    #[error(transparent)]
    Storage(#[from] gavel_persist::PersistError),
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;
