//! Store error types.

use thiserror::Error;

/// Errors from trial and promo store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying key-value storage failed.
    #[error(transparent)]
    Storage(#[from] gavel_persist::PersistError),

    /// Input failed a validation rule.
    #[error(transparent)]
    Validation(#[from] gavel_trial::ValidationError),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
