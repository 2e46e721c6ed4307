//! Unified error handling for the data layer.
//!
//! The taxonomy is deliberately shallow: validation failures abort an
//! operation before any state is mutated, lookup misses are no-ops or
//! `false` returns at the call site, and storage failures propagate. Nothing
//! in this crate retries.

use thiserror::Error;

use crate::storage::StorageError;

/// Application-level error type for the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the record store failed, or a stored document is
    /// structurally corrupt.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A record failed validation; the collection was not mutated.
    #[error("validation failed: {0}")]
    Validation(String),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
