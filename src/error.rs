//! Error types for Enroll
//!
//! Uses `thiserror` for the crate-level error enum. Port-level errors
//! (`StoreError`) are defined next to their port and wrapped here.

use thiserror::Error;

use crate::domain::ports::StoreError;

/// Result type alias for enrollment operations
pub type EnrollResult<T> = Result<T, EnrollError>;

/// Main error type for enrollment operations
#[derive(Error, Debug)]
pub enum EnrollError {
    /// The storage backend failed while persisting the record
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// The welcome notification failed after the record was saved
    #[error(transparent)]
    Notify(#[from] anyhow::Error),

    /// Not a usable email address
    #[error("invalid email address '{input}' - expected a non-empty local part and domain")]
    InvalidEmail { input: String },
}
