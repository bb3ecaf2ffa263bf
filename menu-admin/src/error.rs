//! Operation-level error handling
//!
//! Failures are typed at the operation boundary and logged where they
//! are swallowed (best-effort paths). Nothing here retries; a failed
//! operation leaves local state untouched so the caller can retry
//! manually.

use crate::store::StoreError;
use crate::utils::validation::FieldErrors;

/// Admin operation errors
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// Remote document store failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Per-field validation failure; no store call was made
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Malformed request (missing identity, bad argument)
    #[error("Invalid request: {0}")]
    Invalid(String),

    /// Record could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for admin operations
pub type AdminResult<T> = Result<T, AdminError>;
