//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::RecordType;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No record exists under the requested (name, type) key
    #[error("Record not found: {name} ({record_type})")]
    RecordNotFound {
        name: String,
        record_type: RecordType,
    },

    /// A record already exists under the (name, type) key
    #[error("Record already exists: {name} ({record_type})")]
    RecordExists {
        name: String,
        record_type: RecordType,
    },

    /// Malformed input (bad record type, empty name/value, over-long name)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl CoreError {
    /// Whether this is expected behavior (bad user input, missing resource)
    /// rather than an internal failure. Used for log classification:
    /// level `warn` when `true`, level `error` when `false`.
    ///
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::RecordNotFound { .. } | Self::RecordExists { .. } | Self::ValidationError(_) => {
                true
            }
            Self::StorageError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
