//! Error types for flatdb

use thiserror::Error;

/// Result type alias for flatdb operations
pub type Result<T> = std::result::Result<T, FlatDbError>;

/// Main error type for flatdb
///
/// Absent tags and short lines are never errors; they resolve to empty values
/// at the accessor level. The variants here cover contract violations and the
/// I/O boundary around the parser.
#[derive(Error, Debug)]
pub enum FlatDbError {
    /// A record type did not supply a required operation
    #[error("{operation} is not implemented for {record_type}")]
    NotImplemented {
        record_type: String,
        operation: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown database format: {0}")]
    UnknownFormat(String),
}

impl FlatDbError {
    /// Create a not-implemented error for `operation` on `record_type`
    pub fn not_implemented(record_type: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::NotImplemented {
            record_type: record_type.into(),
            operation: operation.into(),
        }
    }

    /// Create an unknown-format error
    pub fn unknown_format(msg: impl Into<String>) -> Self {
        Self::UnknownFormat(msg.into())
    }

    /// Returns true for programming-contract violations
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }
}
