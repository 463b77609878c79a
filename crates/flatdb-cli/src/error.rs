//! Error types for flatdb CLI
//!
//! Messages are shown to users as-is, so each one says what to check.

use flatdb_common::FlatDbError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    /// Input file is missing
    #[error("File not found: '{0}'. Verify the file path exists and you have read permissions.")]
    FileNotFound(String),

    /// Format could not be resolved from flag, extension, content or config
    #[error("Could not determine the database format of '{0}'. Pass --format (genbank, kegg, embl, uniprot) or set FLATDB_FORMAT.")]
    UnknownFormat(String),

    /// Error raised by the parsing library
    #[error(transparent)]
    Core(#[from] FlatDbError),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions.")]
    Io(#[from] std::io::Error),

    /// JSON output failed
    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables or .env file.")]
    Config(String),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an unknown-format error for `path`
    pub fn unknown_format(path: impl Into<String>) -> Self {
        Self::UnknownFormat(path.into())
    }
}
