//! flatdb Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared error handling and logging for the flatdb workspace.
//!
//! - **Error Handling**: [`FlatDbError`] and the [`Result`] alias used by every crate
//! - **Logging**: tracing subscriber setup driven by [`logging::LogConfig`]
//!
//! # Example
//!
//! ```no_run
//! use flatdb_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let _guard = init_logging(&LogConfig::from_env()?)?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{FlatDbError, Result};
