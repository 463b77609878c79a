//! Configuration management for flatdb CLI
//!
//! Defaults for format, output style and entry limit, read from the
//! environment (and `.env`, loaded in `main`).

use crate::error::{CliError, Result};
use crate::OutputFormat;
use flatdb_core::DatabaseFormat;
use serde::{Deserialize, Serialize};

// ============================================================================
// Environment Variables
// ============================================================================

pub const FORMAT_VAR: &str = "FLATDB_FORMAT";
pub const OUTPUT_VAR: &str = "FLATDB_OUTPUT";
pub const LIMIT_VAR: &str = "FLATDB_LIMIT";

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Format used when none is given and none can be guessed
    #[serde(default)]
    pub default_format: Option<DatabaseFormat>,

    #[serde(default)]
    pub output: OutputFormat,

    /// Entry limit when `--limit` is not given
    #[serde(default)]
    pub limit: Option<usize>,
}

impl Config {
    /// Load config from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(format) = lookup(FORMAT_VAR) {
            config.default_format = Some(format.parse()?);
        }

        if let Some(output) = lookup(OUTPUT_VAR) {
            config.output = output.parse()?;
        }

        if let Some(limit) = lookup(LIMIT_VAR) {
            let parsed = limit
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    CliError::config(format!("{} must be a positive integer, got '{}'", LIMIT_VAR, limit))
                })?;
            config.limit = Some(parsed);
        }

        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_all_values() {
        let config = Config::from_lookup(lookup(&[
            (FORMAT_VAR, "swissprot"),
            (OUTPUT_VAR, "JSON"),
            (LIMIT_VAR, "25"),
        ]))
        .unwrap();

        assert_eq!(config.default_format, Some(DatabaseFormat::Uniprot));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.limit, Some(25));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            Config::from_lookup(lookup(&[(FORMAT_VAR, "fasta")])),
            Err(CliError::Core(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[(OUTPUT_VAR, "yaml")])),
            Err(CliError::Config(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[(LIMIT_VAR, "-1")])),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = Config::from_lookup(lookup(&[(LIMIT_VAR, "0")])).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("positive integer"));
    }
}
