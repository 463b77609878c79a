//! CLI command implementations
//!
//! Each subcommand has its own module with a `run` function. Input loading and
//! output printing are shared here.

pub mod get;
pub mod show;
pub mod tags;

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::{InputArgs, OutputFormat};
use flatdb_core::{BoxedRecord, DatabaseFormat, FlatFileReader};
use serde::Serialize;
use tracing::{debug, info};

/// Entries of the input file, parsed with the resolved format
pub struct LoadedInput {
    pub format: DatabaseFormat,
    pub records: Vec<BoxedRecord>,
}

/// Resolve the format: `--format`, then the file name, then the first
/// entry's content, then `FLATDB_FORMAT`
pub fn resolve_format(input: &InputArgs, config: &Config, text: &str) -> Result<DatabaseFormat> {
    if let Some(format) = &input.format {
        return Ok(format.parse()?);
    }

    if let Some(format) = DatabaseFormat::from_path(&input.file) {
        debug!(%format, "Format from file name");
        return Ok(format);
    }

    if let Some(format) = DatabaseFormat::detect(text) {
        debug!(%format, "Format from content");
        return Ok(format);
    }

    config
        .default_format
        .ok_or_else(|| CliError::unknown_format(input.file.display().to_string()))
}

/// Read and parse the input file
pub fn load(input: &InputArgs, config: &Config) -> Result<LoadedInput> {
    if !input.file.exists() {
        return Err(CliError::FileNotFound(input.file.display().to_string()));
    }

    let text = flatdb_core::read_text(&input.file)?;
    let format = resolve_format(input, config, &text)?;

    let mut reader = FlatFileReader::new(format);
    if let Some(limit) = input.limit.or(config.limit) {
        reader = reader.with_limit(limit);
    }

    let records = reader.parse_str(&text);
    info!(file = %input.file.display(), %format, entries = records.len(), "Loaded flat file");

    Ok(LoadedInput { format, records })
}

/// Output style: `--output`, then `FLATDB_OUTPUT`
pub fn output_format(input: &InputArgs, config: &Config) -> OutputFormat {
    input.output.unwrap_or(config.output)
}

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display label for a tag; sequence lines carry an empty tag
pub fn tag_label(tag: &str) -> &str {
    if tag.is_empty() {
        "(untagged)"
    } else {
        tag
    }
}
