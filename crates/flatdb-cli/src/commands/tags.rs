//! `flatdb tags` command implementation
//!
//! Lists the tags present in each entry.

use super::{load, output_format, print_json, tag_label};
use crate::config::Config;
use crate::error::Result;
use crate::{InputArgs, OutputFormat};
use colored::Colorize;
use flatdb_core::FlatRecord;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EntryTags {
    pub id: String,
    pub tags: Vec<String>,
}

/// Collect each entry's id and tag list
pub fn collect(input: &InputArgs, config: &Config) -> Result<Vec<EntryTags>> {
    load(input, config)?
        .records
        .iter()
        .map(|record| -> Result<EntryTags> {
            Ok(EntryTags {
                id: record.entry_id()?,
                tags: record.tags().into_iter().map(String::from).collect(),
            })
        })
        .collect()
}

pub fn run(input: &InputArgs, config: &Config) -> Result<()> {
    let entries = collect(input, config)?;

    if output_format(input, config) == OutputFormat::Json {
        return print_json(&entries);
    }

    if entries.is_empty() {
        println!("No entries found.");
        return Ok(());
    }

    for entry in &entries {
        let labels: Vec<&str> = entry.tags.iter().map(|tag| tag_label(tag)).collect();
        println!("{} {}", entry.id.green().bold(), labels.join(" "));
    }

    Ok(())
}
