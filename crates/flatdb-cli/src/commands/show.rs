//! `flatdb show` command implementation

use super::{load, output_format, print_json, tag_label};
use crate::config::Config;
use crate::error::Result;
use crate::{InputArgs, OutputFormat};
use colored::Colorize;
use flatdb_core::FlatRecord;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TagValue {
    pub tag: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct EntrySummary {
    pub id: String,
    pub format: String,
    pub fields: Vec<TagValue>,
}

/// Every tag's cleaned value, per entry
pub fn collect(input: &InputArgs, config: &Config) -> Result<Vec<EntrySummary>> {
    let loaded = load(input, config)?;
    let format = loaded.format.to_string();

    loaded
        .records
        .iter()
        .map(|record| -> Result<EntrySummary> {
            let fields = record
                .tags()
                .into_iter()
                .map(|tag| TagValue {
                    tag: tag.to_string(),
                    value: record.fields().field_fetch(tag, 0),
                })
                .collect();

            Ok(EntrySummary {
                id: record.entry_id()?,
                format: format.clone(),
                fields,
            })
        })
        .collect()
}

pub fn run(input: &InputArgs, config: &Config) -> Result<()> {
    let entries = collect(input, config)?;

    if output_format(input, config) == OutputFormat::Json {
        return print_json(&entries);
    }

    for entry in &entries {
        println!("{} ({})", entry.id.cyan().bold(), entry.format);
        for field in &entry.fields {
            println!("  {:<12} {}", tag_label(&field.tag).yellow(), field.value);
        }
        println!();
    }

    Ok(())
}
