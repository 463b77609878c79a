//! `flatdb get` command implementation
//!
//! Prints one field of every entry: cleaned (default), raw (`--raw`) or as
//! tag-stripped lines (`--lines`).

use super::{load, output_format, print_json};
use crate::config::Config;
use crate::error::Result;
use crate::{InputArgs, OutputFormat};
use colored::Colorize;
use flatdb_core::FlatRecord;
use serde::Serialize;

/// How the field text is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldView {
    Cleaned { skip: usize },
    Raw,
    Lines,
}

impl FieldView {
    pub fn from_flags(skip: usize, raw: bool, lines: bool) -> Self {
        if raw {
            FieldView::Raw
        } else if lines {
            FieldView::Lines
        } else {
            FieldView::Cleaned { skip }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Lines(Vec<String>),
}

#[derive(Debug, Serialize)]
pub struct EntryField {
    pub id: String,
    pub present: bool,
    pub value: FieldValue,
}

fn field_value(record: &dyn FlatRecord, tag: &str, view: FieldView) -> FieldValue {
    match view {
        FieldView::Cleaned { skip } => FieldValue::Text(record.fields().field_fetch(tag, skip)),
        FieldView::Raw => FieldValue::Text(record.get(tag).to_string()),
        FieldView::Lines => FieldValue::Lines(record.fields().lines_fetch(tag)),
    }
}

/// Look `tag` up in every entry
pub fn collect(input: &InputArgs, config: &Config, tag: &str, view: FieldView) -> Result<Vec<EntryField>> {
    load(input, config)?
        .records
        .iter()
        .map(|record| -> Result<EntryField> {
            Ok(EntryField {
                id: record.entry_id()?,
                present: record.exists(tag),
                value: field_value(record.as_ref(), tag, view),
            })
        })
        .collect()
}

pub fn run(input: &InputArgs, config: &Config, tag: &str, view: FieldView) -> Result<()> {
    let entries = collect(input, config, tag, view)?;

    if output_format(input, config) == OutputFormat::Json {
        return print_json(&entries);
    }

    for entry in &entries {
        if !entry.present {
            println!("{} {}", entry.id.green().bold(), "-".dimmed());
            continue;
        }

        match &entry.value {
            FieldValue::Text(text) if view == FieldView::Raw => {
                println!("{}", entry.id.green().bold());
                print!("{}", text);
                if !text.ends_with('\n') {
                    println!();
                }
            },
            FieldValue::Text(text) => println!("{} {}", entry.id.green().bold(), text),
            FieldValue::Lines(lines) => {
                println!("{}", entry.id.green().bold());
                for line in lines {
                    println!("  {}", line);
                }
            },
        }
    }

    Ok(())
}
