//! flatdb CLI Library
//!
//! Command-line inspection of flat-file database entries.
//!
//! - **Tag listing**: entry ids and the tags each entry carries (`flatdb tags`)
//! - **Field lookup**: one field per entry, cleaned, raw or by line (`flatdb get`)
//! - **Entry dump**: every tag's cleaned value (`flatdb show`)

pub mod commands;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, Result};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// flatdb - Flat-file database inspector
#[derive(Parser, Debug)]
#[command(name = "flatdb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the full CLI reference as markdown and exit
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List each entry's id and tags
    Tags {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print one field of each entry
    Get {
        #[command(flatten)]
        input: InputArgs,

        /// Tag to look up (e.g. DEFINITION, OS, "" for sequence lines)
        #[arg(short, long)]
        tag: String,

        /// Leading lines of the field to drop
        #[arg(short, long, default_value = "0")]
        skip: usize,

        /// Print the stored text unmodified
        #[arg(long, conflicts_with = "lines")]
        raw: bool,

        /// Print one line per source line, tag column removed
        #[arg(long)]
        lines: bool,
    },

    /// Print every tag's cleaned value for each entry
    Show {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Arguments shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Flat file to read (.gz accepted)
    pub file: PathBuf,

    /// Database format (genbank, kegg, embl, uniprot); guessed when omitted
    #[arg(short, long)]
    pub format: Option<String>,

    /// Maximum number of entries to read
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output style
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

/// How command results are printed
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CliError::config(format!(
                "Invalid output format '{}'. Valid values: text, json",
                s
            ))),
        }
    }
}
