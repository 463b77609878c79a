//! Multi-entry flat file reader
//!
//! Splits a whole file on its family delimiter and hands each chunk to the
//! record parser. The delimiter stays attached to the end of its entry.

use crate::family::DatabaseFormat;
use crate::record::FlatRecord;
use flate2::read::GzDecoder;
use flatdb_common::Result;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

pub type BoxedRecord = Box<dyn FlatRecord + Send + Sync>;

/// Whole contents of `path`; files ending in `.gz` are decompressed
pub fn read_text(path: &Path) -> Result<String> {
    let file = std::fs::File::open(path)?;
    let mut text = String::new();

    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        GzDecoder::new(file).read_to_string(&mut text)?;
    } else {
        std::io::BufReader::new(file).read_to_string(&mut text)?;
    }

    debug!(path = %path.display(), bytes = text.len(), "Read flat file");
    Ok(text)
}

/// Reader for one database format
#[derive(Debug, Clone)]
pub struct FlatFileReader {
    format: DatabaseFormat,
    /// Maximum number of entries to return (None for unlimited)
    limit: Option<usize>,
}

impl FlatFileReader {
    pub fn new(format: DatabaseFormat) -> Self {
        Self {
            format,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn format(&self) -> DatabaseFormat {
        self.format
    }

    /// Entry chunks of `text`, whitespace-only chunks skipped
    pub fn split_entries<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let entries: Vec<&str> = text
            .split_inclusive(self.format.family().delimiter)
            .filter(|chunk| !chunk.trim().is_empty())
            .take(self.limit.unwrap_or(usize::MAX))
            .collect();

        debug!(format = %self.format, entries = entries.len(), "Split flat file into entries");
        entries
    }

    /// Read a file into entry chunks
    pub fn read_file(&self, path: &Path) -> Result<Vec<String>> {
        info!(path = %path.display(), format = %self.format, "Reading flat file");
        let text = read_text(path)?;

        Ok(self
            .split_entries(&text)
            .into_iter()
            .map(String::from)
            .collect())
    }

    /// Parse every entry of `text`
    pub fn parse_str(&self, text: &str) -> Vec<BoxedRecord> {
        self.split_entries(text)
            .into_iter()
            .map(|entry| self.format.parse_record(entry))
            .collect()
    }

    /// Parse every entry of the file at `path`
    pub fn parse_file(&self, path: &Path) -> Result<Vec<BoxedRecord>> {
        Ok(self
            .read_file(path)?
            .iter()
            .map(|entry| self.format.parse_record(entry))
            .collect())
    }
}
