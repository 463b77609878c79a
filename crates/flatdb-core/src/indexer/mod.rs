//! Record indexers: split one entry's text into a [`RawFieldMap`]
//!
//! - [`ncbi`]: column-0 tags open a section, indented lines continue it
//! - [`embl`]: every physical line carries its own tag

pub mod embl;
pub mod ncbi;

use crate::fields::RawFieldMap;
use serde::{Deserialize, Serialize};

/// Tag layout convention of a record family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagStyle {
    /// GenBank, KEGG
    Ncbi,
    /// EMBL, UniProt
    Embl,
}

impl TagStyle {
    /// Run the indexer for this convention
    pub fn build_raw_map(self, text: &str, tag_size: usize) -> RawFieldMap {
        match self {
            TagStyle::Ncbi => ncbi::build_raw_map(text, tag_size),
            TagStyle::Embl => embl::build_raw_map(text, tag_size),
        }
    }
}
