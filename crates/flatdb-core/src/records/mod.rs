//! Database-specific record types
//!
//! Each type wraps a [`FlatFields`](crate::FlatFields) indexed with its
//! family's conventions and supplies `entry_id`. Field helpers shared by a
//! family live in [`NcbiCommon`] and [`EmblCommon`].

pub mod embl;
pub mod embl_common;
pub mod genbank;
pub mod kegg;
pub mod ncbi_common;
pub mod uniprot;

pub use embl::EmblRecord;
pub use embl_common::EmblCommon;
pub use genbank::{GenbankRecord, Locus, Topology};
pub use kegg::KeggGenesRecord;
pub use ncbi_common::{NcbiCommon, Source};
pub use uniprot::UniProtRecord;

/// Split `text` on `sep`, trimming items and dropping empty ones
pub(crate) fn split_list(text: &str, sep: char) -> Vec<String> {
    text.split(sep)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// First whitespace-separated word of `text`, or `""`
pub(crate) fn first_word(text: &str) -> String {
    text.split_whitespace().next().unwrap_or_default().to_string()
}
