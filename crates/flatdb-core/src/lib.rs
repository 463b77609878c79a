//! flatdb Core
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Tag indexing and cached field access for fixed-width bioinformatics flat
//! files.
//!
//! An entry is indexed once into a [`RawFieldMap`] (tag name to raw text) by
//! one of two indexers:
//!
//! - **NCBI style** ([`indexer::ncbi`]): GenBank and KEGG GENES, where a tag
//!   owns every following line until the next tagged line
//! - **EMBL style** ([`indexer::embl`]): EMBL and UniProtKB, where every line
//!   carries its own two-letter tag
//!
//! [`FlatFields`] wraps the map with memoized accessors, and the concrete
//! records in [`records`] build typed fields on top of it.
//!
//! # Example
//!
//! ```
//! use flatdb_core::{FlatRecord, GenbankRecord, NcbiCommon};
//!
//! let entry = "LOCUS       NC_000913 4641652 bp DNA circular BCT 09-MAR-2022\n\
//!              DEFINITION  Escherichia coli str. K-12 substr. MG1655,\n\
//!              \x20           complete genome.\n\
//!              //\n";
//!
//! let record = GenbankRecord::new(entry);
//! assert_eq!(record.entry_id().unwrap_or_default(), "NC_000913");
//! assert_eq!(
//!     record.definition(),
//!     "Escherichia coli str. K-12 substr. MG1655, complete genome."
//! );
//! ```

pub mod family;
pub mod fields;
pub mod indexer;
pub mod reader;
pub mod record;
pub mod records;
pub mod tag;

// Re-export commonly used types
pub use family::{DatabaseFormat, RecordFamily};
pub use fields::{FlatFields, RawFieldMap};
pub use indexer::TagStyle;
pub use reader::{read_text, BoxedRecord, FlatFileReader};
pub use record::{FlatRecord, GenericRecord};
pub use records::{
    EmblCommon, EmblRecord, GenbankRecord, KeggGenesRecord, Locus, NcbiCommon, Source, Topology,
    UniProtRecord,
};

pub use flatdb_common::{FlatDbError, Result};
