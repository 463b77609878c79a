//! Record family descriptors and database format selection
//!
//! | Format  | Delimiter   | Tag size | Style |
//! |---------|-------------|----------|-------|
//! | genbank | `\n//\n`    | 12       | NCBI  |
//! | kegg    | `\n///\n`   | 12       | NCBI  |
//! | embl    | `\n//\n`    | 5        | EMBL  |
//! | uniprot | `\n//\n`    | 5        | EMBL  |

use crate::indexer::TagStyle;
use crate::record::FlatRecord;
use crate::records::{EmblRecord, GenbankRecord, KeggGenesRecord, UniProtRecord};
use flatdb_common::FlatDbError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// How entries of one database are separated and tagged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordFamily {
    pub name: &'static str,
    /// Entry terminator; it stays attached to the end of each entry
    pub delimiter: &'static str,
    /// Width of the tag column in characters
    pub tag_size: usize,
    pub style: TagStyle,
}

pub const GENBANK: RecordFamily = RecordFamily {
    name: "genbank",
    delimiter: "\n//\n",
    tag_size: 12,
    style: TagStyle::Ncbi,
};

pub const KEGG_GENES: RecordFamily = RecordFamily {
    name: "kegg",
    delimiter: "\n///\n",
    tag_size: 12,
    style: TagStyle::Ncbi,
};

pub const EMBL: RecordFamily = RecordFamily {
    name: "embl",
    delimiter: "\n//\n",
    tag_size: 5,
    style: TagStyle::Embl,
};

pub const UNIPROT: RecordFamily = RecordFamily {
    name: "uniprot",
    delimiter: "\n//\n",
    tag_size: 5,
    style: TagStyle::Embl,
};

/// Supported flat-file databases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseFormat {
    Genbank,
    Kegg,
    Embl,
    Uniprot,
}

impl DatabaseFormat {
    pub const ALL: [DatabaseFormat; 4] = [
        DatabaseFormat::Genbank,
        DatabaseFormat::Kegg,
        DatabaseFormat::Embl,
        DatabaseFormat::Uniprot,
    ];

    pub fn family(self) -> &'static RecordFamily {
        match self {
            DatabaseFormat::Genbank => &GENBANK,
            DatabaseFormat::Kegg => &KEGG_GENES,
            DatabaseFormat::Embl => &EMBL,
            DatabaseFormat::Uniprot => &UNIPROT,
        }
    }

    /// Parse one entry into the record type of this database
    pub fn parse_record(self, entry: &str) -> Box<dyn FlatRecord + Send + Sync> {
        match self {
            DatabaseFormat::Genbank => Box::new(GenbankRecord::new(entry)),
            DatabaseFormat::Kegg => Box::new(KeggGenesRecord::new(entry)),
            DatabaseFormat::Embl => Box::new(EmblRecord::new(entry)),
            DatabaseFormat::Uniprot => Box::new(UniProtRecord::new(entry)),
        }
    }

    /// Guess the format from a file extension (`.gz` is looked through)
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_lowercase();
        let name = name.strip_suffix(".gz").unwrap_or(&name);
        let extension = Path::new(name).extension()?.to_str()?;

        match extension {
            "gb" | "gbk" | "genbank" | "gbff" | "gpff" => Some(DatabaseFormat::Genbank),
            "kegg" | "kff" | "ent" => Some(DatabaseFormat::Kegg),
            "embl" | "ebl" => Some(DatabaseFormat::Embl),
            "dat" | "sp" | "swiss" | "uniprot" => Some(DatabaseFormat::Uniprot),
            _ => None,
        }
    }

    /// Guess the format from the first non-blank line of an entry
    pub fn detect(text: &str) -> Option<Self> {
        let first = text.lines().find(|line| !line.trim().is_empty())?;

        if first.starts_with("LOCUS") {
            Some(DatabaseFormat::Genbank)
        } else if first.starts_with("ENTRY") {
            Some(DatabaseFormat::Kegg)
        } else if first.starts_with("ID ") {
            let uniprot = first.contains("Reviewed;")
                || first.contains("Unreviewed;")
                || first.trim_end().ends_with(" AA.");
            Some(if uniprot {
                DatabaseFormat::Uniprot
            } else {
                DatabaseFormat::Embl
            })
        } else {
            warn!(line = first, "Unrecognized first line of flat-file entry");
            None
        }
    }
}

impl std::str::FromStr for DatabaseFormat {
    type Err = FlatDbError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "genbank" | "gb" | "gbk" => Ok(DatabaseFormat::Genbank),
            "kegg" | "genes" => Ok(DatabaseFormat::Kegg),
            "embl" => Ok(DatabaseFormat::Embl),
            "uniprot" | "swissprot" | "sp" => Ok(DatabaseFormat::Uniprot),
            _ => Err(FlatDbError::unknown_format(s)),
        }
    }
}

impl std::fmt::Display for DatabaseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.family().name)
    }
}
