//! GenBank / RefSeq flat file entries
//!
//! Format documentation: <https://www.ncbi.nlm.nih.gov/Sitemap/samplerecord.html>

use super::ncbi_common::NcbiCommon;
use crate::family::GENBANK;
use crate::fields::FlatFields;
use crate::record::FlatRecord;
use crate::records::first_word;
use flatdb_common::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    Linear,
    Circular,
}

/// Parsed LOCUS line
///
/// `LOCUS       NC_001416              48502 bp    DNA     linear   PHG 05-MAR-2020`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Locus {
    pub name: String,
    pub length: Option<u64>,
    pub molecule_type: String,
    pub topology: Option<Topology>,
    pub division: Option<String>,
    pub date: Option<String>,
}

fn is_date(token: &str) -> bool {
    token.len() == 11 && token.split('-').count() == 3
}

impl Locus {
    /// Parse the LOCUS body (tag column already removed)
    ///
    /// Old and new column layouts both work because tokens are classified
    /// rather than read from fixed positions.
    pub fn parse(body: &str) -> Self {
        let tokens: Vec<&str> = body.split_whitespace().collect();
        let mut locus = Locus {
            name: tokens.first().copied().unwrap_or_default().to_string(),
            length: tokens.get(1).and_then(|token| token.parse().ok()),
            ..Default::default()
        };

        for &token in tokens.get(3..).unwrap_or_default() {
            match token.to_lowercase().as_str() {
                "linear" => locus.topology = Some(Topology::Linear),
                "circular" => locus.topology = Some(Topology::Circular),
                _ if is_date(token) => locus.date = Some(token.to_string()),
                _ if locus.molecule_type.is_empty() => locus.molecule_type = token.to_string(),
                _ => locus.division = Some(token.to_string()),
            }
        }

        locus
    }
}

/// One GenBank entry
#[derive(Debug)]
pub struct GenbankRecord {
    fields: FlatFields,
}

impl GenbankRecord {
    pub fn new(entry: &str) -> Self {
        Self {
            fields: FlatFields::parse(entry, &GENBANK),
        }
    }

    pub fn locus(&self) -> Locus {
        Locus::parse(&self.fields.field_fetch("LOCUS", 0))
    }

    /// Residues from the ORIGIN block, positions and spacing removed
    pub fn sequence(&self) -> String {
        self.get("ORIGIN")
            .lines()
            .skip(1)
            .flat_map(|line| line.chars().filter(char::is_ascii_alphabetic))
            .collect()
    }
}

impl FlatRecord for GenbankRecord {
    fn fields(&self) -> &FlatFields {
        &self.fields
    }

    /// Locus name, the first word of LOCUS
    fn entry_id(&self) -> Result<String> {
        Ok(first_word(&self.fields.field_fetch("LOCUS", 0)))
    }
}

impl NcbiCommon for GenbankRecord {}
