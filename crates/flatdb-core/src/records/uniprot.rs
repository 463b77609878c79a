//! UniProtKB (Swiss-Prot / TrEMBL) entries
//!
//! See: https://web.expasy.org/docs/userman.html

use super::embl_common::EmblCommon;
use crate::family::UNIPROT;
use crate::fields::FlatFields;
use crate::record::FlatRecord;
use crate::records::{first_word, split_list};
use flatdb_common::Result;

#[derive(Debug)]
pub struct UniProtRecord {
    fields: FlatFields,
}

/// Text after `key` up to the first of `terminators`, trimmed
fn value_after<'a>(text: &'a str, key: &str, terminators: &[char]) -> Option<&'a str> {
    let start = text.find(key)? + key.len();
    let rest = &text[start..];
    let end = rest.find(terminators).unwrap_or(rest.len());
    Some(rest[..end].trim()).filter(|value| !value.is_empty())
}

/// Number preceding `unit` in the SQ header, e.g. `105` before `AA;`
fn sq_value<T: std::str::FromStr>(header: &str, unit: &str) -> Option<T> {
    let tokens: Vec<&str> = header.split_whitespace().collect();
    tokens
        .windows(2)
        .find(|pair| pair[1] == unit)
        .and_then(|pair| pair[0].parse().ok())
}

impl UniProtRecord {
    pub fn new(entry: &str) -> Self {
        Self {
            fields: FlatFields::parse(entry, &UNIPROT),
        }
    }

    /// `RecName: Full=` value from DE, evidence tags removed
    pub fn protein_name(&self) -> Option<String> {
        value_after(&self.description(), "RecName: Full=", &[';', '{']).map(String::from)
    }

    /// Primary gene name from `GN   Name=...;`
    pub fn gene_name(&self) -> Option<String> {
        split_list(&self.fetch("GN", 0), ';')
            .iter()
            .find_map(|item| item.strip_prefix("Name="))
            .and_then(|name| name.split([' ', '{']).next())
            .map(String::from)
    }

    /// `NCBI_TaxID` from the OX line
    pub fn taxonomy_id(&self) -> Option<u32> {
        value_after(&self.fetch("OX", 0), "NCBI_TaxID=", &[';', ' ', '{'])
            .and_then(|id| id.parse().ok())
    }

    pub fn sequence_length(&self) -> Option<u32> {
        sq_value(&self.fields.field_fetch("SQ", 0), "AA;")
    }

    /// Molecular weight in daltons
    pub fn molecular_weight(&self) -> Option<u64> {
        sq_value(&self.fields.field_fetch("SQ", 0), "MW;")
    }
}

impl FlatRecord for UniProtRecord {
    fn fields(&self) -> &FlatFields {
        &self.fields
    }

    /// Entry name, e.g. `CYC_HUMAN`
    fn entry_id(&self) -> Result<String> {
        Ok(first_word(&self.fields.field_fetch("ID", 0)))
    }
}

impl EmblCommon for UniProtRecord {}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_value_after() {
        assert_eq!(
            value_after("RecName: Full=Test protein {ECO:0000255};", "RecName: Full=", &[';', '{']),
            Some("Test protein")
        );
        assert_eq!(value_after("AltName: Full=X;", "RecName: Full=", &[';']), None);
    }

    #[test]
    fn test_sq_value() {
        let header = "SEQUENCE   123 AA;  14078 MW;  B4840739BF7D4121 CRC64;";
        assert_eq!(sq_value::<u32>(header, "AA;"), Some(123));
        assert_eq!(sq_value::<u64>(header, "MW;"), Some(14078));
        assert_eq!(sq_value::<u32>("", "AA;"), None);
    }

    #[test]
    fn test_gene_name_ignores_orf_names() {
        let record = UniProtRecord::new(
            "ID   TEST_ECOLI              Reviewed;         100 AA.\nGN   OrderedLocusNames=b0001; Name=thrL {ECO:0000303};\n//\n",
        );
        assert_eq!(record.gene_name(), Some("thrL".to_string()));
    }

    #[test]
    fn test_missing_fields() {
        let record = UniProtRecord::new("ID   EMPTY_HUMAN   Reviewed;   0 AA.\n");
        assert_eq!(record.entry_id().unwrap(), "EMPTY_HUMAN");
        assert_eq!(record.protein_name(), None);
        assert_eq!(record.gene_name(), None);
        assert_eq!(record.taxonomy_id(), None);
        assert_eq!(record.sequence_length(), None);
        assert!(record.sequence().is_empty());
    }
}
