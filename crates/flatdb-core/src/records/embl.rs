//! EMBL nucleotide entries

use super::embl_common::EmblCommon;
use crate::family::EMBL;
use crate::fields::FlatFields;
use crate::record::FlatRecord;
use flatdb_common::Result;

#[derive(Debug)]
pub struct EmblRecord {
    fields: FlatFields,
}

impl EmblRecord {
    pub fn new(entry: &str) -> Self {
        Self {
            fields: FlatFields::parse(entry, &EMBL),
        }
    }

    /// Semicolon-separated items of the ID line
    ///
    /// `ID   X56734; SV 1; linear; mRNA; STD; PLN; 1859 BP.` gives
    /// `["X56734", "SV 1", "linear", "mRNA", "STD", "PLN", "1859 BP."]`
    pub fn id_line(&self) -> Vec<String> {
        super::split_list(&self.fields.field_fetch("ID", 0), ';')
    }
}

impl FlatRecord for EmblRecord {
    fn fields(&self) -> &FlatFields {
        &self.fields
    }

    /// Primary accession from the ID line
    fn entry_id(&self) -> Result<String> {
        Ok(self.id_line().into_iter().next().unwrap_or_default())
    }
}

impl EmblCommon for EmblRecord {}
