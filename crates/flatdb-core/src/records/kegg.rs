//! KEGG GENES entries

use crate::family::KEGG_GENES;
use crate::fields::FlatFields;
use crate::record::FlatRecord;
use crate::records::first_word;
use flatdb_common::Result;

#[derive(Debug)]
pub struct KeggGenesRecord {
    fields: FlatFields,
}

impl KeggGenesRecord {
    pub fn new(entry: &str) -> Self {
        Self {
            fields: FlatFields::parse(entry, &KEGG_GENES),
        }
    }

    pub fn name(&self) -> String {
        self.fields.field_fetch("NAME", 0)
    }

    pub fn definition(&self) -> String {
        self.fields.field_fetch("DEFINITION", 0)
    }

    pub fn organism(&self) -> String {
        self.fields.field_fetch("ORGANISM", 0)
    }

    /// One entry per PATHWAY line, e.g. `eco00260  Glycine, serine and threonine metabolism`
    pub fn pathways(&self) -> Vec<String> {
        non_blank_lines(self.fields.lines_fetch("PATHWAY"))
    }

    pub fn orthologs(&self) -> Vec<String> {
        non_blank_lines(self.fields.lines_fetch("ORTHOLOGY"))
    }
}

fn non_blank_lines(lines: Vec<String>) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

impl FlatRecord for KeggGenesRecord {
    fn fields(&self) -> &FlatFields {
        &self.fields
    }

    fn entry_id(&self) -> Result<String> {
        Ok(first_word(&self.fields.field_fetch("ENTRY", 0)))
    }
}
