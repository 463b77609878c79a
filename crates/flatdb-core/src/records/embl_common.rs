//! Fields shared by EMBL-style records (EMBL, UniProt)

use crate::indexer::embl::REFERENCE_TAG;
use crate::record::FlatRecord;
use crate::records::split_list;

/// Accessors for AC, DE, KW, OS, OC, OG, the reference lines, DR and the
/// sequence block
pub trait EmblCommon: FlatRecord {
    /// AC numbers across all AC lines, primary first
    fn accessions(&self) -> Vec<String> {
        split_list(&self.fetch("AC", 0), ';')
    }

    fn description(&self) -> String {
        self.fields().field_fetch("DE", 0)
    }

    fn keywords(&self) -> Vec<String> {
        let text = self.fetch("KW", 0);
        split_list(text.strip_suffix('.').unwrap_or(&text), ';')
    }

    /// OS text without its closing period, e.g. `Homo sapiens (Human)`
    fn species(&self) -> String {
        let text = self.fetch("OS", 0);
        text.strip_suffix('.').unwrap_or(&text).to_string()
    }

    fn classification(&self) -> Vec<String> {
        let text = self.fetch("OC", 0);
        split_list(text.strip_suffix('.').unwrap_or(&text), ';')
    }

    fn organelle(&self) -> String {
        self.fields().field_fetch("OG", 0)
    }

    /// Raw reference blocks, one per `RN` line
    fn references(&self) -> Vec<String> {
        let mut blocks: Vec<String> = Vec::new();

        for line in self.get(REFERENCE_TAG).split_inclusive('\n') {
            if blocks.is_empty() || line.starts_with("RN") {
                blocks.push(String::new());
            }
            if let Some(block) = blocks.last_mut() {
                block.push_str(line);
            }
        }

        blocks
    }

    /// DR lines with the tag column removed
    fn database_refs(&self) -> Vec<String> {
        self.fields().lines_fetch("DR")
    }

    /// Residues from the untagged sequence lines
    fn sequence(&self) -> String {
        self.get("")
            .chars()
            .filter(char::is_ascii_alphabetic)
            .collect()
    }
}
