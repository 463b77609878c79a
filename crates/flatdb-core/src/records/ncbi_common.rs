//! Fields shared by NCBI-style GenBank records

use crate::indexer::ncbi::{split_sub_level, split_top_level};
use crate::record::FlatRecord;
use crate::records::split_list;
use crate::tag::{clean, clean_block, strip_tag, tag_of};
use serde::Serialize;

/// Contents of a SOURCE section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Source {
    /// Free text on the SOURCE line itself
    pub common_name: String,
    /// Scientific name on the ORGANISM line
    pub organism: String,
    /// Lineage lines below ORGANISM, most general first
    pub taxonomy: Vec<String>,
}

/// Accessors for DEFINITION, ACCESSION, VERSION, KEYWORDS, SOURCE,
/// REFERENCE and COMMENT
pub trait NcbiCommon: FlatRecord {
    fn definition(&self) -> String {
        self.fields().field_fetch("DEFINITION", 0)
    }

    fn accessions(&self) -> Vec<String> {
        self.fetch("ACCESSION", 0)
            .split_whitespace()
            .map(String::from)
            .collect()
    }

    /// VERSION tokens, e.g. `["NC_001416.1"]`
    fn versions(&self) -> Vec<String> {
        self.fetch("VERSION", 0)
            .split_whitespace()
            .map(String::from)
            .collect()
    }

    fn accession_version(&self) -> Option<String> {
        self.versions().into_iter().next()
    }

    /// KEYWORDS split on `"; "`; a bare `.` yields no keywords
    fn keywords(&self) -> Vec<String> {
        let text = self.fetch("KEYWORDS", 0);
        let text = text.strip_suffix('.').unwrap_or(&text);
        text.split("; ")
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
            .map(String::from)
            .collect()
    }

    fn source(&self) -> Source {
        let tag_size = self.fields().tag_size();
        let mut source = Source::default();

        for sub in split_sub_level(self.get("SOURCE"), tag_size) {
            let mut lines = sub.lines();
            let header = lines.next().unwrap_or_default();

            match tag_of(header, tag_size) {
                "SOURCE" => source.common_name = clean_block(sub, tag_size),
                "ORGANISM" => {
                    source.organism = clean(strip_tag(header, tag_size));
                    let lineage = clean(
                        &lines
                            .map(|line| strip_tag(line, tag_size))
                            .collect::<Vec<_>>()
                            .join(" "),
                    );
                    source.taxonomy = split_list(lineage.trim_end_matches('.'), ';');
                },
                _ => {},
            }
        }

        source
    }

    /// Raw text of each REFERENCE block
    fn references(&self) -> Vec<String> {
        split_top_level(self.get("REFERENCE"))
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// COMMENT with the tag column removed, line breaks kept
    fn comment(&self) -> String {
        self.fields()
            .lines_fetch("COMMENT")
            .iter()
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
