//! NCBI-style indexing (GenBank, KEGG)
//!
//! A section starts on a line whose first column holds a letter or `/` and
//! runs until the next such line:
//!
//! ```text
//! DEFINITION  Escherichia coli K-12 MG1655,
//!             complete genome.
//! SOURCE      Escherichia coli
//!   ORGANISM  Escherichia coli
//!             Bacteria; Pseudomonadota.
//! //
//! ```
//!
//! Within a section, a line indented by fewer than `tag_size` columns opens a
//! subsection (`  ORGANISM` above).

use crate::fields::RawFieldMap;
use crate::tag::tag_of;
use tracing::debug;

/// Split `text` into sections; each line where `starts_section` holds opens a
/// new one. The first line always opens the first section.
fn split_sections(text: &str, starts_section: impl Fn(&str) -> bool) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if offset > 0 && starts_section(line) {
            sections.push(&text[start..offset]);
            start = offset;
        }
        offset += line.len();
    }

    if start < text.len() {
        sections.push(&text[start..]);
    }

    sections
}

fn is_top_level_tag(line: &str) -> bool {
    line.starts_with(|c: char| c.is_ascii_alphabetic() || c == '/')
}

fn is_sub_level_tag(line: &str, tag_size: usize) -> bool {
    let indent = line
        .chars()
        .take_while(|c| c.is_whitespace() && *c != '\n')
        .count();

    (1..tag_size).contains(&indent)
        && line
            .chars()
            .nth(indent)
            .is_some_and(|c| !c.is_whitespace())
}

/// Top-level sections of an entry, in order
pub fn split_top_level(text: &str) -> Vec<&str> {
    split_sections(text, is_top_level_tag)
}

/// Subsections of one section, in order
///
/// Continuation lines whose tag column is entirely blank stay with the
/// preceding subsection.
pub fn split_sub_level(section: &str, tag_size: usize) -> Vec<&str> {
    split_sections(section, |line| is_sub_level_tag(line, tag_size))
}

/// Group the sections of `text` by tag
///
/// Repeated tags (e.g. several `REFERENCE` blocks) are concatenated in
/// encounter order.
pub fn build_raw_map(text: &str, tag_size: usize) -> RawFieldMap {
    let mut map = RawFieldMap::new();

    for section in split_top_level(text) {
        let first_line = section.lines().next().unwrap_or_default();
        map.append(tag_of(first_line, tag_size), section);
    }

    debug!(tags = map.len(), tag_size, "Indexed NCBI-style entry");
    map
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const SOURCE: &str = "SOURCE      Escherichia coli\n  ORGANISM  Escherichia coli\n            Bacteria; Pseudomonadota.\n";

    #[test]
    fn test_split_top_level() {
        let text = "ID          ABC\n            continued\nXX          more\n";
        let sections = split_top_level(text);
        assert_eq!(
            sections,
            vec!["ID          ABC\n            continued\n", "XX          more\n"]
        );
    }

    #[test]
    fn test_split_top_level_slash_and_indent() {
        let text = "ORIGIN      \n        1 gatc\n//";
        assert_eq!(split_top_level(text), vec!["ORIGIN      \n        1 gatc\n", "//"]);
    }

    #[test]
    fn test_split_top_level_ignores_digits_in_column_zero() {
        let text = "LOCUS       X\n1 not a tag\n";
        assert_eq!(split_top_level(text).len(), 1);
    }

    #[test]
    fn test_first_line_always_opens_section() {
        let text = "  indented start\nLOCUS       X\n";
        assert_eq!(split_top_level(text), vec!["  indented start\n", "LOCUS       X\n"]);
    }

    #[test]
    fn test_split_sub_level() {
        let subs = split_sub_level(SOURCE, 12);
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0], "SOURCE      Escherichia coli\n");
        assert!(subs[1].starts_with("  ORGANISM"));
        assert!(subs[1].ends_with("Pseudomonadota.\n"));
    }

    #[test]
    fn test_split_sub_level_blank_tag_column_continues() {
        let text = "REFERENCE   1\n  AUTHORS   Doe,J.\n            and Roe,R.\n  TITLE     A title\n";
        let subs = split_sub_level(text, 12);
        assert_eq!(subs.len(), 3);
        assert_eq!(subs[1], "  AUTHORS   Doe,J.\n            and Roe,R.\n");
    }

    #[test]
    fn test_split_sub_level_deep_indent_continues() {
        let text = "FEATURES    x\n            at_tag_size\n                deeper\n";
        assert_eq!(split_sub_level(text, 12), vec![text]);
    }

    #[test]
    fn test_split_sub_level_blank_lines_continue() {
        let text = "SOURCE      x\n\n   \n  ORGANISM  y\n";
        assert_eq!(
            split_sub_level(text, 12),
            vec!["SOURCE      x\n\n   \n", "  ORGANISM  y\n"]
        );
    }

    #[test]
    fn test_build_raw_map_concatenates_repeated_tags() {
        let text = "REFERENCE   1\n  AUTHORS   A\nREFERENCE   2\n  AUTHORS   B\n";
        let map = build_raw_map(text, 12);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("REFERENCE"), text);
    }

    #[test]
    fn test_build_raw_map_empty() {
        let map = build_raw_map("", 12);
        assert!(map.is_empty());
        assert_eq!(map.get("LOCUS"), "");
    }
}
