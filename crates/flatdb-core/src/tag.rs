//! Fixed-width tag column codec
//!
//! Every flat-file line reserves its first `tag_size` characters for the tag
//! name. Widths are counted in characters, never bytes, so multi-byte content
//! is never split mid-character.

/// Byte offset of the character at `column`, or `None` if the line is shorter
fn column_offset(line: &str, column: usize) -> Option<usize> {
    line.char_indices().nth(column).map(|(offset, _)| offset)
}

/// Tag name carried by `line`
///
/// Lines shorter than `tag_size` yield the whole trimmed line.
pub fn tag_of(line: &str, tag_size: usize) -> &str {
    let end = column_offset(line, tag_size).unwrap_or(line.len());
    line[..end].trim()
}

/// Field content of `line` with the tag column removed
///
/// The remainder is returned untrimmed; lines no longer than `tag_size` yield
/// an empty string.
pub fn strip_tag(line: &str, tag_size: usize) -> &str {
    match column_offset(line, tag_size) {
        Some(offset) => &line[offset..],
        None => "",
    }
}

/// Collapse every whitespace run (newlines included) to one space and trim
pub fn clean(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip the tag column from every line of `text`, then [`clean`] it
pub fn clean_block(text: &str, tag_size: usize) -> String {
    let body = text
        .split('\n')
        .map(|line| strip_tag(line, tag_size))
        .collect::<Vec<_>>()
        .join("\n");
    clean(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_of() {
        assert_eq!(tag_of("DEFINITION  Escherichia coli", 12), "DEFINITION");
        assert_eq!(tag_of("  ORGANISM  Escherichia coli", 12), "ORGANISM");
        assert_eq!(tag_of("            continued", 12), "");
        assert_eq!(tag_of("ID   P12345", 5), "ID");
    }

    #[test]
    fn test_tag_of_short_line() {
        assert_eq!(tag_of("XX", 5), "XX");
        assert_eq!(tag_of("XX\n", 5), "XX");
        assert_eq!(tag_of("", 12), "");
    }

    #[test]
    fn test_strip_tag() {
        assert_eq!(strip_tag("ID   VALUE HERE", 2), "   VALUE HERE");
        assert_eq!(strip_tag("DE   Cytochrome c.\n", 5), "Cytochrome c.\n");
        assert_eq!(strip_tag("XX", 5), "");
        assert_eq!(strip_tag("XXXXX", 5), "");
    }

    #[test]
    fn test_multibyte_columns() {
        // 'é' is two bytes but one column
        assert_eq!(tag_of("Aé   rest", 2), "Aé");
        assert_eq!(strip_tag("Aé   rest", 2), "   rest");
        assert_eq!(strip_tag("é", 5), "");
    }

    #[test]
    fn test_clean() {
        assert_eq!(clean("  a\n   b\t c  \n"), "a b c");
        assert_eq!(clean(" \n "), "");
    }

    #[test]
    fn test_clean_block() {
        let block = "  ORGANISM  Escherichia coli\n            Bacteria.\n";
        assert_eq!(clean_block(block, 12), "Escherichia coli Bacteria.");
        assert_eq!(clean_block("", 12), "");
    }
}
