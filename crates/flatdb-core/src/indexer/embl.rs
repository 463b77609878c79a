//! EMBL-style indexing (EMBL, UniProt)
//!
//! Each line is filed under the tag in its own first columns. `XX` spacer
//! lines are dropped and the reference lines (`RN`, `RA`, `RT`, ...) are
//! collected together under [`REFERENCE_TAG`].

use crate::fields::RawFieldMap;
use crate::tag::tag_of;
use tracing::debug;

/// Spacer tag that carries no data
pub const BLANK_SEPARATOR_TAG: &str = "XX";

/// Collecting key for every `R?` reference line
pub const REFERENCE_TAG: &str = "R";

fn is_reference_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    chars.next() == Some('R') && chars.next().is_some()
}

/// Group the lines of `text` by effective tag
pub fn build_raw_map(text: &str, tag_size: usize) -> RawFieldMap {
    let mut map = RawFieldMap::new();

    for line in text.split_inclusive('\n') {
        let tag = tag_of(line, tag_size);
        if tag == BLANK_SEPARATOR_TAG {
            continue;
        }

        let key = if is_reference_tag(tag) {
            REFERENCE_TAG
        } else {
            tag
        };
        map.append(key, line);
    }

    debug!(tags = map.len(), tag_size, "Indexed EMBL-style entry");
    map
}
