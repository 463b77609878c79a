//! The record capability shared by every database entry type

use crate::family::RecordFamily;
use crate::fields::FlatFields;
use flatdb_common::{FlatDbError, Result};

/// One parsed flat-file entry
///
/// Implementors embed a [`FlatFields`] and hand it out through
/// [`fields`](Self::fields); every other method has a default built on it.
/// Concrete database types override [`entry_id`](Self::entry_id).
pub trait FlatRecord {
    fn fields(&self) -> &FlatFields;

    /// Primary identifier of the entry
    ///
    /// # Errors
    ///
    /// Returns [`FlatDbError::NotImplemented`] unless the record type
    /// overrides it.
    fn entry_id(&self) -> Result<String> {
        Err(FlatDbError::not_implemented(
            std::any::type_name::<Self>(),
            "entry_id",
        ))
    }

    /// Tags present in the entry, in first-encounter order
    fn tags(&self) -> Vec<&str> {
        self.fields().tags().collect()
    }

    fn exists(&self, tag: &str) -> bool {
        self.fields().exists(tag)
    }

    /// Raw text under `tag`, or `""`
    fn get(&self, tag: &str) -> &str {
        self.fields().get(tag)
    }

    /// Cleaned text under `tag` after skipping `skip` lines, or `""`
    fn fetch(&self, tag: &str, skip: usize) -> String {
        self.fields().fetch(tag, skip)
    }
}

/// Entry of any family without database-specific accessors
///
/// It has no notion of which tag identifies it, so `entry_id` fails.
#[derive(Debug)]
pub struct GenericRecord {
    fields: FlatFields,
}

impl GenericRecord {
    pub fn new(entry: &str, family: &RecordFamily) -> Self {
        Self {
            fields: FlatFields::parse(entry, family),
        }
    }
}

impl FlatRecord for GenericRecord {
    fn fields(&self) -> &FlatFields {
        &self.fields
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::family::GENBANK;

    #[test]
    fn test_generic_record_has_no_entry_id() {
        let record = GenericRecord::new("LOCUS       X\n", &GENBANK);
        let err = record.entry_id().unwrap_err();
        assert!(err.is_not_implemented());
        assert!(err.to_string().contains("GenericRecord"));
    }

    #[test]
    fn test_default_methods_delegate() {
        let record = GenericRecord::new("LOCUS       X\nDEFINITION  a\n            b.\n", &GENBANK);
        assert_eq!(record.tags(), vec!["LOCUS", "DEFINITION"]);
        assert!(record.exists("DEFINITION"));
        assert_eq!(record.fetch("DEFINITION", 0), "a b.");
        assert_eq!(record.get("SOURCE"), "");
    }
}
