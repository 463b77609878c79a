//! Raw tag map and cached field access shared by every record type

use crate::family::RecordFamily;
use crate::tag::{clean_block, strip_tag};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::trace;

/// Raw text of a record grouped by tag, in first-encounter order
///
/// Each value keeps the tag column and every continuation line verbatim.
/// Lookups of absent tags resolve to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawFieldMap {
    entries: IndexMap<String, String>,
}

impl RawFieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` to the value stored under `tag`
    pub fn append(&mut self, tag: &str, text: &str) {
        match self.entries.get_mut(tag) {
            Some(existing) => existing.push_str(text),
            None => {
                self.entries.insert(tag.to_string(), text.to_string());
            },
        }
    }

    pub fn get(&self, tag: &str) -> &str {
        self.entries.get(tag).map_or("", String::as_str)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Write-once caches for derived field values
///
/// `field_fetch` and `lines_fetch` fill separate slots, so the same tag can be
/// cached once in each.
#[derive(Debug, Default)]
struct FieldCache {
    fields: RwLock<HashMap<String, String>>,
    lines: RwLock<HashMap<String, Vec<String>>>,
}

/// Insert-if-absent lookup on a poison-tolerant lock
///
/// Values are only ever inserted fully computed, so a poisoned lock still
/// holds a consistent map.
fn cached<V: Clone>(
    slot: &RwLock<HashMap<String, V>>,
    tag: &str,
    compute: impl FnOnce() -> V,
) -> V {
    if let Some(value) = slot
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(tag)
    {
        return value.clone();
    }

    let mut map = slot.write().unwrap_or_else(PoisonError::into_inner);
    map.entry(tag.to_string())
        .or_insert_with(|| {
            trace!(tag, "Caching derived field");
            compute()
        })
        .clone()
}

/// Tag-indexed view over one parsed record
///
/// Holds the immutable raw map and the lazily filled cache. Record types embed
/// one of these and expose it through [`crate::FlatRecord::fields`].
#[derive(Debug)]
pub struct FlatFields {
    tag_size: usize,
    orig: RawFieldMap,
    cache: FieldCache,
}

impl FlatFields {
    /// Wrap an already indexed map
    pub fn new(orig: RawFieldMap, tag_size: usize) -> Self {
        Self {
            tag_size,
            orig,
            cache: FieldCache::default(),
        }
    }

    /// Index an entry with the conventions of `family`
    pub fn parse(entry: &str, family: &RecordFamily) -> Self {
        Self::new(
            family.style.build_raw_map(entry.trim(), family.tag_size),
            family.tag_size,
        )
    }

    pub fn tag_size(&self) -> usize {
        self.tag_size
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.orig.tags()
    }

    pub fn exists(&self, tag: &str) -> bool {
        self.orig.contains(tag)
    }

    /// Raw text under `tag`, tag column included
    pub fn get(&self, tag: &str) -> &str {
        self.orig.get(tag)
    }

    /// Cleaned text of `tag`, dropping its first `skip` lines
    ///
    /// The retained lines lose their tag column and the result is collapsed to
    /// single spaces. With `skip = 0` the header line is kept.
    pub fn fetch(&self, tag: &str, skip: usize) -> String {
        let retained = self
            .get(tag)
            .splitn(skip + 1, '\n')
            .last()
            .unwrap_or_default();

        clean_block(retained, self.tag_size)
    }

    /// Memoized [`fetch`](Self::fetch)
    ///
    /// The cache is keyed by `tag` alone: once a tag is cached, later calls
    /// return that value whatever `skip` they pass.
    pub fn field_fetch(&self, tag: &str, skip: usize) -> String {
        cached(&self.cache.fields, tag, || self.fetch(tag, skip))
    }

    /// Memoized lines of `tag`, each with the tag column stripped
    pub fn lines_fetch(&self, tag: &str) -> Vec<String> {
        cached(&self.cache.lines, tag, || {
            self.get(tag)
                .lines()
                .map(|line| strip_tag(line, self.tag_size).to_string())
                .collect()
        })
    }
}
