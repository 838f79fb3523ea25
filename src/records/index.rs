//! Append-only multi-map from record id to values.

use std::collections::HashMap;

use log::trace;

use super::types::models::Record;

/// In-memory index from id to the values of every valid record with that id.
///
/// Keys are compared as exact strings, so `"08"` and `"8"` are different
/// keys. Values keep insertion order and duplicates are retained. Nothing is
/// ever removed or rewritten.
#[derive(Debug, Default, Clone)]
pub struct RecordIndex {
    entries: HashMap<String, Vec<String>>,
    num_values: usize,
}

impl RecordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the record's value under its id, creating the key if absent.
    pub fn insert(&mut self, record: &Record) {
        trace!("Indexing {:?} -> {:?}", record.id(), record.value());
        self.entries
            .entry(record.id().to_owned())
            .or_default()
            .push(record.value().to_owned());
        self.num_values += 1;
    }

    /// Values stored under `id`, in insertion order.
    ///
    /// An absent key yields an empty slice and is not inserted.
    pub fn get(&self, id: &str) -> &[String] {
        self.entries.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of values across all keys.
    pub fn num_values(&self) -> usize {
        self.num_values
    }

    /// All keys in lexicographic order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl<'a> Extend<&'a Record> for RecordIndex {
    fn extend<I: IntoIterator<Item = &'a Record>>(&mut self, records: I) {
        for record in records {
            self.insert(record);
        }
    }
}
