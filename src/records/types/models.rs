//! Core data structures for records, ingestion results and query results.
//!
//! This module defines the fundamental types used throughout the library:
//! - The fixed record layout and validated records
//! - Ingestion statistics
//! - Per-identifier query output

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;

use super::error::{InvalidId, RowRejection};

/// Number of fields every valid record must have.
pub const FIELD_COUNT: usize = 5;
/// Position of the id field, used as the index key.
pub const ID_FIELD: usize = 0;
/// Position of the timestamp field.
pub const TIMESTAMP_FIELD: usize = 1;
/// Position of the value field, the datum returned by lookups.
pub const VALUE_FIELD: usize = 3;

/// A row that passed validation.
///
/// Holds all five raw fields exactly as tokenized (quotes included) together
/// with the parsed timestamp. Only [`Record::id`] and [`Record::value`] are
/// used by the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: [String; FIELD_COUNT],
    timestamp: NaiveDateTime,
}

impl Record {
    pub(crate) fn new(fields: [String; FIELD_COUNT], timestamp: NaiveDateTime) -> Self {
        Self { fields, timestamp }
    }

    /// The key field, in its original string form.
    pub fn id(&self) -> &str {
        &self.fields[ID_FIELD]
    }

    /// The value field.
    pub fn value(&self) -> &str {
        &self.fields[VALUE_FIELD]
    }

    /// The raw timestamp token.
    pub fn raw_timestamp(&self) -> &str {
        &self.fields[TIMESTAMP_FIELD]
    }

    /// The timestamp as resolved by the timestamp grammar.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// Totals gathered while ingesting a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Rows that were validated and inserted into the index.
    pub valid_rows: usize,
    /// Rows that failed validation and were skipped.
    pub invalid_rows: usize,
    /// Invalid rows tallied by [`RowRejection::kind`].
    pub rejections: BTreeMap<&'static str, usize>,
}

impl IngestReport {
    pub(crate) fn record_valid(&mut self) {
        self.valid_rows += 1;
    }

    pub(crate) fn record_rejection(&mut self, rejection: &RowRejection) {
        self.invalid_rows += 1;
        *self.rejections.entry(rejection.kind()).or_insert(0) += 1;
    }

    /// Total number of rows seen, valid or not.
    pub fn total_rows(&self) -> usize {
        self.valid_rows + self.invalid_rows
    }

    /// Number of rows rejected for the given [`RowRejection::kind`] label.
    pub fn rejected(&self, kind: &str) -> usize {
        self.rejections.get(kind).copied().unwrap_or(0)
    }
}

/// One line of query output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryLine {
    /// A value stored under a requested id.
    Hit { id: String, value: String },
    /// A requested id that could not be answered.
    Invalid(InvalidId),
}

impl fmt::Display for QueryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryLine::Hit { id, value } => write!(f, "{} {}", id, value),
            QueryLine::Invalid(invalid) => write!(f, "Invalid id: '{}'", invalid.id()),
        }
    }
}

/// Ordered output of a single query: requested-id order first, then the
/// insertion order of each id's values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryReport {
    pub lines: Vec<QueryLine>,
}

impl QueryReport {
    /// Iterates over `(id, value)` pairs that were found.
    pub fn hits(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lines.iter().filter_map(|line| match line {
            QueryLine::Hit { id, value } => Some((id.as_str(), value.as_str())),
            QueryLine::Invalid(_) => None,
        })
    }

    /// Iterates over the identifiers that were rejected.
    pub fn invalid_ids(&self) -> impl Iterator<Item = &InvalidId> {
        self.lines.iter().filter_map(|line| match line {
            QueryLine::Invalid(invalid) => Some(invalid),
            QueryLine::Hit { .. } => None,
        })
    }

    /// Renders every line the way the console prints it.
    pub fn rendered(&self) -> Vec<String> {
        self.lines.iter().map(ToString::to_string).collect()
    }
}
