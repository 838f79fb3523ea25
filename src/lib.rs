//! # record-lookup
//!
//! Reads a file of whitespace/comma separated records, keeps the rows that
//! have five fields, a positive integer id and a parseable timestamp, and
//! indexes their fourth field by id for lookup.
//!
//! ```
//! use record_lookup::{query, RecordIndex, RecordSet};
//!
//! let records = RecordSet::from_text("8 2016-06-10-17:53:22 Str1 Value Str3\n");
//! let mut index = RecordIndex::new();
//! let report = records.ingest(&mut index);
//! assert_eq!(report.invalid_rows, 0);
//!
//! let answer = query::run_query(&index, "8");
//! assert_eq!(answer.rendered(), ["8 Value"]);
//! ```
pub mod records;

// Re-export the main types for convenience
pub use records::{
    format::{timestamp::parse_timestamp, tokenizer::split_line, validator::{is_row_valid, validate}},
    load,
    query,
    IngestReport,
    InvalidId,
    QueryLine,
    QueryReport,
    Record,
    RecordError,
    RecordIndex,
    RecordSet,
    ReaderOptions,
    RowIterator,
    RowRejection,
    Shell,
    ShellState,
};
