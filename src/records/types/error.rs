//! Custom error types for the record-lookup crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Malformed rows and malformed query ids are not errors at this level; they
/// are reported through [`RowRejection`] and [`InvalidId`] and never abort a
/// batch.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The input file could not be opened or read.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An error originating from console or other I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested text encoding label is not a known WHATWG label.
    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),
}

/// Why a row was left out of the index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowRejection {
    /// The row did not split into exactly the expected number of fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// The id field is not an integer.
    #[error("id {0:?} is not an integer")]
    NonNumericId(String),

    /// The id field is an integer but not strictly positive.
    #[error("id {0:?} is not positive")]
    NonPositiveId(String),

    /// The timestamp field is not accepted by the timestamp grammar.
    #[error("timestamp {0:?} is not a recognised date-time")]
    BadTimestamp(String),
}

impl RowRejection {
    /// Short stable label, used as the tally key in ingestion reports.
    pub fn kind(&self) -> &'static str {
        match self {
            RowRejection::FieldCount { .. } => "field-count",
            RowRejection::NonNumericId(_) => "non-numeric-id",
            RowRejection::NonPositiveId(_) => "non-positive-id",
            RowRejection::BadTimestamp(_) => "bad-timestamp",
        }
    }
}

/// Why a user-supplied id was not answered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidId {
    /// Empty, or contains something other than ASCII decimal digits.
    #[error("id {0:?} is not a decimal number")]
    Malformed(String),

    /// Well-formed but absent from the index.
    #[error("id {0:?} is not present in the index")]
    NotFound(String),
}

impl InvalidId {
    /// The identifier as the user typed it (after trimming).
    pub fn id(&self) -> &str {
        match self {
            InvalidId::Malformed(id) | InvalidId::NotFound(id) => id,
        }
    }
}

/// A convenience `Result` type alias using the crate's `RecordError` type.
pub type Result<T> = std::result::Result<T, RecordError>;
