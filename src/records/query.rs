//! Lookup of comma-separated id lists against a [`RecordIndex`].

use log::debug;

use super::index::RecordIndex;
use super::types::error::InvalidId;
use super::types::models::{QueryLine, QueryReport};

/// Splits a raw id list into trimmed identifiers.
///
/// Empty pieces are kept, so `",,"` yields three empty identifiers.
pub fn split_ids(raw: &str) -> Vec<&str> {
    raw.trim_end_matches(['\r', '\n'])
        .split(',')
        .map(str::trim)
        .collect()
}

/// Decides whether a single trimmed identifier can be answered.
///
/// The identifier must be non-empty, made only of ASCII digits, and present
/// in the index as an exact string.
pub fn check_id<'a>(index: &'a RecordIndex, id: &str) -> Result<&'a [String], InvalidId> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidId::Malformed(id.to_owned()));
    }
    if !index.contains_key(id) {
        return Err(InvalidId::NotFound(id.to_owned()));
    }
    Ok(index.get(id))
}

/// Answers a comma-separated id list.
///
/// Each identifier is handled independently; a bad one adds an
/// [`QueryLine::Invalid`] line and processing moves on to the next.
pub fn run_query(index: &RecordIndex, raw: &str) -> QueryReport {
    let mut report = QueryReport::default();
    for id in split_ids(raw) {
        match check_id(index, id) {
            Ok(values) => {
                report.lines.extend(values.iter().map(|value| QueryLine::Hit {
                    id: id.to_owned(),
                    value: value.clone(),
                }));
            }
            Err(invalid) => {
                debug!("Rejected query id: {}", invalid);
                report.lines.push(QueryLine::Invalid(invalid));
            }
        }
    }
    report
}

/// True when every identifier in the list can be answered.
pub fn is_user_entry_valid(index: &RecordIndex, raw: &str) -> bool {
    split_ids(raw).into_iter().all(|id| check_id(index, id).is_ok())
}
