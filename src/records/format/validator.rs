//! Structural validation of tokenized rows.

use std::num::IntErrorKind;

use crate::records::types::error::RowRejection;
use crate::records::types::models::{Record, FIELD_COUNT, ID_FIELD, TIMESTAMP_FIELD};

use super::timestamp;

/// Validates a tokenized row and turns it into a [`Record`].
///
/// A row is valid when all of the following hold:
/// 1. It has exactly [`FIELD_COUNT`] fields.
/// 2. The id field is an integer strictly greater than zero.
/// 3. The timestamp field is accepted by [`timestamp::parse_timestamp`].
///
/// Rules are checked in that order and the first failure is returned.
pub fn validate(fields: Vec<String>) -> Result<Record, RowRejection> {
    let found = fields.len();
    let fields: [String; FIELD_COUNT] = fields
        .try_into()
        .map_err(|_| RowRejection::FieldCount { expected: FIELD_COUNT, found })?;

    check_id(&fields[ID_FIELD])?;

    let raw_timestamp = &fields[TIMESTAMP_FIELD];
    let timestamp = timestamp::parse_timestamp(raw_timestamp)
        .ok_or_else(|| RowRejection::BadTimestamp(raw_timestamp.clone()))?;

    Ok(Record::new(fields, timestamp))
}

/// Boolean form of [`validate`] that borrows the fields.
pub fn is_row_valid(fields: &[String]) -> bool {
    validate(fields.to_vec()).is_ok()
}

/// Checks that the id is a strictly positive integer.
///
/// A leading `+` or `-` is allowed. Values past `i64::MAX` are still positive
/// integers and pass; values past `i64::MIN` fail as non-positive.
fn check_id(id: &str) -> Result<(), RowRejection> {
    match id.parse::<i64>() {
        Ok(n) if n > 0 => Ok(()),
        Ok(_) => Err(RowRejection::NonPositiveId(id.to_owned())),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(()),
            IntErrorKind::NegOverflow => Err(RowRejection::NonPositiveId(id.to_owned())),
            _ => Err(RowRejection::NonNumericId(id.to_owned())),
        },
    }
}
