//! Sequential access to the rows of an input text.
//!
//! [`RowIterator`] tokenizes and validates one line at a time, yielding the
//! 1-based line number alongside either a [`Record`] or the reason the row
//! was rejected.
//!
//! # Example
//! ```
//! # use record_lookup::RowIterator;
//! let text = "8 2016-06-10-17:53:22 Str1 Value Str3\n-1 2016-06-10-17:53:22 a b c\n";
//! let outcomes: Vec<_> = RowIterator::new(text).collect();
//! assert!(outcomes[0].1.is_ok());
//! assert!(outcomes[1].1.is_err());
//! ```

use std::str::Lines;

use super::format::{tokenizer, validator};
use super::types::error::RowRejection;
use super::types::models::Record;

/// Iterator over the validation outcome of every line.
///
/// Created by [`RowIterator::new`] or [`crate::RecordSet::rows`].
pub struct RowIterator<'a> {
    lines: Lines<'a>,
    line_number: usize,
}

impl<'a> RowIterator<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line_number: 0,
        }
    }

    /// Keeps only the rows that passed validation.
    pub fn valid(self) -> impl Iterator<Item = Record> + 'a {
        self.filter_map(|(_, outcome)| outcome.ok())
    }
}

impl<'a> Iterator for RowIterator<'a> {
    type Item = (usize, Result<Record, RowRejection>);

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line_number += 1;
        let fields = tokenizer::split_line(line);
        Some((self.line_number, validator::validate(fields)))
    }
}
