//! Row parsing layer: turns raw text lines into validated records.
//!
//! # Module Organization
//!
//! - [`tokenizer`]: Splits a line into whitespace/comma separated, quote-aware fields
//! - [`timestamp`]: The permissive date-time grammar for the timestamp field
//! - [`validator`]: Applies the field-count, id and timestamp rules
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────────┐
//! │  raw line       │
//! ├─────────────────┤
//! │  fields         │ ← tokenizer::split_line()
//! ├─────────────────┤
//! │  Record or      │ ← validator::validate()
//! │  RowRejection   │     └ timestamp::parse_timestamp()
//! └─────────────────┘
//! ```

pub mod timestamp;
pub mod tokenizer;
pub mod validator;
