//! Quote-aware field splitting.

use log::trace;
use regex::Regex;
use std::sync::OnceLock;

/// Compiled field pattern.
///
/// A field is one or more of: a character that is not whitespace, a comma or
/// a double quote; or a complete double-quoted run in which `\x` escapes are
/// taken verbatim. Adjacent pieces glue together, so `a"b c"d` is one field.
static FIELD_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Returns the cached field regex pattern.
fn field_regex() -> &'static Regex {
    FIELD_PATTERN
        .get_or_init(|| Regex::new(r#"(?:[^\s,"]|"(?:\\.|[^"])*")+"#).expect("Invalid field regex pattern"))
}

/// Splits a line into fields with respect to whitespace, commas and double quotes.
///
/// Whitespace and commas outside quotes separate fields and are discarded.
/// Quoted fields keep their quotes. An unterminated quote character is
/// dropped. Never returns an empty field.
///
/// ```
/// use record_lookup::split_line;
///
/// let fields = split_line(r#"10 2016-06-10-17:53:22 "Also invalid" Str2"#);
/// assert_eq!(fields, ["10", "2016-06-10-17:53:22", "\"Also invalid\"", "Str2"]);
/// ```
pub fn split_line(line: &str) -> Vec<String> {
    let fields: Vec<String> = field_regex()
        .find_iter(line)
        .map(|m| m.as_str().to_owned())
        .collect();
    trace!("Split line into {} fields: {:?}", fields.len(), fields);
    fields
}
