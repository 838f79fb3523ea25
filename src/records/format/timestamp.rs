//! Permissive date-time grammar used to validate the timestamp field.
//!
//! Accepted shapes, tried in this order:
//!
//! 1. RFC 3339 (`2016-06-10T17:53:22+02:00`, `2016-06-10T17:53:22Z`) and
//!    RFC 2822 (`Fri, 10 Jun 2016 17:53:22 +0000`). The offset is dropped and
//!    the local wall-clock time is kept.
//! 2. A date followed by a time, joined by `T`, `-`, `_` or whitespace.
//! 3. A partial date: year and month (`2016-06`, `2016/06`, `06/2016`,
//!    `06-2016`, `June 2016`, `Jun, 2016`) resolved to the 1st of the month,
//!    or a bare four-digit year (`2016`) resolved to the 1st of January.
//!    These are tried before full dates so `June 2016` is not read as
//!    day 20 of year 16.
//! 4. A date on its own, resolved to midnight.
//! 5. A time on its own, resolved on [`default_date`] (1970-01-01).
//!
//! Year-first dates (`2016-06-10`, `2016/06/10`, `2016.06.10`, `20160610`)
//! are only considered when the text starts with a four-digit year. Otherwise
//! dates are read month-first (`06/10/2016`, `06-10-2016`), then day-first
//! (`10/06/2016`, `10-06-2016`, `10.06.2016`), so an ambiguous `03/04/2016`
//! is the 4th of March and `13/04/2016` falls through to the day-first
//! reading. Each numeric shape also takes a two-digit year (`10/06/16` is
//! 2016-10-06; `00`-`69` map to 20xx, `70`-`99` to 19xx). Month names may be
//! full or abbreviated and are case-insensitive (`10 Jun 2016`,
//! `June 10 2016`, `Jun 10, 2016`, `10-Jun-2016`).
//!
//! Times are `HH:MM`, `HH:MM:SS`, `HH:MM:SS.fff`, or 12-hour with an
//! `AM`/`PM` marker (`5:53 PM`, `5:53:22 pm`, `5pm`, `5 PM`). Out-of-range
//! components reject the whole value.

use std::borrow::Cow;
use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use log::trace;
use regex::Regex;

const YEAR_FIRST_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y%m%d"];

const DATE_FORMATS: &[&str] = &[
    "%m/%d/%y",
    "%m/%d/%Y",
    "%m-%d-%y",
    "%m-%d-%Y",
    "%d/%m/%y",
    "%d/%m/%Y",
    "%d-%m-%y",
    "%d-%m-%Y",
    "%d.%m.%y",
    "%d.%m.%Y",
    "%d %b %Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%d-%b-%Y",
];

const TIME_FORMATS: &[&str] = &[
    "%H:%M:%S%.f",
    "%H:%M:%S",
    "%H:%M",
    "%I:%M:%S %p",
    "%I:%M %p",
];

const YEAR_FIRST_PARTIAL_FORMATS: &[&str] = &["%Y-%m", "%Y/%m"];

const PARTIAL_DATE_FORMATS: &[&str] = &["%m/%Y", "%m-%Y", "%b %Y", "%b, %Y"];

const DATE_TIME_SEPARATORS: &[&str] = &["T", "-", "_", " "];

/// `date + separator + time` combinations, split by whether the date part
/// is year-first.
struct DateTimeFormats {
    year_first: Vec<String>,
    other: Vec<String>,
}

static DATE_TIME_FORMATS: OnceLock<DateTimeFormats> = OnceLock::new();

/// Matches an hour with a meridiem and no minutes at the end of the text,
/// e.g. `5pm` or `11 AM`, but not the seconds of `5:53:22 PM`.
static BARE_MERIDIEM: OnceLock<Regex> = OnceLock::new();

fn date_time_formats() -> &'static DateTimeFormats {
    DATE_TIME_FORMATS.get_or_init(|| DateTimeFormats {
        year_first: combine(YEAR_FIRST_DATE_FORMATS),
        other: combine(DATE_FORMATS),
    })
}

fn combine(dates: &[&str]) -> Vec<String> {
    let mut formats =
        Vec::with_capacity(dates.len() * DATE_TIME_SEPARATORS.len() * TIME_FORMATS.len());
    for date in dates {
        for separator in DATE_TIME_SEPARATORS {
            for time in TIME_FORMATS {
                formats.push(format!("{date}{separator}{time}"));
            }
        }
    }
    formats
}

fn bare_meridiem_regex() -> &'static Regex {
    BARE_MERIDIEM.get_or_init(|| {
        Regex::new(r"(?i)(^|[^:\d])(\d{1,2})\s*([ap]m)$").expect("Invalid meridiem regex pattern")
    })
}

/// The date a time-only timestamp is resolved on.
pub fn default_date() -> NaiveDate {
    NaiveDate::default()
}

/// Parses a timestamp field. Returns `None` when no accepted shape matches.
///
/// A single pair of enclosing double quotes, as left in place by the
/// tokenizer, is removed before parsing.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = unquote(text).trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.naive_local());
    }

    let expanded = expand_bare_meridiem(text);
    let text: &str = &expanded;
    let year_first = starts_with_year(text);

    let formats = date_time_formats();
    if let Some(dt) = candidates(year_first, formats.year_first.as_slice(), formats.other.as_slice())
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    {
        return Some(dt);
    }

    let date = parse_partial_date(text, year_first).or_else(|| {
        candidates(year_first, YEAR_FIRST_DATE_FORMATS, DATE_FORMATS)
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
    });
    if let Some(date) = date {
        return date.and_hms_opt(0, 0, 0);
    }

    let time = TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(text, format).ok());
    if time.is_none() {
        trace!("No timestamp shape matched {:?}", text);
    }
    time.map(|t| default_date().and_time(t))
}

/// True when [`parse_timestamp`] accepts the text.
pub fn is_valid_timestamp(text: &str) -> bool {
    parse_timestamp(text).is_some()
}

/// Year-month and year-only dates, anchored on the first day.
fn parse_partial_date(text: &str, year_first: bool) -> Option<NaiveDate> {
    if year_first && text.len() == 4 {
        return NaiveDate::from_ymd_opt(text.parse().ok()?, 1, 1);
    }
    let padded = format!("{text} 1");
    candidates(year_first, YEAR_FIRST_PARTIAL_FORMATS, PARTIAL_DATE_FORMATS)
        .find_map(|format| NaiveDate::parse_from_str(&padded, &format!("{format} %d")).ok())
}

/// Year-first formats only take part when the text opens with four digits.
fn candidates<'a, S: AsRef<str>>(
    year_first: bool,
    leading: &'a [S],
    rest: &'a [S],
) -> impl Iterator<Item = &'a str> {
    let leading = if year_first { leading } else { &leading[..0] };
    leading.iter().chain(rest).map(|format| format.as_ref())
}

fn starts_with_year(text: &str) -> bool {
    text.len() >= 4 && text.as_bytes()[..4].iter().all(u8::is_ascii_digit)
}

/// Rewrites a trailing `5pm` as `5:00 pm` so the 12-hour formats apply.
fn expand_bare_meridiem(text: &str) -> Cow<'_, str> {
    bare_meridiem_regex().replace(text, "${1}${2}:00 ${3}")
}

fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
}
