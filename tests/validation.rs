use chrono::{NaiveDate, NaiveDateTime};
use record_lookup::records::format::timestamp::is_valid_timestamp;
use record_lookup::{is_row_valid, parse_timestamp, split_line, validate, RowRejection};

fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, s))
        .expect("valid test date")
}

#[test]
fn well_formed_row_is_valid() {
    let fields = row(&["8", "2016-06-10-17:53:22", "Str1", "Value", "Str3"]);
    assert!(is_row_valid(&fields));

    let record = validate(fields).expect("valid row");
    assert_eq!(record.id(), "8");
    assert_eq!(record.value(), "Value");
    assert_eq!(record.raw_timestamp(), "2016-06-10-17:53:22");
    assert_eq!(record.timestamp(), at(2016, 6, 10, 17, 53, 22));
    assert_eq!(record.fields().len(), 5);
}

#[test]
fn quoted_fields_do_not_affect_validity() {
    let line = r#"7 2016-06-10-17:53:22 "A quoted string we don’t care about" "The string we do care about." "Another string we don’t are about with escaped\" \" quotes. ""#;
    let record = validate(split_line(line)).expect("valid row");
    assert_eq!(record.value(), "\"The string we do care about.\"");
}

#[test]
fn negative_or_zero_id_is_rejected() {
    let negative = row(&["-1", "2016-06-10-17:53:22", "\"This line is invalid\"", "Str2", "Str3"]);
    assert_eq!(validate(negative), Err(RowRejection::NonPositiveId("-1".into())));

    let zero = row(&["0", "2016-06-10-17:53:22", "a", "b", "c"]);
    assert_eq!(validate(zero), Err(RowRejection::NonPositiveId("0".into())));
}

#[test]
fn non_numeric_id_is_a_row_rejection_not_a_failure() {
    let fields = row(&["abc", "2016-06-10-17:53:22", "a", "b", "c"]);
    assert_eq!(validate(fields), Err(RowRejection::NonNumericId("abc".into())));

    let fields = row(&["8.5", "2016-06-10-17:53:22", "a", "b", "c"]);
    assert!(!is_row_valid(&fields));
}

#[test]
fn signed_and_oversized_ids_follow_integer_rules() {
    assert!(is_row_valid(&row(&["+5", "2016-06-10", "a", "b", "c"])));
    assert!(is_row_valid(&row(&["99999999999999999999999", "2016-06-10", "a", "b", "c"])));
    assert_eq!(
        validate(row(&["-99999999999999999999999", "2016-06-10", "a", "b", "c"])),
        Err(RowRejection::NonPositiveId("-99999999999999999999999".into()))
    );
}

#[test]
fn bad_timestamp_is_rejected() {
    let fields = row(&["10", "1111-06-10-17:69:22", "\"Also invalid\"", "Str2", "Str3"]);
    assert_eq!(
        validate(fields),
        Err(RowRejection::BadTimestamp("1111-06-10-17:69:22".into()))
    );
}

#[test]
fn wrong_field_count_is_rejected() {
    let six = row(&["10", "2016-06-10", "17:53:22", "\"Also invalid\"", "Str2", "Str3"]);
    assert_eq!(
        validate(six),
        Err(RowRejection::FieldCount { expected: 5, found: 6 })
    );
    assert!(!is_row_valid(&row(&[""])));
    assert!(!is_row_valid(&[]));
}

#[test]
fn field_count_is_checked_before_id() {
    let fields = row(&["abc", "nonsense"]);
    assert_eq!(
        validate(fields),
        Err(RowRejection::FieldCount { expected: 5, found: 2 })
    );
}

#[test]
fn rejection_kinds_are_stable_labels() {
    assert_eq!(RowRejection::FieldCount { expected: 5, found: 0 }.kind(), "field-count");
    assert_eq!(RowRejection::NonNumericId("x".into()).kind(), "non-numeric-id");
    assert_eq!(RowRejection::NonPositiveId("0".into()).kind(), "non-positive-id");
    assert_eq!(RowRejection::BadTimestamp("x".into()).kind(), "bad-timestamp");
}

#[test]
fn timestamp_grammar_rejects_out_of_range_components() {
    assert_eq!(parse_timestamp("2016-06-100-17:53:22"), None);
    assert_eq!(parse_timestamp("1111-06-10-17:69:22"), None);
    assert_eq!(parse_timestamp("2016-13-01"), None);
    assert_eq!(parse_timestamp("2016-02-30"), None);
    assert_eq!(parse_timestamp("not-a-date"), None);
    assert_eq!(parse_timestamp(""), None);
    assert_eq!(parse_timestamp("\"\""), None);
    assert!(!is_valid_timestamp("2016-06-100-17:53:22"));
    assert!(is_valid_timestamp("2016-06-10-17:53:22"));
}

#[test]
fn timestamp_grammar_accepts_common_shapes() {
    let expected = at(2016, 6, 10, 17, 53, 22);
    for text in [
        "2016-06-10-17:53:22",
        "2016-06-10T17:53:22",
        "2016-06-10 17:53:22",
        "2016-06-10_17:53:22",
        "2016/06/10 17:53:22",
        "2016.06.10-17:53:22",
        "06/10/2016 17:53:22",
        "10-Jun-2016-17:53:22",
        "2016-06-10T17:53:22Z",
        "Fri, 10 Jun 2016 17:53:22 +0000",
        "2016-06-10 5:53:22 PM",
        "\"2016-06-10 17:53:22\"",
    ] {
        assert_eq!(parse_timestamp(text), Some(expected), "failed to parse {:?}", text);
    }
}

#[test]
fn timestamp_grammar_keeps_local_time_of_offset_inputs() {
    assert_eq!(
        parse_timestamp("2016-06-10T17:53:22+02:00"),
        Some(at(2016, 6, 10, 17, 53, 22))
    );
}

#[test]
fn date_only_resolves_to_midnight() {
    let midnight = at(2016, 6, 10, 0, 0, 0);
    for text in ["2016-06-10", "20160610", "10 Jun 2016", "June 10 2016", "Jun 10, 2016"] {
        assert_eq!(parse_timestamp(text), Some(midnight), "failed to parse {:?}", text);
    }
}

#[test]
fn ambiguous_dates_read_month_first_then_day_first() {
    assert_eq!(parse_timestamp("03/04/2016"), Some(at(2016, 3, 4, 0, 0, 0)));
    assert_eq!(parse_timestamp("13/04/2016"), Some(at(2016, 4, 13, 0, 0, 0)));
    assert_eq!(parse_timestamp("13.04.2016"), Some(at(2016, 4, 13, 0, 0, 0)));
}

#[test]
fn time_only_resolves_on_default_date() {
    assert_eq!(parse_timestamp("17:53:22"), Some(at(1970, 1, 1, 17, 53, 22)));
    assert_eq!(parse_timestamp("17:53"), Some(at(1970, 1, 1, 17, 53, 0)));
    assert_eq!(parse_timestamp("5pm"), Some(at(1970, 1, 1, 17, 0, 0)));
    assert_eq!(parse_timestamp("11 AM"), Some(at(1970, 1, 1, 11, 0, 0)));
    assert_eq!(parse_timestamp("5:30 am"), Some(at(1970, 1, 1, 5, 30, 0)));
    assert_eq!(parse_timestamp("25:61"), None);
    assert_eq!(parse_timestamp("10"), None);
}

#[test]
fn partial_dates_resolve_to_first_day() {
    let first_of_june = at(2016, 6, 1, 0, 0, 0);
    for text in ["June 2016", "Jun 2016", "Jun, 2016", "2016-06", "2016/06", "06/2016", "06-2016"] {
        assert_eq!(parse_timestamp(text), Some(first_of_june), "failed to parse {:?}", text);
    }
    assert_eq!(parse_timestamp("2016"), Some(at(2016, 1, 1, 0, 0, 0)));
    assert_eq!(parse_timestamp("2016-13"), None);
}

#[test]
fn month_name_date_with_bare_meridiem() {
    assert_eq!(parse_timestamp("Jun 10 2016 5pm"), Some(at(2016, 6, 10, 17, 0, 0)));
}

#[test]
fn two_digit_years_read_month_first() {
    assert_eq!(parse_timestamp("10/06/16"), Some(at(2016, 10, 6, 0, 0, 0)));
    assert_eq!(parse_timestamp("10/06/16 17:53"), Some(at(2016, 10, 6, 17, 53, 0)));
    assert_eq!(parse_timestamp("13/04/16"), Some(at(2016, 4, 13, 0, 0, 0)));
    assert_eq!(parse_timestamp("06/10/99"), Some(at(1999, 6, 10, 0, 0, 0)));
}

#[test]
fn row_with_time_only_timestamp_is_valid() {
    let record = validate(row(&["10", "17:53:22", "a", "b", "c"])).expect("valid row");
    assert_eq!(record.timestamp(), at(1970, 1, 1, 17, 53, 22));
}
