use cartograph_core::{record, Record, Value};
use chrono::NaiveDate;
use std_util::prelude::*;

// ---------------------------------------------------------------------------
// Unset identifiers
// ---------------------------------------------------------------------------

#[test]
fn null_and_empty_string_are_unset() {
    assert!(Value::Null.is_unset());
    assert!(Value::from("").is_unset());
}

#[test]
fn zero_and_false_are_set() {
    assert!(!Value::from(0).is_unset());
    assert!(!Value::from(false).is_unset());
    assert!(!Value::from("0").is_unset());
}

// ---------------------------------------------------------------------------
// Identity keys
// ---------------------------------------------------------------------------

#[test]
fn integer_and_numeric_string_share_a_key() {
    assert_eq!(Value::from(5).to_key(), Value::from("5").to_key());
}

#[test]
fn date_time_key_is_tagged() {
    let value = Value::from(
        NaiveDate::from_ymd_opt(2013, 7, 4)
            .unwrap()
            .and_hms_opt(10, 2, 54)
            .unwrap(),
    );
    assert_eq!(value.to_key(), "DateTime:2013-07-04 10:02:54");
}

#[test]
fn other_variants_do_not_share_a_key_with_text() {
    assert_ne!(Value::from(true).to_key(), Value::from("true").to_key());
    assert_ne!(Value::from(5.0).to_key(), Value::from(5).to_key());
    assert_ne!(Value::Null.to_key(), Value::from("NULL").to_key());
}

// ---------------------------------------------------------------------------
// SQL literals
// ---------------------------------------------------------------------------

#[test]
fn strings_are_single_quoted() {
    assert_eq!(Value::from("The Fountainhead").quoted(), "'The Fountainhead'");
}

#[test]
fn embedded_quotes_are_doubled() {
    assert_eq!(Value::from("O'Brien").quoted(), "'O''Brien'");
}

#[test]
fn scalars_render_bare() {
    assert_eq!(Value::from(5).quoted(), "5");
    assert_eq!(Value::from(true).quoted(), "1");
    assert_eq!(Value::Null.quoted(), "NULL");
}

#[test]
fn lists_render_parenthesized() {
    let list = Value::from(vec![Value::from(1), Value::from("a")]);
    assert_eq!(list.quoted(), "(1, 'a')");
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

#[test]
fn option_converts_to_null() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::from("x"));
}

#[test]
fn try_into_i64_parses_numeric_strings() {
    let n = assert_ok!(i64::try_from(Value::from("42")));
    assert_eq!(n, 42);
}

#[test]
fn try_into_i64_rejects_text() {
    let err = assert_err!(i64::try_from(Value::from("forty-two")));
    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert String to i64");
}

#[test]
fn record_macro_preserves_order() {
    let row = record! { "title" => "Anthem", "stars" => 4, "id" => 1 };
    let keys: Vec<_> = row.keys().map(String::as_str).collect();
    assert_eq!(keys, ["title", "stars", "id"]);
}

#[test]
fn nested_record_displays_as_map() {
    let row: Record = record! { "a" => record! { "b" => 1 } };
    assert_eq!(Value::from(row).to_string(), "{a: {b: 1}}");
}
