use serde_json::json;

use super::*;

// =============================================================
// classify
// =============================================================

#[test]
fn classify_every_kind() {
    let cases = [
        (json!(null), ValueKind::Null),
        (json!(true), ValueKind::Boolean),
        (json!(1.5), ValueKind::Number),
        (json!("s"), ValueKind::String),
        (json!([1]), ValueKind::Array),
        (json!({"a": 1}), ValueKind::Object),
    ];
    for (value, expected) in cases {
        assert_eq!(classify(&value), expected, "{value}");
    }
}

#[test]
fn only_arrays_and_objects_are_containers() {
    assert!(ValueKind::Array.is_container());
    assert!(ValueKind::Object.is_container());
    assert!(!ValueKind::Null.is_container());
    assert!(!ValueKind::String.is_container());
}

#[test]
fn kind_name_matches_serde() {
    for kind in [
        ValueKind::Null,
        ValueKind::Boolean,
        ValueKind::Number,
        ValueKind::String,
        ValueKind::Array,
        ValueKind::Object,
    ] {
        assert_eq!(serde_json::to_string(&kind).unwrap(), format!("\"{}\"", kind.as_str()));
    }
}

// =============================================================
// format_value
// =============================================================

#[test]
fn format_containers_by_size() {
    assert_eq!(format_value(&json!([1, 2, 3])), "Array[3]");
    assert_eq!(format_value(&json!([])), "Array[0]");
    assert_eq!(format_value(&json!({"a": 1, "b": 2})), "Object[2]");
    assert_eq!(format_value(&json!({})), "Object[0]");
}

#[test]
fn format_scalars() {
    assert_eq!(format_value(&json!(null)), "null");
    assert_eq!(format_value(&json!(true)), "true");
    assert_eq!(format_value(&json!(42)), "42");
    assert_eq!(format_value(&json!(-2.5)), "-2.5");
}

#[test]
fn short_string_is_unchanged() {
    assert_eq!(format_value(&json!("")), "");
    assert_eq!(format_value(&json!("hello")), "hello");
    let twenty = "a".repeat(20);
    assert_eq!(format_value(&json!(twenty)), twenty);
}

#[test]
fn string_of_twenty_one_is_truncated() {
    let value = json!("abcdefghijklmnopqrstu");
    assert_eq!(format_value(&value), "abcdefghijklmnopqrst...");
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let accented = "é".repeat(21);
    let expected = format!("{}...", "é".repeat(20));
    assert_eq!(format_value(&json!(accented)), expected);
    assert_eq!(format_value(&json!("é".repeat(20))), "é".repeat(20));
}
