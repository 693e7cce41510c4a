use crate::OutputRow;

use serde_json::json;

/// **VALUE**: Verifies list payloads fan out into one row per element.
///
/// **WHY THIS MATTERS**: `item.list` returns hundreds of items; downstream workflow
/// steps expect to iterate them as separate rows, not one row holding an array.
///
/// **BUG THIS CATCHES**: Wrapping the array as a single `{value: [...]}` row.
#[test]
fn given_array_when_expanded_then_one_row_per_element() {
    let rows = OutputRow::expand(json!([
        {"name": "Kitchen_Light"},
        {"name": "Hall_Light"},
    ]));

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].get("name"), Some(&json!("Hall_Light")));
}

#[test]
fn given_object_when_expanded_then_single_row() {
    let rows = OutputRow::expand(json!({"version": "4.1.0"}));

    assert_eq!(rows, vec![OutputRow::new().with("version", "4.1.0")]);
}

#[test]
fn given_scalar_when_expanded_then_wrapped_under_value() {
    let rows = OutputRow::expand(json!("ONLINE"));

    assert_eq!(rows[0].get("value"), Some(&json!("ONLINE")));
}

#[test]
fn given_empty_array_when_expanded_then_no_rows() {
    assert!(OutputRow::expand(json!([])).is_empty());
}

#[test]
fn given_error_row_when_serialized_then_plain_error_object() {
    let row = OutputRow::error("boom");

    assert!(row.is_error());
    assert_eq!(serde_json::to_value(&row).unwrap(), json!({"error": "boom"}));
}
