// Unit tests for row parameter extraction

use crate::error::OperationError;
use crate::operations::params::{InputRow, optional_string, required_bool, required_string, tag_filter};

use serde_json::{Value, json};

fn row(value: Value) -> InputRow {
    value.as_object().cloned().expect("object row")
}

#[test]
fn given_number_parameter_when_read_as_string_then_rendered() {
    let row = row(json!({"state": 42.5}));

    assert_eq!(required_string(&row, "state").unwrap(), "42.5");
}

#[test]
fn given_blank_parameter_when_required_then_missing() {
    let row = row(json!({"itemName": "   "}));

    let err = required_string(&row, "itemName").unwrap_err();

    assert!(matches!(err, OperationError::MissingParameter { .. }));
    assert_eq!(err.message(), "Parameter 'itemName' is required");
}

#[test]
fn given_object_parameter_when_read_then_invalid() {
    let row = row(json!({"command": {"nested": true}}));

    let err = optional_string(&row, "command").unwrap_err();

    assert!(matches!(err, OperationError::InvalidParameter { .. }));
}

#[test]
fn given_bool_forms_when_required_bool_then_parsed() {
    assert!(required_bool(&row(json!({"enable": true})), "enable").unwrap());
    assert!(!required_bool(&row(json!({"enable": "false"})), "enable").unwrap());
    assert!(required_bool(&row(json!({"enable": " TRUE "})), "enable").unwrap());
}

#[test]
fn given_invalid_bool_when_required_bool_then_invalid_parameter() {
    let err = required_bool(&row(json!({"enable": "maybe"})), "enable").unwrap_err();

    assert!(err.message().contains("maybe"));
}

#[test]
fn given_missing_bool_when_required_bool_then_missing_parameter() {
    let err = required_bool(&row(json!({})), "enable").unwrap_err();

    assert!(matches!(err, OperationError::MissingParameter { name: "enable", .. }));
}

#[test]
fn given_tag_inputs_when_filtered_then_blank_means_none() {
    assert_eq!(tag_filter(None), None);
    assert_eq!(tag_filter(Some(String::new())), None);
    assert_eq!(tag_filter(Some(" , ,".into())), None);
    assert_eq!(tag_filter(Some("Light".into())), Some("Light".to_string()));
}
