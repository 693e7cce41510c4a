//! Reading operation parameters out of an input row.

use crate::error::OperationError;

use serde_json::{Map, Value};

/// One row supplied by the host.
pub type InputRow = Map<String, Value>;

pub const ITEM_NAME: &str = "itemName";
pub const COMMAND: &str = "command";
pub const STATE: &str = "state";
pub const TAGS: &str = "tags";
pub const THING_UID: &str = "thingUid";
pub const RULE_UID: &str = "ruleUid";
pub const ENABLE: &str = "enable";

/// A required, non-blank string parameter. Numbers and booleans are accepted
/// and rendered as text.
#[track_caller]
pub fn required_string(row: &InputRow, name: &'static str) -> Result<String, OperationError> {
    match optional_string(row, name)? {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(OperationError::missing_parameter(name)),
    }
}

#[track_caller]
pub fn optional_string(row: &InputRow, name: &'static str) -> Result<Option<String>, OperationError> {
    match row.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(Value::Number(value)) => Ok(Some(value.to_string())),
        Some(Value::Bool(value)) => Ok(Some(value.to_string())),
        Some(_) => Err(OperationError::invalid_parameter(
            name,
            "expected a string, number or boolean",
        )),
    }
}

/// A required boolean, given either as a JSON bool or as "true"/"false".
#[track_caller]
pub fn required_bool(row: &InputRow, name: &'static str) -> Result<bool, OperationError> {
    match row.get(name) {
        Some(Value::Bool(value)) => Ok(*value),
        Some(Value::String(value)) => match value.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(OperationError::invalid_parameter(
                name,
                format!("expected true or false, got '{other}'"),
            )),
        },
        None | Some(Value::Null) => Err(OperationError::missing_parameter(name)),
        Some(_) => Err(OperationError::invalid_parameter(name, "expected a boolean")),
    }
}

/// Normalise a comma-separated tag filter. Blank input means no filter.
pub fn tag_filter(raw: Option<String>) -> Option<String> {
    let tags: Vec<&str> = raw
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .collect();

    if tags.is_empty() {
        None
    } else {
        Some(tags.join(","))
    }
}
