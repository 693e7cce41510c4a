//! Input rows for a batch: a JSON document or `key=value` pairs.

use crate::error::OhctlError;

use openhab_client::operations::params::InputRow;

use std::io::Read;
use std::path::Path;

use serde_json::Value;

const STDIN_PATH: &str = "-";

/// Rows from `--input` when given, otherwise one row from `--param` pairs.
pub fn read_rows(input: Option<&Path>, params: &[String]) -> Result<Vec<InputRow>, OhctlError> {
    match input {
        Some(path) if path.as_os_str() == STDIN_PATH => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| OhctlError::input(format!("Failed to read stdin: {e}")))?;
            rows_from_json(&text)
        }
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| {
                OhctlError::input(format!("Failed to read {}: {e}", path.display()))
            })?;
            rows_from_json(&text)
        }
        None => Ok(vec![row_from_params(params)?]),
    }
}

/// Parse a JSON object or an array of objects.
pub fn rows_from_json(text: &str) -> Result<Vec<InputRow>, OhctlError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| OhctlError::input(format!("Input is not valid JSON: {e}")))?;

    match value {
        Value::Object(row) => Ok(vec![row]),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(row) => Ok(row),
                other => Err(OhctlError::input(format!(
                    "Input row {index} must be an object, got {other}"
                ))),
            })
            .collect(),
        other => Err(OhctlError::input(format!(
            "Input must be an object or an array of objects, got {other}"
        ))),
    }
}

/// Build one row from `key=value` pairs. Values stay strings; the last
/// occurrence of a key wins.
pub fn row_from_params(params: &[String]) -> Result<InputRow, OhctlError> {
    let mut row = InputRow::new();

    for param in params {
        let (key, value) = param
            .split_once('=')
            .ok_or_else(|| OhctlError::input(format!("Expected key=value, got '{param}'")))?;

        let key = key.trim();
        if key.is_empty() {
            return Err(OhctlError::input(format!("Missing key in '{param}'")));
        }

        row.insert(key.to_string(), Value::String(value.to_string()));
    }

    Ok(row)
}
