//! Records handed back to the host, one per input row or per array element.

use serde::Serialize;
use serde_json::{Map, Value};

/// Key used when a non-object value has to be wrapped into a row.
const SCALAR_VALUE_KEY: &str = "value";

const ERROR_KEY: &str = "error";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OutputRow(Map<String, Value>);

impl OutputRow {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// `{error: message}` row recorded when the host continues on failure.
    pub fn error(message: impl Into<String>) -> Self {
        let mut row = Map::new();
        row.insert(ERROR_KEY.to_string(), Value::String(message.into()));
        Self(row)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Objects become rows as-is; anything else is wrapped under `value`.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            other => Self::new().with(SCALAR_VALUE_KEY, other),
        }
    }

    /// Arrays expand into one row per element; everything else is one row.
    pub fn expand(value: Value) -> Vec<Self> {
        match value {
            Value::Array(items) => items.into_iter().map(Self::from_value).collect(),
            other => vec![Self::from_value(other)],
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_error(&self) -> bool {
        self.0.len() == 1 && self.0.contains_key(ERROR_KEY)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for OutputRow {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
