//! Response values produced by the transport and returned by the dispatcher.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};

/// A response body in whatever shape the transport decoded it.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
    Empty,
}

impl ResponseBody {
    pub fn is_empty(&self) -> bool {
        match self {
            ResponseBody::Empty => true,
            ResponseBody::Text(text) => text.is_empty(),
            ResponseBody::Json(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Human-readable rendering, used for error messages and diagnostics.
    pub fn render(&self) -> String {
        match self {
            ResponseBody::Json(Value::String(text)) => text.clone(),
            ResponseBody::Json(value) => value.to_string(),
            ResponseBody::Text(text) => text.clone(),
            ResponseBody::Empty => String::new(),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            ResponseBody::Json(value) => value,
            ResponseBody::Text(text) => Value::String(text),
            ResponseBody::Empty => Value::Null,
        }
    }
}

/// Status, headers and body of one HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub status_message: String,
    pub headers: BTreeMap<String, String>,
    pub body: ResponseBody,
}

impl ResponseEnvelope {
    pub fn into_value(self) -> Value {
        let headers: Map<String, Value> = self
            .headers
            .into_iter()
            .map(|(name, value)| (name, Value::String(value)))
            .collect();

        json!({
            "statusCode": self.status_code,
            "statusMessage": self.status_message,
            "headers": headers,
            "body": self.body.into_value(),
        })
    }
}

/// What a successful dispatch hands back: the body alone, or the whole
/// envelope when the caller asked for the full response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsePayload {
    Body(ResponseBody),
    Full(ResponseEnvelope),
}

impl ResponsePayload {
    pub fn body(&self) -> &ResponseBody {
        match self {
            ResponsePayload::Body(body) => body,
            ResponsePayload::Full(envelope) => &envelope.body,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ResponsePayload::Body(_) => None,
            ResponsePayload::Full(envelope) => Some(envelope.status_code),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            ResponsePayload::Body(body) => body.into_value(),
            ResponsePayload::Full(envelope) => envelope.into_value(),
        }
    }
}
