//! Debug-only request/response logging with header redaction.

use crate::dispatch::classify::truncate;
use crate::dispatch::{HttpRequest, Method};
use crate::error::DispatchError;
use crate::transport::TransportResponse;

use common::REDACTION_MARKER;
use models::AuthMode;

use log::debug;
use serde_json::{Map, Value, json};
use url::Url;

/// Headers whose values never reach the log.
pub const SENSITIVE_HEADERS: [&str; 5] = [
    "authorization",
    "x-openhab-token",
    "cookie",
    "set-cookie",
    "proxy-authorization",
];

const LOGGED_BODY_LIMIT: usize = 1000;

pub fn is_sensitive(name: &str) -> bool {
    SENSITIVE_HEADERS
        .iter()
        .any(|sensitive| sensitive.eq_ignore_ascii_case(name))
}

pub fn redact_headers<'a, I>(headers: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    headers
        .into_iter()
        .map(|(name, value)| {
            let shown = if is_sensitive(name) {
                REDACTION_MARKER
            } else {
                value.as_str()
            };
            (name.clone(), Value::String(shown.to_string()))
        })
        .collect()
}

/// Structured pre-send entry. Sensitive headers are always redacted.
pub fn request_entry(request: &HttpRequest, mode: AuthMode, full_response: bool) -> Value {
    let query: Map<String, Value> = request
        .url
        .query_pairs()
        .map(|(key, value)| (key.into_owned(), Value::String(value.into_owned())))
        .collect();

    let mut entry = json!({
        "method": request.method.as_str(),
        "url": request.url.as_str(),
        "query": query,
        "headers": redact_headers(&request.headers),
        "authMode": mode.as_str(),
        "fullResponse": full_response,
    });

    if request.method.is_mutating() {
        if let (Some(body), Some(object)) = (&request.body, entry.as_object_mut()) {
            object.insert(
                "body".to_string(),
                Value::String(truncate(body, LOGGED_BODY_LIMIT)),
            );
        }
    }

    entry
}

pub fn response_entry(method: Method, url: &Url, response: &TransportResponse) -> Value {
    json!({
        "method": method.as_str(),
        "url": url.as_str(),
        "statusCode": response.status,
        "statusMessage": response.status_message,
    })
}

pub fn transport_failure_entry(method: Method, url: &Url, error: &DispatchError) -> Value {
    json!({
        "method": method.as_str(),
        "url": url.as_str(),
        "error": error.message(),
        "timeout": error.is_timeout(),
        "connection": error.is_connection(),
    })
}

pub fn log_request(request: &HttpRequest, mode: AuthMode, full_response: bool) {
    let entry = request_entry(request, mode, full_response);
    emit("openHAB request", &entry, request.method, &request.url);
}

pub fn log_response(method: Method, url: &Url, response: &TransportResponse) {
    let entry = response_entry(method, url, response);
    emit("openHAB response", &entry, method, url);
}

pub fn log_transport_failure(method: Method, url: &Url, error: &DispatchError) {
    let entry = transport_failure_entry(method, url, error);
    emit("openHAB request failed", &entry, method, url);
}

// Rendering problems fall back to a bare line; logging never fails the call.
fn emit(label: &str, entry: &Value, method: Method, url: &Url) {
    match serde_json::to_string(entry) {
        Ok(rendered) => debug!("{label}: {rendered}"),
        Err(_) => debug!("{label}: {method} {url}"),
    }
}
