//! Response classification: success payload or a descriptive failure.

use crate::dispatch::Method;
use crate::error::DispatchError;
use crate::transport::TransportResponse;

use common::HttpStatusCode;
use models::{AuthMode, ResponseBody, ResponseEnvelope, ResponsePayload};

/// Characters of the response body kept in failure messages.
pub const ERROR_BODY_LIMIT: usize = 300;

pub const TRUNCATION_MARKER: &str = "...";

/// Appended to cloud relay 401 failures.
pub const CLOUD_UNAUTHORIZED_HINT: &str = " (myopenHAB accepted the account but the server refused the request; \
     endpoints that need elevated access also require the optional openHAB API token in the cloud credentials)";

pub fn classify(
    method: Method,
    mode: AuthMode,
    response: TransportResponse,
    full_response: bool,
) -> Result<ResponsePayload, DispatchError> {
    let Some(code) = response.status else {
        return Err(DispatchError::malformed_response(format!(
            "{method} request returned a malformed response without a status code"
        )));
    };

    let status = HttpStatusCode(code);

    if !status.is_success() {
        let message = failure_message(method, mode, status, &response.status_message, &response.body);
        return Err(DispatchError::http_status(status, message));
    }

    if full_response {
        Ok(ResponsePayload::Full(ResponseEnvelope {
            status_code: code,
            status_message: response.status_message,
            headers: response.headers,
            body: response.body,
        }))
    } else {
        Ok(ResponsePayload::Body(response.body))
    }
}

/// `"<VERB> request failed with status <code> <reason> - <body>"`, plus the
/// token hint for cloud 401s.
pub fn failure_message(
    method: Method,
    mode: AuthMode,
    status: HttpStatusCode,
    status_message: &str,
    body: &ResponseBody,
) -> String {
    let mut message = format!("{method} request failed with status {status}");

    let status_message = status_message.trim();
    if !status_message.is_empty() {
        message.push(' ');
        message.push_str(status_message);
    }

    let rendered = body.render();
    if !rendered.is_empty() {
        message.push_str(" - ");
        message.push_str(&truncate(&rendered, ERROR_BODY_LIMIT));
    }

    if mode == AuthMode::CloudRelay && status.is_unauthorized() {
        message.push_str(CLOUD_UNAUTHORIZED_HINT);
    }

    message
}

/// First `limit` characters of `text`, with a marker when anything was cut.
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &text[..cut]),
        None => text.to_string(),
    }
}
