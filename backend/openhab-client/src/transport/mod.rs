//! The network seam. The dispatcher only ever talks to a [`Transport`].

mod reqwest_transport;

pub use reqwest_transport::{DEFAULT_TIMEOUT_DURATION, ReqwestTransport};

use crate::dispatch::HttpRequest;
use crate::error::DispatchError;

use models::ResponseBody;

use std::collections::BTreeMap;
use std::future::Future;

use reqwest::header::HeaderMap;

/// Raw response as seen by the transport, before classification.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// `None` when the response carried no usable status code.
    pub status: Option<u16>,
    pub status_message: String,
    pub headers: BTreeMap<String, String>,
    pub body: ResponseBody,
}

pub trait Transport {
    /// Perform exactly one HTTP round trip.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<TransportResponse, DispatchError>> + Send;
}

/// Decode a body by content type: JSON when declared and parseable,
/// otherwise text (lossy for binary payloads).
pub fn decode_body(content_type: Option<&str>, bytes: &[u8]) -> ResponseBody {
    if bytes.is_empty() {
        return ResponseBody::Empty;
    }

    let is_json = content_type
        .map(|value| value.to_ascii_lowercase().contains("json"))
        .unwrap_or(false);

    if is_json {
        if let Ok(value) = serde_json::from_slice(bytes) {
            return ResponseBody::Json(value);
        }
    }

    ResponseBody::Text(String::from_utf8_lossy(bytes).into_owned())
}

/// Flatten response headers by name. Repeated headers (e.g. several
/// `set-cookie` lines) are joined with `", "` in arrival order.
pub fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut collected: BTreeMap<String, String> = BTreeMap::new();

    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        collected
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }

    collected
}
