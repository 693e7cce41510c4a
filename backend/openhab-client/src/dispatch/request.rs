//! Turning a [`RequestDescriptor`] plus resolved auth into a concrete request.

use crate::REST_ROOT_PATH;
use crate::auth::{BasicAuth, ResolvedAuth};
use crate::dispatch::{Method, RequestDescriptor};
use crate::error::ConfigError;

use models::AuthMode;

use std::collections::BTreeMap;

use url::Url;

const ACCEPT_HEADER: &str = "accept";
const CONTENT_TYPE_HEADER: &str = "content-type";
const ACCEPT_TEXT: &str = "text/plain";
const ACCEPT_JSON: &str = "application/json";

/// A fully specified HTTP request, ready for a transport.
///
/// Header names are stored lowercase.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
    pub basic_auth: Option<BasicAuth>,
    pub accept_invalid_certs: bool,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Build the request for `descriptor` against the endpoint in `auth`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBaseUrl`] if the base URL and path do not
/// form a valid URL.
pub fn build(descriptor: &RequestDescriptor, auth: &ResolvedAuth) -> Result<HttpRequest, ConfigError> {
    let url = build_url(&auth.base_url, &descriptor.path, &descriptor.query)?;

    let mut headers = BTreeMap::new();
    let accept = if descriptor.options.plain_text {
        ACCEPT_TEXT
    } else {
        ACCEPT_JSON
    };
    headers.insert(ACCEPT_HEADER.to_string(), accept.to_string());

    for (name, value) in &auth.headers {
        headers.insert(name.to_string(), value.clone());
    }

    for (name, value) in &descriptor.options.extra_headers {
        headers.insert(name.to_ascii_lowercase(), value.clone());
    }

    let body = match (&descriptor.body, descriptor.method.is_mutating()) {
        (Some(body), true) => {
            headers.insert(CONTENT_TYPE_HEADER.to_string(), body.content_type().to_string());
            Some(body.to_wire())
        }
        _ => None,
    };

    Ok(HttpRequest {
        method: descriptor.method,
        url,
        headers,
        body,
        basic_auth: auth.basic_auth.clone(),
        accept_invalid_certs: auth.accept_invalid_certs && auth.mode == AuthMode::Local,
    })
}

fn build_url(base_url: &str, path: &str, query: &[(String, String)]) -> Result<Url, ConfigError> {
    let separator = if path.starts_with('/') { "" } else { "/" };
    let raw = format!("{base_url}{REST_ROOT_PATH}{separator}{path}");

    let mut url =
        Url::parse(&raw).map_err(|e| ConfigError::invalid_base_url(base_url, e.to_string()))?;

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}
