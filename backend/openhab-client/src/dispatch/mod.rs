//! Request dispatch: one call in, one classified outcome out.

pub mod classify;
pub mod diagnostics;
pub mod request;

pub use request::HttpRequest;

use crate::auth;
use crate::error::DispatchError;
use crate::transport::{ReqwestTransport, Transport};

use models::{Credentials, ResponsePayload};

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

// ============================================
// REQUEST DESCRIPTOR
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Only mutating verbs ever carry a body.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Method::Get | Method::Head)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Head => reqwest::Method::HEAD,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Text(String),
    Json(Value),
}

impl RequestBody {
    pub fn content_type(&self) -> &'static str {
        match self {
            RequestBody::Text(_) => "text/plain",
            RequestBody::Json(_) => "application/json",
        }
    }

    pub fn to_wire(&self) -> String {
        match self {
            RequestBody::Text(text) => text.clone(),
            RequestBody::Json(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Negotiate `text/plain` instead of JSON.
    pub plain_text: bool,
    /// Return status and headers along with the body.
    pub full_response: bool,
    /// Merged after the computed headers, so they win on conflict.
    pub extra_headers: BTreeMap<String, String>,
    pub debug: bool,
}

/// One abstract REST call. Paths are relative to the REST root.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub body: Option<RequestBody>,
    pub query: Vec<(String, String)>,
    pub options: RequestOptions,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: Vec::new(),
            options: RequestOptions::default(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn with_text_body(mut self, text: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Text(text.into()));
        self
    }

    pub fn with_json_body(mut self, value: Value) -> Self {
        self.body = Some(RequestBody::Json(value));
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.extra_headers.insert(name.into(), value.into());
        self
    }

    pub fn plain_text(mut self) -> Self {
        self.options.plain_text = true;
        self
    }

    pub fn full_response(mut self) -> Self {
        self.options.full_response = true;
        self
    }

    pub fn debug(mut self, enabled: bool) -> Self {
        self.options.debug = enabled;
        self
    }
}

// ============================================
// DISPATCHER
// ============================================

/// Sends one request per call through `T` and classifies the outcome.
///
/// Holds no per-call state: credentials are resolved again on every call.
#[derive(Clone)]
pub struct Dispatcher<T: Transport = ReqwestTransport> {
    transport: T,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve auth, build the request, send it once and classify the result.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::Config`] before anything is sent
    /// - [`DispatchError::Transport`] when the call could not complete
    /// - [`DispatchError::MalformedResponse`] when no status code came back
    /// - [`DispatchError::HttpStatus`] for any status outside `[200, 300)`
    pub async fn dispatch(
        &self,
        credentials: &Credentials,
        descriptor: &RequestDescriptor,
    ) -> Result<ResponsePayload, DispatchError> {
        let auth = auth::resolve(credentials)?;
        let request = request::build(descriptor, &auth)?;
        let debug = descriptor.options.debug;

        if debug {
            diagnostics::log_request(&request, auth.mode, descriptor.options.full_response);
        }

        let method = request.method;
        let url = request.url.clone();

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(error) => {
                if debug {
                    diagnostics::log_transport_failure(method, &url, &error);
                }
                return Err(error);
            }
        };

        if debug {
            diagnostics::log_response(method, &url, &response);
        }

        classify::classify(method, auth.mode, response, descriptor.options.full_response)
    }
}

impl Dispatcher<ReqwestTransport> {
    /// Dispatcher over a fresh reqwest client with the default timeout.
    pub fn with_default_transport() -> Result<Self, DispatchError> {
        Ok(Self::new(ReqwestTransport::new()?))
    }
}
