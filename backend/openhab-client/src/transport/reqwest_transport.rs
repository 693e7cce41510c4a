use crate::dispatch::HttpRequest;
use crate::error::DispatchError;
use crate::transport::{Transport, TransportResponse, collect_headers, decode_body};

use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

pub const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

/// [`Transport`] backed by reqwest.
///
/// Keeps a second client with certificate validation disabled; it is only
/// picked for requests that were explicitly allowed to skip validation.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    insecure_client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, DispatchError> {
        Self::with_timeout(DEFAULT_TIMEOUT_DURATION)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, DispatchError> {
        let client = Client::builder().timeout(timeout).build()?;
        let insecure_client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self {
            client,
            insecure_client,
        })
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<TransportResponse, DispatchError> {
        let client = if request.accept_invalid_certs {
            &self.insecure_client
        } else {
            &self.client
        };

        let mut builder = client.request(request.method.into(), request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(auth) = &request.basic_auth {
            builder = builder.basic_auth(&auth.username, Some(auth.password.as_str()));
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;

        let status = response.status();
        let headers = collect_headers(response.headers());
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes().await?;

        Ok(TransportResponse {
            status: Some(status.as_u16()),
            status_message: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body: decode_body(content_type.as_deref(), &bytes),
        })
    }
}
