//! Shared fixtures for unit tests.

use crate::dispatch::HttpRequest;
use crate::error::DispatchError;
use crate::transport::{Transport, TransportResponse};

use models::{AuthMode, Credentials, ResponseBody};

use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;

pub const LOCAL_TOKEN: &str = "oh.local.4f9c2e";
pub const CLOUD_PASSWORD: &str = "cloud-pass-77";
pub const CLOUD_TOKEN: &str = "oh.cloud.a81b";

pub fn local_credentials() -> Credentials {
    Credentials::builder()
        .with_auth_mode(AuthMode::Local)
        .with_base_url("http://openhab.lan:8080/")
        .with_local_token(LOCAL_TOKEN)
        .build()
        .expect("valid local credentials")
}

pub fn cloud_credentials() -> Credentials {
    Credentials::builder()
        .with_auth_mode(AuthMode::CloudRelay)
        .with_base_url("http://openhab.lan:8080")
        .with_cloud_username("me@example.com")
        .with_cloud_password(CLOUD_PASSWORD)
        .build()
        .expect("valid cloud credentials")
}

pub fn response(status: u16, reason: &str, body: ResponseBody) -> TransportResponse {
    TransportResponse {
        status: Some(status),
        status_message: reason.to_string(),
        headers: BTreeMap::new(),
        body,
    }
}

/// Transport that records every request and replays queued responses.
/// Falls back to `200 OK` with an empty body when the queue runs dry.
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<Result<TransportResponse, DispatchError>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, response: TransportResponse) -> Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn fail(self, error: DispatchError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<TransportResponse, DispatchError> {
        self.requests.lock().unwrap().push(request);
        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(response(200, "OK", ResponseBody::Empty)))
    }
}
