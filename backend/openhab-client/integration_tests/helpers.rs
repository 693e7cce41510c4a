//! Test helpers for integration tests against a mock openHAB server.

use openhab_client::dispatch::Dispatcher;
use openhab_client::operations::params::InputRow;

use models::{AuthMode, Credentials};

use serde_json::Value;
use wiremock::MockServer;

/// Test constant for local API token authentication
pub const TEST_TOKEN: &str = "oh.integration.5e1d";

/// Local-mode credentials pointing at the mock server.
pub fn local_credentials(server: &MockServer) -> Credentials {
    Credentials::builder()
        .with_auth_mode(AuthMode::Local)
        .with_base_url(format!("{}/", server.uri()))
        .with_local_token(TEST_TOKEN)
        .build()
        .expect("Failed to build local credentials")
}

pub fn dispatcher() -> Dispatcher {
    Dispatcher::with_default_transport().expect("Failed to build reqwest transport")
}

pub fn row(value: Value) -> InputRow {
    value
        .as_object()
        .cloned()
        .expect("Test row must be a JSON object")
}
