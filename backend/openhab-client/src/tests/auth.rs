// Unit tests for auth resolution
// Tests mode exclusivity, required fields, and base endpoint selection

use super::support::{CLOUD_PASSWORD, CLOUD_TOKEN, LOCAL_TOKEN, cloud_credentials, local_credentials};
use crate::auth::{local_base_url, resolve};
use crate::error::ConfigError;
use crate::{CLOUD_RELAY_BASE_URL, DEFAULT_LOCAL_BASE_URL, OPENHAB_TOKEN_HEADER};

use models::{AuthMode, Credentials};

/// **VALUE**: Verifies local mode sets BOTH the bearer header and the openHAB token header.
///
/// **WHY THIS MATTERS**: Some administrative endpoints only read `X-OPENHAB-TOKEN`, others
/// only `Authorization`. Sending one of them breaks half the API.
///
/// **BUG THIS CATCHES**: "Simplifying" local auth down to a single header.
#[test]
fn given_local_token_when_resolved_then_sets_bearer_and_token_headers() {
    let auth = resolve(&local_credentials()).unwrap();

    assert_eq!(auth.mode, AuthMode::Local);
    assert_eq!(
        auth.headers,
        vec![
            ("authorization", format!("Bearer {LOCAL_TOKEN}")),
            (OPENHAB_TOKEN_HEADER, LOCAL_TOKEN.to_string()),
        ]
    );
    assert!(auth.basic_auth.is_none());
}

#[test]
fn given_local_url_with_trailing_slashes_when_resolved_then_slashes_stripped() {
    assert_eq!(local_base_url("http://openhab.lan:8080///"), "http://openhab.lan:8080");
    assert_eq!(local_base_url(""), DEFAULT_LOCAL_BASE_URL);
    assert_eq!(local_base_url("  "), "http://localhost:8080");
}

#[test]
fn given_empty_local_token_when_resolved_then_missing_credential() {
    let credentials = Credentials::builder()
        .with_auth_mode(AuthMode::Local)
        .build()
        .unwrap();

    let err = resolve(&credentials).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::MissingCredential { field: "localToken", mode: AuthMode::Local, .. }
    ));
}

/// **VALUE**: Verifies the cloud relay endpoint ignores the configured local URL.
///
/// **WHY THIS MATTERS**: Users switching from local to cloud usually leave the LAN URL
/// filled in. Sending cloud credentials (account password!) to that URL would leak them.
///
/// **BUG THIS CATCHES**: Reusing `base_url_local` regardless of mode.
#[test]
fn given_cloud_mode_with_local_url_when_resolved_then_uses_relay_address() {
    let auth = resolve(&cloud_credentials()).unwrap();

    assert_eq!(auth.base_url, CLOUD_RELAY_BASE_URL);
    assert_eq!(auth.base_url, "https://myopenhab.org");
    let basic = auth.basic_auth.expect("basic auth attached");
    assert_eq!(basic.username, "me@example.com");
    assert_eq!(basic.password.as_str(), CLOUD_PASSWORD);
    assert!(auth.headers.is_empty(), "No token header without a cloud token");
}

#[test]
fn given_cloud_token_when_resolved_then_only_token_header_set() {
    let mut credentials = cloud_credentials();
    credentials.cloud_token = Some(CLOUD_TOKEN.into());

    let auth = resolve(&credentials).unwrap();

    assert_eq!(auth.headers, vec![(OPENHAB_TOKEN_HEADER, CLOUD_TOKEN.to_string())]);
    assert!(
        auth.headers.iter().all(|(name, _)| *name != "authorization"),
        "Cloud mode never sends a bearer header"
    );
}

#[test]
fn given_cloud_without_password_when_resolved_then_missing_credential() {
    let mut credentials = cloud_credentials();
    credentials.cloud_password = Default::default();

    let err = resolve(&credentials).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::MissingCredential { field: "cloudPassword", .. }
    ));
}

#[test]
fn given_cloud_without_username_when_resolved_then_missing_credential() {
    let mut credentials = cloud_credentials();
    credentials.cloud_username = "  ".to_string();

    let err = resolve(&credentials).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::MissingCredential { field: "cloudUsername", .. }
    ));
}

/// **VALUE**: Verifies self-signed tolerance is refused for the cloud relay.
///
/// **WHY THIS MATTERS**: The relay is a public internet service. Disabling certificate
/// checks there would expose the account password to any interceptor.
///
/// **BUG THIS CATCHES**: Passing `allow_self_signed` through regardless of mode.
#[test]
fn given_cloud_with_self_signed_when_resolved_then_config_error() {
    let mut credentials = cloud_credentials();
    credentials.allow_self_signed = true;

    let err = resolve(&credentials).unwrap_err();

    assert!(matches!(err, ConfigError::SelfSignedNotAllowed { .. }));
    assert!(err.message().contains("myopenHAB"));
}

#[test]
fn given_legacy_basic_mode_when_resolved_then_rejected() {
    let credentials = Credentials::builder()
        .with_auth_mode(AuthMode::LegacyBasic)
        .with_local_token("would-work-otherwise")
        .build()
        .unwrap();

    let err = resolve(&credentials).unwrap_err();

    assert!(matches!(err, ConfigError::UnsupportedAuthMode { .. }));
    assert!(err.message().contains("'basic' is no longer supported"));
}

#[test]
fn given_local_self_signed_when_resolved_then_invalid_certs_accepted() {
    let mut credentials = local_credentials();
    credentials.allow_self_signed = true;

    let auth = resolve(&credentials).unwrap();

    assert!(auth.accept_invalid_certs);
}
