// Unit tests for CredentialsBuilder

use crate::{AuthMode, Credentials, ModelError};

/// **VALUE**: Verifies a fully specified local configuration builds unchanged.
///
/// **WHY THIS MATTERS**: Tests and the CLI construct credentials through the builder;
/// any field dropped here means requests go out without auth.
///
/// **BUG THIS CATCHES**: A `with_*` method writing to the wrong field.
#[test]
fn given_all_local_fields_when_build_then_returns_credentials() {
    let credentials = Credentials::builder()
        .with_auth_mode(AuthMode::Local)
        .with_base_url("http://openhab.lan:8080/")
        .with_local_token("oh.local.token")
        .with_allow_self_signed(true)
        .build()
        .expect("valid credentials");

    assert_eq!(credentials.auth_mode, AuthMode::Local);
    assert_eq!(credentials.base_url_local, "http://openhab.lan:8080/");
    assert_eq!(credentials.local_token.as_str(), "oh.local.token");
    assert!(credentials.allow_self_signed);
    assert!(credentials.cloud_token.is_none());
}

#[test]
fn given_no_fields_when_build_then_defaults_to_local_mode() {
    let credentials = Credentials::builder().build().unwrap();

    assert_eq!(credentials.auth_mode, AuthMode::Local);
    assert!(credentials.base_url_local.is_empty());
    assert!(!credentials.allow_self_signed);
}

/// **VALUE**: Verifies schemeless base URLs are rejected with a location-tagged error.
///
/// **WHY THIS MATTERS**: `openhab:8080` parses as a URL with scheme `openhab`, which
/// then fails deep inside the HTTP client with a confusing message.
///
/// **BUG THIS CATCHES**: Dropping the scheme check from `build()`.
#[test]
fn given_base_url_without_scheme_when_build_then_returns_validation_error() {
    let result = Credentials::builder().with_base_url("openhab:8080").build();

    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert!(message.contains("http://"));
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[test]
fn given_validation_error_when_formatted_then_includes_location() {
    let err = Credentials::builder()
        .with_base_url("ftp://openhab")
        .build()
        .unwrap_err();

    let rendered = err.to_string();

    assert!(rendered.contains("Validation Error"));
    assert!(rendered.contains("builder.rs"));
}

/// **VALUE**: Verifies `to_builder()` carries every field, secrets included.
///
/// **WHY THIS MATTERS**: Environment overrides are layered on top of file credentials
/// through this builder; a field it forgets is silently reset to its default.
///
/// **BUG THIS CATCHES**: A new Credentials field left out of the `From<&Credentials>` impl.
#[test]
fn given_cloud_credentials_when_rebuilt_then_all_fields_kept() {
    let original = Credentials::builder()
        .with_auth_mode(AuthMode::CloudRelay)
        .with_cloud_username("me@example.com")
        .with_cloud_password("pw")
        .with_cloud_token("oh.cloud")
        .build()
        .unwrap();

    let rebuilt = original
        .to_builder()
        .with_base_url("http://openhab.lan:8080")
        .build()
        .unwrap();

    assert_eq!(rebuilt.auth_mode, AuthMode::CloudRelay);
    assert_eq!(rebuilt.cloud_username, "me@example.com");
    assert_eq!(rebuilt.cloud_password.as_str(), "pw");
    assert_eq!(rebuilt.cloud_token().map(|t| t.as_str()), Some("oh.cloud"));
    assert_eq!(rebuilt.base_url_local, "http://openhab.lan:8080");
    assert!(!rebuilt.allow_self_signed);
}
