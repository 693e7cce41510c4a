use crate::{AuthMode, Credentials};

use std::str::FromStr;

#[test]
fn given_mode_names_when_parsed_then_map_to_variants() {
    assert_eq!(AuthMode::from_str("local").unwrap(), AuthMode::Local);
    assert_eq!(AuthMode::from_str("cloudRelay").unwrap(), AuthMode::CloudRelay);
    assert_eq!(AuthMode::from_str("cloud").unwrap(), AuthMode::CloudRelay);
    assert_eq!(AuthMode::from_str("basic").unwrap(), AuthMode::LegacyBasic);
}

#[test]
fn given_unknown_mode_when_parsed_then_error_names_value() {
    let err = AuthMode::from_str("oauth").unwrap_err();

    assert!(err.contains("oauth"));
}

/// **VALUE**: Verifies host-supplied credentials deserialize with camelCase keys.
///
/// **WHY THIS MATTERS**: The host hands over credentials as a JSON bag using the
/// field names of its form. A snake_case mismatch would silently default every field.
///
/// **BUG THIS CATCHES**: Losing `rename_all = "camelCase"` on Credentials.
#[test]
fn given_camel_case_json_when_deserialized_then_fields_populate() {
    let json = r#"{
        "authMode": "cloudRelay",
        "baseUrlLocal": "http://openhab:8080",
        "cloudUsername": "me@example.com",
        "cloudPassword": "pw",
        "cloudToken": "oh.abc",
        "allowSelfSigned": true
    }"#;

    let credentials: Credentials = serde_json::from_str(json).unwrap();

    assert_eq!(credentials.auth_mode, AuthMode::CloudRelay);
    assert_eq!(credentials.base_url_local, "http://openhab:8080");
    assert_eq!(credentials.cloud_username, "me@example.com");
    assert_eq!(credentials.cloud_password.as_str(), "pw");
    assert_eq!(credentials.cloud_token().map(|t| t.as_str()), Some("oh.abc"));
    assert!(credentials.allow_self_signed);
    assert!(credentials.local_token.is_empty());
}

#[test]
fn given_blank_cloud_token_when_read_then_treated_as_absent() {
    let credentials: Credentials = serde_json::from_str(r#"{"cloudToken": "  "}"#).unwrap();

    assert!(credentials.cloud_token().is_none());
    assert_eq!(credentials.auth_mode, AuthMode::Local);
}
