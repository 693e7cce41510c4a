//! Authentication resolution.
//!
//! Runs before any network activity. Produces the base endpoint and the
//! credentials to attach for exactly one mode, or a configuration error.

use crate::error::ConfigError;
use crate::{CLOUD_RELAY_BASE_URL, DEFAULT_LOCAL_BASE_URL, OPENHAB_TOKEN_HEADER};

use common::RedactedSecret;
use models::{AuthMode, Credentials};

use log::debug;

const AUTHORIZATION_HEADER: &str = "authorization";

/// Username/password pair attached at the transport level, never as a header.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    pub username: String,
    pub password: RedactedSecret,
}

/// Outcome of resolving credentials for one call.
#[derive(Debug, Clone)]
pub struct ResolvedAuth {
    pub mode: AuthMode,
    /// Base endpoint without trailing slash, before the REST root.
    pub base_url: String,
    /// Header name (lowercase) and value pairs carrying tokens.
    pub headers: Vec<(&'static str, String)>,
    pub basic_auth: Option<BasicAuth>,
    pub accept_invalid_certs: bool,
}

/// Resolve `credentials` into the endpoint and auth material for one call.
///
/// # Errors
///
/// Returns [`ConfigError`] if:
/// - The legacy `basic` mode is selected
/// - The active mode is missing a required field
/// - Self-signed certificates are allowed together with the cloud relay
pub fn resolve(credentials: &Credentials) -> Result<ResolvedAuth, ConfigError> {
    match credentials.auth_mode {
        AuthMode::LegacyBasic => Err(ConfigError::unsupported_auth_mode(AuthMode::LegacyBasic)),
        AuthMode::Local => resolve_local(credentials),
        AuthMode::CloudRelay => resolve_cloud(credentials),
    }
}

fn resolve_local(credentials: &Credentials) -> Result<ResolvedAuth, ConfigError> {
    if credentials.local_token.is_blank() {
        return Err(ConfigError::missing_credential("localToken", AuthMode::Local));
    }

    let token = credentials.local_token.as_str();
    let base_url = local_base_url(&credentials.base_url_local);
    debug!(
        "Resolved local auth against {base_url} (token {} chars)",
        credentials.local_token.len()
    );

    // Both headers carry the same token.
    Ok(ResolvedAuth {
        mode: AuthMode::Local,
        base_url,
        headers: vec![
            (AUTHORIZATION_HEADER, format!("Bearer {token}")),
            (OPENHAB_TOKEN_HEADER, token.to_string()),
        ],
        basic_auth: None,
        accept_invalid_certs: credentials.allow_self_signed,
    })
}

fn resolve_cloud(credentials: &Credentials) -> Result<ResolvedAuth, ConfigError> {
    if credentials.cloud_username.trim().is_empty() {
        return Err(ConfigError::missing_credential(
            "cloudUsername",
            AuthMode::CloudRelay,
        ));
    }

    if credentials.cloud_password.is_empty() {
        return Err(ConfigError::missing_credential(
            "cloudPassword",
            AuthMode::CloudRelay,
        ));
    }

    if credentials.allow_self_signed {
        return Err(ConfigError::self_signed_not_allowed());
    }

    let headers = credentials
        .cloud_token()
        .map(|token| vec![(OPENHAB_TOKEN_HEADER, token.as_str().to_string())])
        .unwrap_or_default();

    debug!(
        "Resolved cloud relay auth for {} (token header: {})",
        credentials.cloud_username,
        !headers.is_empty()
    );

    Ok(ResolvedAuth {
        mode: AuthMode::CloudRelay,
        base_url: CLOUD_RELAY_BASE_URL.to_string(),
        headers,
        basic_auth: Some(BasicAuth {
            username: credentials.cloud_username.clone(),
            password: credentials.cloud_password.clone(),
        }),
        accept_invalid_certs: false,
    })
}

/// Configured local URL with trailing slashes stripped, or the default.
pub fn local_base_url(configured: &str) -> String {
    let trimmed = configured.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_LOCAL_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
