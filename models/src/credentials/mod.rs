pub mod builder;

use common::RedactedSecret;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================
// AUTH MODE
// ============================================

/// Which authentication vector a call goes through.
///
/// Exactly one mode is active per call; the modes are never combined.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthMode {
    /// API token against the locally reachable server.
    #[serde(rename = "local")]
    Local,

    /// Username/password against the myopenHAB relay.
    #[serde(rename = "cloudRelay", alias = "cloud")]
    CloudRelay,

    /// Basic auth against the local server. Still parsed so that old
    /// configurations fail with a clear message instead of a parse error.
    #[serde(rename = "basic")]
    LegacyBasic,
}

impl Default for AuthMode {
    fn default() -> Self {
        AuthMode::Local
    }
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Local => "local",
            AuthMode::CloudRelay => "cloudRelay",
            AuthMode::LegacyBasic => "basic",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "local" => Ok(AuthMode::Local),
            "cloudRelay" | "cloud" => Ok(AuthMode::CloudRelay),
            "basic" => Ok(AuthMode::LegacyBasic),
            other => Err(format!(
                "Unknown authentication mode '{other}' (expected 'local' or 'cloudRelay')"
            )),
        }
    }
}

// ============================================
// CREDENTIALS
// ============================================

/// Authentication settings supplied by the host for one invocation.
///
/// Secret fields are [`RedactedSecret`], so deriving `Debug` is safe.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[serde(default)]
    pub auth_mode: AuthMode,

    #[serde(default)]
    pub base_url_local: String,

    #[serde(default)]
    pub local_token: RedactedSecret,

    #[serde(default)]
    pub cloud_username: String,

    #[serde(default)]
    pub cloud_password: RedactedSecret,

    #[serde(default)]
    pub cloud_token: Option<RedactedSecret>,

    #[serde(default)]
    pub allow_self_signed: bool,
}

impl Credentials {
    pub fn builder() -> builder::CredentialsBuilder {
        builder::CredentialsBuilder::default()
    }

    /// A builder pre-filled with these credentials.
    pub fn to_builder(&self) -> builder::CredentialsBuilder {
        builder::CredentialsBuilder::from(self)
    }

    /// The optional relay token, treating a blank value as absent.
    pub fn cloud_token(&self) -> Option<&RedactedSecret> {
        self.cloud_token.as_ref().filter(|token| !token.is_blank())
    }
}
