//! Configuration errors: everything that is wrong before a request leaves
//! the process.

use common::ErrorLocation;
use models::{AuthMode, ModelError};

use std::panic::Location;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config Read Error: {path}: {source} {location}")]
    ReadError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config Parse Error: {path}: {reason} {location}")]
    ParseError {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },

    #[error("Config Validation Error: {reason} {location}")]
    ValidationError {
        location: ErrorLocation,
        reason: String,
    },

    #[error("Unsupported Auth Mode Error: {} {location}", unsupported_mode_message(.mode))]
    UnsupportedAuthMode {
        location: ErrorLocation,
        mode: AuthMode,
    },

    #[error("Missing Credential Error: {} {location}", missing_credential_message(.field, .mode))]
    MissingCredential {
        location: ErrorLocation,
        field: &'static str,
        mode: AuthMode,
    },

    #[error("Self-Signed Certificate Error: {} {location}", SELF_SIGNED_CLOUD_MESSAGE)]
    SelfSignedNotAllowed { location: ErrorLocation },

    #[error("Invalid Base URL Error: '{url}': {reason} {location}")]
    InvalidBaseUrl {
        location: ErrorLocation,
        url: String,
        reason: String,
    },
}

const SELF_SIGNED_CLOUD_MESSAGE: &str =
    "Allowing self-signed certificates is not permitted with the myopenHAB cloud relay";

fn unsupported_mode_message(mode: &AuthMode) -> String {
    format!(
        "Authentication mode '{mode}' is no longer supported; use 'local' with an API token or 'cloudRelay'"
    )
}

fn missing_credential_message(field: &str, mode: &AuthMode) -> String {
    format!("'{field}' is required for '{mode}' authentication")
}

impl ConfigError {
    #[track_caller]
    pub fn unsupported_auth_mode(mode: AuthMode) -> Self {
        ConfigError::UnsupportedAuthMode {
            location: ErrorLocation::from(Location::caller()),
            mode,
        }
    }

    #[track_caller]
    pub fn missing_credential(field: &'static str, mode: AuthMode) -> Self {
        ConfigError::MissingCredential {
            location: ErrorLocation::from(Location::caller()),
            field,
            mode,
        }
    }

    #[track_caller]
    pub fn self_signed_not_allowed() -> Self {
        ConfigError::SelfSignedNotAllowed {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_base_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidBaseUrl {
            location: ErrorLocation::from(Location::caller()),
            url: url.into(),
            reason: reason.into(),
        }
    }

    #[track_caller]
    pub fn validation(reason: impl Into<String>) -> Self {
        ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: reason.into(),
        }
    }

    /// The human-readable message without the source location.
    pub fn message(&self) -> String {
        match self {
            ConfigError::ReadError { path, source, .. } => {
                format!("Cannot read {}: {source}", path.display())
            }
            ConfigError::ParseError { path, reason, .. } => {
                format!("Cannot parse {}: {reason}", path.display())
            }
            ConfigError::ValidationError { reason, .. } => reason.clone(),
            ConfigError::UnsupportedAuthMode { mode, .. } => unsupported_mode_message(mode),
            ConfigError::MissingCredential { field, mode, .. } => {
                missing_credential_message(field, mode)
            }
            ConfigError::SelfSignedNotAllowed { .. } => SELF_SIGNED_CLOUD_MESSAGE.to_string(),
            ConfigError::InvalidBaseUrl { url, reason, .. } => {
                format!("Invalid base URL '{url}': {reason}")
            }
        }
    }
}

impl From<ModelError> for ConfigError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: error.message().to_string(),
        }
    }
}
