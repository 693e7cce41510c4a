//! Errors raised while sending a request and classifying its response.
//!
//! - Configuration problems are wrapped, not re-described
//! - Transport failures keep the transport's own message
//! - HTTP failures carry the composed, user-facing message verbatim

use crate::error::config::ConfigError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum DispatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("Malformed Response Error: {message} {location}")]
    MalformedResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP Error: {message} {location}")]
    HttpStatus {
        status_code: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },
}

impl DispatchError {
    #[track_caller]
    pub fn transport(message: impl Into<String>) -> Self {
        DispatchError::Transport {
            message: message.into(),
            is_timeout: false,
            is_connection: false,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed_response(message: impl Into<String>) -> Self {
        DispatchError::MalformedResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn http_status(status_code: HttpStatusCode, message: impl Into<String>) -> Self {
        DispatchError::HttpStatus {
            status_code,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The human-readable message without the source location.
    pub fn message(&self) -> String {
        match self {
            DispatchError::Config(error) => error.message(),
            DispatchError::Transport { message, .. } => message.clone(),
            DispatchError::MalformedResponse { message, .. } => message.clone(),
            DispatchError::HttpStatus { message, .. } => message.clone(),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            DispatchError::HttpStatus { status_code, .. } => Some(status_code.as_u16()),
            _ => None,
        }
    }

    /// The transport gave up waiting for the hub.
    pub fn is_timeout(&self) -> bool {
        matches!(self, DispatchError::Transport { is_timeout: true, .. })
    }

    /// The hub could not be reached at all (refused, DNS, TLS handshake).
    pub fn is_connection(&self) -> bool {
        matches!(self, DispatchError::Transport { is_connection: true, .. })
    }

    /// True when the failure happened before anything was sent.
    pub fn is_config(&self) -> bool {
        matches!(self, DispatchError::Config(_))
    }
}

impl From<reqwest::Error> for DispatchError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        DispatchError::Transport {
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
