use common::ErrorLocation;

use openhab_client::error::{ConfigError, DispatchError, OperationError};

use std::panic::Location;

use thiserror::Error;

/// Errors surfaced by the `ohctl` binary.
#[derive(Debug, Error)]
pub enum OhctlError {
    /// Error from this App
    #[error("Ohctl Error: {message} {location}")]
    Ohctl {
        message: String,
        location: ErrorLocation,
    },

    /// Config file or environment could not be turned into credentials
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// Input rows could not be read or parsed
    #[error("Input Error: {message} {location}")]
    Input {
        message: String,
        location: ErrorLocation,
    },

    /// The batch aborted on a failing row
    #[error("Operation Error: {message} {location}")]
    Operation {
        message: String,
        location: ErrorLocation,
    },
}

impl OhctlError {
    #[track_caller]
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn ohctl(message: impl Into<String>) -> Self {
        Self::Ohctl {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The message without location, as printed to the terminal.
    pub fn message(&self) -> &str {
        match self {
            Self::Ohctl { message, .. }
            | Self::Config { message, .. }
            | Self::Input { message, .. }
            | Self::Operation { message, .. } => message,
        }
    }
}

impl From<ConfigError> for OhctlError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        Self::Config {
            message: error.message(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DispatchError> for OhctlError {
    #[track_caller]
    fn from(error: DispatchError) -> Self {
        Self::Ohctl {
            message: error.message(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<OperationError> for OhctlError {
    #[track_caller]
    fn from(error: OperationError) -> Self {
        Self::Operation {
            message: error.message(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
