use crate::error::dispatch::DispatchError;

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum OperationError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("Missing Parameter Error: '{name}' is required {location}")]
    MissingParameter {
        name: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid Parameter Error: '{name}': {message} {location}")]
    InvalidParameter {
        name: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown Operation Error: '{name}' {location}")]
    UnknownOperation {
        name: String,
        location: ErrorLocation,
    },
}

impl OperationError {
    #[track_caller]
    pub fn missing_parameter(name: &'static str) -> Self {
        OperationError::MissingParameter {
            name,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        OperationError::InvalidParameter {
            name,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        OperationError::UnknownOperation {
            name: name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The human-readable message without the source location.
    pub fn message(&self) -> String {
        match self {
            OperationError::Dispatch(error) => error.message(),
            OperationError::MissingParameter { name, .. } => {
                format!("Parameter '{name}' is required")
            }
            OperationError::InvalidParameter { name, message, .. } => {
                format!("Parameter '{name}' is invalid: {message}")
            }
            OperationError::UnknownOperation { name, .. } => {
                format!("Unknown operation '{name}'")
            }
        }
    }
}
