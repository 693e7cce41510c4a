use crate::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Errors raised while assembling model values from builders.
#[derive(Debug, ThisError)]
pub enum ModelError {
    /// A builder field was rejected before any value was produced
    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },
}

impl ModelError {
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        ModelError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ModelError::Validation { message, .. } => message,
        }
    }
}
