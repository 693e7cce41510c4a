use crate::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

const SECRET_SERIALIZATION_MESSAGE: &str =
    "RedactedSecret cannot be serialized - read it with as_str() explicitly";

/// Raised when a credential wrapper is handed to a serializer.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Serialization Error: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },
}

impl RedactError {
    #[track_caller]
    pub fn secret_serialization() -> Self {
        RedactError::Serialization {
            message: SECRET_SERIALIZATION_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
