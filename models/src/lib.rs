//! Domain models for the openHAB bridge.
//!
//! This crate contains pure data structures representing the values that
//! flow through a single call: the credentials supplied by the host, the
//! response envelope produced by the transport, and the output rows handed
//! back. Models have no business logic beyond shaping and validation.

pub mod credentials;
pub mod envelope;
pub mod error;
pub mod output_row;

#[cfg(test)]
mod tests;

pub use common::ErrorLocation;
pub use credentials::builder::CredentialsBuilder;
pub use credentials::{AuthMode, Credentials};
pub use envelope::{ResponseBody, ResponseEnvelope, ResponsePayload};
pub use error::model_error::ModelError;
pub use output_row::OutputRow;
