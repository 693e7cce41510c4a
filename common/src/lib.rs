//! Shared building blocks for the openHAB bridge.
//!
//! This crate holds the small cross-cutting types every other crate leans on:
//! error locations, HTTP status classification, and secret values that refuse
//! to show up in logs.
//!
//! ## Architecture
//!
//! - **common** (this crate): Cross-cutting primitives
//! - **models**: Pure data structures (credentials, envelopes, output rows)
//! - **openhab-client**: Auth resolution, dispatch, operation routing
//! - **ohctl**: Command-line host wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_secret;


pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::{REDACTION_MARKER, RedactedSecret};
