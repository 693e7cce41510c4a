//! Client for the openHAB REST API, reachable either directly on the local
//! network or through the myopenHAB cloud relay.
//!
//! A call flows through four stages:
//!
//! 1. [`auth`] turns [`Credentials`](models::Credentials) into a base URL plus
//!    headers for exactly one authentication mode.
//! 2. [`dispatch`] builds the HTTP request, sends it through a
//!    [`Transport`](transport::Transport) and classifies the response.
//! 3. [`operations`] maps `resource.operation` names onto REST paths and
//!    shapes payloads into output rows.
//! 4. [`executor`] runs an operation for each input row of a batch.

pub mod auth;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod operations;
pub mod transport;

#[cfg(test)]
mod tests;

pub const REST_ROOT_PATH: &str = "/rest";

pub const DEFAULT_LOCAL_HOSTNAME: &str = "localhost";
pub const DEFAULT_LOCAL_PORT: u16 = 8080;
pub const DEFAULT_LOCAL_BASE_URL: &str =
    const_format::concatcp!("http://", DEFAULT_LOCAL_HOSTNAME, ":", DEFAULT_LOCAL_PORT);

pub const CLOUD_RELAY_HOSTNAME: &str = "myopenhab.org";
pub const CLOUD_RELAY_BASE_URL: &str = const_format::concatcp!("https://", CLOUD_RELAY_HOSTNAME);

/// Proprietary token header. Some administrative endpoints only look at this
/// one and ignore `Authorization`.
pub const OPENHAB_TOKEN_HEADER: &str = "x-openhab-token";
