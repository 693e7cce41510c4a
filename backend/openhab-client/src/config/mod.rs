//! Client configuration: credentials plus transport settings, loaded from a
//! TOML file and overridden from the environment.

use crate::error::ConfigError;

use common::ErrorLocation;
use models::{AuthMode, Credentials};

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use log::{debug, info, warn};
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "openhab.toml";

const MAX_TIMEOUT_SECS: u64 = 600;

pub const ENV_AUTH_MODE: &str = "OPENHAB_AUTH_MODE";
pub const ENV_BASE_URL: &str = "OPENHAB_BASE_URL";
pub const ENV_TOKEN: &str = "OPENHAB_TOKEN";
pub const ENV_CLOUD_USERNAME: &str = "OPENHAB_CLOUD_USERNAME";
pub const ENV_CLOUD_PASSWORD: &str = "OPENHAB_CLOUD_PASSWORD";
pub const ENV_CLOUD_TOKEN: &str = "OPENHAB_CLOUD_TOKEN";
pub const ENV_ALLOW_SELF_SIGNED: &str = "OPENHAB_ALLOW_SELF_SIGNED";

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    #[serde(default)]
    pub credentials: Credentials,

    #[serde(default)]
    pub debug: bool,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            debug: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

// ============================================
// IMPLEMENTATION
// ============================================

impl ClientConfig {
    /// Load config from `path`.
    ///
    /// # Returns
    ///
    /// Returns defaults if the file does not exist.
    /// Returns `Err(ConfigError)` if the file exists but is unreadable or invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("Config file not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: ClientConfig = toml::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config TOML: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Load `{config_dir}/openhab.toml`.
    pub fn load_from_dir(config_dir: &Path) -> Result<Self, ConfigError> {
        Self::load(&config_dir.join(CONFIG_FILE_NAME))
    }

    /// Load `.env` if present, then apply `OPENHAB_*` variables.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Some(path) = try_load_dotenv() {
            info!("Loaded .env from: {}", path.display());
        }

        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Overlay values returned by `lookup` onto the loaded credentials.
    /// Blank values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut builder = self.credentials.to_builder();

        if let Some(mode) = value(ENV_AUTH_MODE) {
            let mode = AuthMode::from_str(&mode).map_err(|reason| ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("{ENV_AUTH_MODE}: {reason}"),
            })?;
            builder = builder.with_auth_mode(mode);
        }

        if let Some(url) = value(ENV_BASE_URL) {
            builder = builder.with_base_url(url);
        }

        if let Some(token) = value(ENV_TOKEN) {
            builder = builder.with_local_token(token);
        }

        if let Some(username) = value(ENV_CLOUD_USERNAME) {
            builder = builder.with_cloud_username(username);
        }

        if let Some(password) = value(ENV_CLOUD_PASSWORD) {
            builder = builder.with_cloud_password(password);
        }

        if let Some(token) = value(ENV_CLOUD_TOKEN) {
            builder = builder.with_cloud_token(token);
        }

        if let Some(flag) = value(ENV_ALLOW_SELF_SIGNED) {
            let allow = parse_flag(&flag).ok_or_else(|| ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("{ENV_ALLOW_SELF_SIGNED}: expected true or false, got '{flag}'"),
            })?;
            builder = builder.with_allow_self_signed(allow);
        }

        self.credentials = builder.build()?;
        self.validate()
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::validation(format!(
                "Invalid timeout: {}s (must be 1-{MAX_TIMEOUT_SECS})",
                self.timeout_secs
            )));
        }

        // Rejects a base URL without an http(s) scheme.
        self.credentials.to_builder().build()?;

        if self.credentials.auth_mode == AuthMode::LegacyBasic {
            warn!("Auth mode 'basic' is configured; every request will be rejected");
        }

        debug!(
            "Config validated (mode: {}, timeout: {}s)",
            self.credentials.auth_mode, self.timeout_secs
        );
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Loads `.env` from the current directory or its parents, if one exists.
fn try_load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}
