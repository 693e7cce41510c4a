use crate::error::model_error::ModelError;
use crate::{AuthMode, Credentials};

use common::RedactedSecret;

/// Builder for creating validated [`Credentials`] instances.
///
/// Mode-specific requirements (token present, password present) are checked
/// at dispatch time; the builder only rejects values that are malformed in
/// any mode.
#[derive(Debug, Default)]
pub struct CredentialsBuilder {
    auth_mode: Option<AuthMode>,
    base_url_local: Option<String>,
    local_token: Option<RedactedSecret>,
    cloud_username: Option<String>,
    cloud_password: Option<RedactedSecret>,
    cloud_token: Option<RedactedSecret>,
    allow_self_signed: bool,
}

impl CredentialsBuilder {
    pub fn with_auth_mode(mut self, mode: AuthMode) -> Self {
        self.auth_mode = Some(mode);
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url_local = Some(url.into());
        self
    }

    pub fn with_local_token(mut self, token: impl Into<RedactedSecret>) -> Self {
        self.local_token = Some(token.into());
        self
    }

    pub fn with_cloud_username(mut self, username: impl Into<String>) -> Self {
        self.cloud_username = Some(username.into());
        self
    }

    pub fn with_cloud_password(mut self, password: impl Into<RedactedSecret>) -> Self {
        self.cloud_password = Some(password.into());
        self
    }

    pub fn with_cloud_token(mut self, token: impl Into<RedactedSecret>) -> Self {
        self.cloud_token = Some(token.into());
        self
    }

    pub fn with_allow_self_signed(mut self, allow: bool) -> Self {
        self.allow_self_signed = allow;
        self
    }

    /// Build the Credentials with validation.
    #[track_caller]
    pub fn build(self) -> Result<Credentials, ModelError> {
        let base_url_local = self.base_url_local.unwrap_or_default();
        let trimmed = base_url_local.trim();

        if !trimmed.is_empty() && !trimmed.starts_with("http://") && !trimmed.starts_with("https://")
        {
            return Err(ModelError::validation(format!(
                "Base URL must start with http:// or https://: {trimmed}"
            )));
        }

        Ok(Credentials {
            auth_mode: self.auth_mode.unwrap_or_default(),
            base_url_local: trimmed.to_string(),
            local_token: self.local_token.unwrap_or_default(),
            cloud_username: self.cloud_username.unwrap_or_default(),
            cloud_password: self.cloud_password.unwrap_or_default(),
            cloud_token: self.cloud_token,
            allow_self_signed: self.allow_self_signed,
        })
    }
}

/// Start from existing credentials, e.g. to overlay environment values.
impl From<&Credentials> for CredentialsBuilder {
    fn from(credentials: &Credentials) -> Self {
        Self {
            auth_mode: Some(credentials.auth_mode),
            base_url_local: Some(credentials.base_url_local.clone()),
            local_token: Some(credentials.local_token.clone()),
            cloud_username: Some(credentials.cloud_username.clone()),
            cloud_password: Some(credentials.cloud_password.clone()),
            cloud_token: credentials.cloud_token.clone(),
            allow_self_signed: credentials.allow_self_signed,
        }
    }
}
