//! Configuration loaded from the environment.

use thiserror::Error;

/// Default geocoding provider host.
pub const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

/// Environment variable holding the provider access token.
pub const ACCESS_TOKEN_VAR: &str = "MAPBOX_ACCESS_TOKEN";

/// Environment variable overriding the provider host (used by tests
/// and staging deployments).
pub const BASE_URL_VAR: &str = "GEOCODING_BASE_URL";

/// Errors raised while validating configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{ACCESS_TOKEN_VAR} is not set; the upstream geocoding provider requires an access token")]
    MissingAccessToken,
}

/// Runtime settings for the proxy.
///
/// The access token is a secret. It is forwarded upstream but never
/// logged or echoed back to clients.
#[derive(Debug, Clone)]
pub struct Settings {
    pub access_token: String,
    pub base_url: String,
}

impl Settings {
    /// Read settings from the process environment.
    ///
    /// Fails fast when the access token is absent or empty, so the
    /// server never starts in a state where every request would send
    /// an empty credential upstream.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(ACCESS_TOKEN_VAR).ok(),
            std::env::var(BASE_URL_VAR).ok(),
        )
    }

    fn from_values(
        access_token: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let access_token = access_token
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::MissingAccessToken)?;

        Ok(Self {
            access_token,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}
