//! Client runtime configuration loaded via OrthoConfig.

use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_TOKEN_PATH: &str = ".restaurants/access-token";

/// Configuration values controlling endpoints, credentials, and timeouts.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RESTAURANTS")]
pub struct ClientSettings {
    /// GraphQL record-store endpoint.
    pub api_endpoint: String,
    /// Hosted identity session endpoint.
    pub auth_endpoint: String,
    /// Optional API key sent as `x-api-key` on record-store requests.
    pub api_key: Option<String>,
    /// Optional override for the shell-issued access token path.
    pub token_path: Option<PathBuf>,
    /// Per-request timeout in seconds.
    #[ortho_config(default = 30)]
    pub request_timeout_secs: u64,
}

impl ClientSettings {
    /// Return the configured token path, falling back to the default.
    #[must_use]
    pub fn token_path(&self) -> PathBuf {
        self.token_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TOKEN_PATH))
    }

    /// Return the per-request timeout as a duration.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
