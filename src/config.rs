//! Portal client configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default API base URL, relative to the host serving the portal.
pub const DEFAULT_BASE_URL: &str = "/api";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the portal client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// API base URL all endpoint paths are joined onto
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Durable session file; `None` keeps the session in memory only
    pub session_file: Option<PathBuf>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            session_file: None,
        }
    }
}

impl PortalConfig {
    /// Start a configuration builder.
    pub fn builder() -> PortalConfigBuilder {
        PortalConfigBuilder {
            config: Self::default(),
        }
    }

    /// Configuration from the environment (`.env` honored):
    /// `INTELLIDESK_API_BASE_URL`, `INTELLIDESK_TIMEOUT_SECS`,
    /// `INTELLIDESK_SESSION_FILE`. Unset or unparseable variables keep
    /// their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        if let Ok(value) = std::env::var("INTELLIDESK_API_BASE_URL") {
            config.base_url = value;
        }
        if let Ok(value) = std::env::var("INTELLIDESK_TIMEOUT_SECS") {
            if let Ok(secs) = value.parse() {
                config.timeout_secs = secs;
            }
        }
        if let Ok(value) = std::env::var("INTELLIDESK_SESSION_FILE") {
            config.session_file = Some(PathBuf::from(value));
        }
        config
    }
}

/// Builder for [`PortalConfig`].
pub struct PortalConfigBuilder {
    config: PortalConfig,
}

impl PortalConfigBuilder {
    /// API base URL.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.config.base_url = base_url.to_string();
        self
    }

    /// Request timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Persist the session to this file across process restarts.
    pub fn session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.session_file = Some(path.into());
        self
    }

    /// Finish.
    pub fn build(self) -> PortalConfig {
        self.config
    }
}

impl Default for PortalConfigBuilder {
    fn default() -> Self {
        PortalConfig::builder()
    }
}
