//! Client configuration.

use memebot_error::{ConfigError, MemebotResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default catalog endpoint. Generation URLs are built from the same base.
pub(crate) const DEFAULT_ENDPOINT: &str = "https://memegen.link/api/templates/";

/// Configuration for the memegen.link client.
///
/// The upstream dependency is untrusted; the request timeout keeps an
/// unresponsive upstream from stalling the invoking command indefinitely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemegenConfig {
    /// Catalog endpoint base URL, trailing slash included
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

impl Default for MemegenConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl MemegenConfig {
    /// Load client configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> MemebotResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)).into())
    }
}
