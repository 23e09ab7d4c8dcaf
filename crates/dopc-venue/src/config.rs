//! # Venue API Configuration
//!
//! Configuration management for the venue API client.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     DOPC_API_BASE_URL=http://localhost:8080/v1                         │
//! │     DOPC_REQUEST_TIMEOUT_SECS=3                                        │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/dopc/dopc.toml (Linux)                                   │
//! │     ~/Library/Application Support/com.dopc.dopc/dopc.toml (macOS)      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     development venue API, 10 s request timeout                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # dopc.toml
//! [api]
//! base_url = "https://consumer-api.development.dev.woltapi.com/home-assignment-api/v1"
//! request_timeout_secs = 10
//! connect_timeout_secs = 5
//! user_agent = "dopc/0.1"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{VenueError, VenueResult};

/// Public venue API used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str =
    "https://consumer-api.development.dev.woltapi.com/home-assignment-api/v1";

// =============================================================================
// API Settings
// =============================================================================

/// Where and how to reach the venue API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL; `/venues/{slug}/static` and `/venues/{slug}/dynamic` are
    /// appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout (seconds).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// TCP/TLS connect timeout (seconds).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_user_agent() -> String {
    format!("dopc/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete venue API configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueApiConfig {
    #[serde(default)]
    pub api: ApiSettings,
}

impl VenueApiConfig {
    /// Creates a config pointing at `base_url` with default timeouts.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        VenueApiConfig {
            api: ApiSettings {
                base_url: base_url.into(),
                ..ApiSettings::default()
            },
        }
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (dopc.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> VenueResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading venue API config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load venue API config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> VenueResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| VenueError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| VenueError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = self.to_toml()?;
        std::fs::write(&path, contents).map_err(|e| VenueError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Venue API config saved");
        Ok(())
    }

    /// Renders the configuration as pretty TOML.
    pub fn to_toml(&self) -> VenueResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> VenueResult<()> {
        self.base_url()?;

        if self.api.request_timeout_secs == 0 {
            return Err(VenueError::InvalidConfig(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }

        if self.api.connect_timeout_secs == 0 {
            return Err(VenueError::InvalidConfig(
                "connect_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("DOPC_API_BASE_URL") {
            debug!(url = %url, "Overriding venue API base URL from environment");
            self.api.base_url = url;
        }

        if let Ok(secs) = std::env::var("DOPC_REQUEST_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.api.request_timeout_secs = s,
                Err(_) => warn!(value = %secs, "Ignoring invalid DOPC_REQUEST_TIMEOUT_SECS"),
            }
        }

        if let Ok(secs) = std::env::var("DOPC_CONNECT_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.api.connect_timeout_secs = s,
                Err(_) => warn!(value = %secs, "Ignoring invalid DOPC_CONNECT_TIMEOUT_SECS"),
            }
        }

        if let Ok(agent) = std::env::var("DOPC_USER_AGENT") {
            self.api.user_agent = agent;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "dopc", "dopc")
            .map(|dirs| dirs.config_dir().join("dopc.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Returns the parsed base URL.
    ///
    /// Only `http` and `https` are accepted.
    pub fn base_url(&self) -> VenueResult<Url> {
        let url = Url::parse(&self.api.base_url)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(VenueError::InvalidUrl(format!(
                "Venue API URL must use http:// or https://, got {}://",
                other
            ))),
        }
    }

    /// Returns the request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.request_timeout_secs)
    }

    /// Returns the connect timeout.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.api.connect_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("dopc-config-test-{}-{}", name, std::process::id()))
            .join("dopc.toml")
    }

    #[test]
    fn test_default_config() {
        let config = VenueApiConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.request_timeout_secs, 10);
        assert_eq!(config.api.connect_timeout_secs, 5);
        assert!(config.api.user_agent.starts_with("dopc/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = VenueApiConfig::default();
        assert!(config.validate().is_ok());

        config.api.base_url = "ftp://venues.example.com".to_string();
        assert!(matches!(config.validate(), Err(VenueError::InvalidUrl(_))));

        config.api.base_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(VenueError::InvalidUrl(_))));

        config.api.base_url = "http://localhost:8080/v1".to_string();
        assert!(config.validate().is_ok());

        config.api.request_timeout_secs = 0;
        assert!(matches!(config.validate(), Err(VenueError::InvalidConfig(_))));

        config.api.request_timeout_secs = 1;
        config.api.connect_timeout_secs = 0;
        assert!(matches!(config.validate(), Err(VenueError::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: VenueApiConfig = toml::from_str(
            r#"
            [api]
            base_url = "http://localhost:9000"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.api.request_timeout_secs, 10);

        let empty: VenueApiConfig = toml::from_str("").unwrap();
        assert_eq!(empty, VenueApiConfig::default());
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = VenueApiConfig::default().to_toml().unwrap();
        assert!(toml_str.contains("[api]"));
        assert!(toml_str.contains("request_timeout_secs = 10"));
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("roundtrip");
        let mut config = VenueApiConfig::with_base_url("http://127.0.0.1:4010/api");
        config.api.request_timeout_secs = 3;

        config.save(Some(path.clone())).unwrap();
        let loaded: VenueApiConfig =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, config);

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_load_rejects_broken_file() {
        let path = temp_config_path("broken");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[api\nbase_url = ").unwrap();

        let err = VenueApiConfig::load(Some(path.clone())).unwrap_err();
        assert!(err.is_config_error());

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_timeouts() {
        let config = VenueApiConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
    }
}
