use std::path::Path;
use std::time::Duration;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError, DEFAULT_SERVER_URL};

/// Environment variable overriding the backend URL
pub const API_URL_ENV: &str = "LENGUA_API_URL";

/// Client configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let mut builder = AppConfig::builder();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            builder = builder.server_url(url);
        }
        let app = builder.build().unwrap_or_else(|e| {
            tracing::warn!("Ignoring {}: {}", API_URL_ENV, e);
            AppConfig::default()
        });
        Self { app }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self { app: builder.build()? })
    }

    /// Load from a TOML file; the env override still applies.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut app = AppConfig::load(path)?;
        if let Ok(url) = std::env::var(API_URL_ENV) {
            app.server_url = url;
            app.validate()?;
        }
        Ok(Self { app })
    }

    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.server_url().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn server_url(&self) -> &str {
        if self.app.server_url.is_empty() {
            DEFAULT_SERVER_URL
        } else {
            &self.app.server_url
        }
    }

    pub fn timeout(&self) -> Duration {
        self.app.timeout
    }

    pub fn connect_timeout(&self) -> Duration {
        self.app.connect_timeout
    }

    pub fn session_path(&self) -> &Path {
        &self.app.session_path
    }
}

impl From<AppConfig> for Config {
    fn from(app: AppConfig) -> Self {
        Self { app }
    }
}
