use crate::error::PlacesError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Default root for every Places endpoint path
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "GOOGLE_MAPS_BASE_URL";

/// Configuration for [`PlacesClient`](crate::client::PlacesClient)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub timeout_seconds: u64,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl PlacesConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            timeout_seconds: 30,
            headers: HashMap::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), PlacesError> {
        if self.api_key.trim().is_empty() {
            return Err(PlacesError::configuration("API key is required"));
        }

        let base_url = self.base_url();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(PlacesError::configuration(
                "Base URL must be a valid HTTP/HTTPS URL",
            ));
        }

        if self.timeout_seconds == 0 {
            return Err(PlacesError::configuration(
                "Timeout must be at least one second",
            ));
        }

        Ok(())
    }
}

/// Builds a [`PlacesConfig`] from environment variables
pub struct ConfigBuilder;

impl ConfigBuilder {
    /// Read `GOOGLE_MAPS_API_KEY` and the optional `GOOGLE_MAPS_BASE_URL`
    pub fn from_env() -> Result<PlacesConfig, PlacesError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            PlacesError::configuration(format!("{API_KEY_ENV} environment variable not set"))
        })?;

        let mut config = PlacesConfig::new(api_key);

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config = config.with_base_url(base_url);
        }

        config.validate()?;
        Ok(config)
    }
}
