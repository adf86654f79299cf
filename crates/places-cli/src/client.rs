use anyhow::{Context, Result};
use places_core::{LoggingTransport, PlacesClient, PlacesConfig};
use strum_macros::Display;

use crate::args::{Cli, CliConfig};
use crate::config::Config;
use crate::constants::{API_KEY_ENV, BASE_URL_ENV};

/// Where the API key in use came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum KeySource {
    #[strum(serialize = "--api-key flag")]
    Flag,
    #[strum(serialize = "environment (GOOGLE_MAPS_API_KEY)")]
    Env,
    #[strum(serialize = "config file")]
    Config,
}

/// Pick the API key: command line or environment first, then the config file.
///
/// clap folds the environment variable into `--api-key`, so `env_value` is
/// only used to tell the two apart.
pub fn resolve_api_key(
    cli_value: Option<&str>,
    env_value: Option<&str>,
    config: &Config,
) -> Option<(String, KeySource)> {
    if let Some(key) = cli_value.map(str::trim).filter(|k| !k.is_empty()) {
        let source = if env_value.map(str::trim) == Some(key) {
            KeySource::Env
        } else {
            KeySource::Flag
        };
        return Some((key.to_string(), source));
    }

    config
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|k| (k.to_string(), KeySource::Config))
}

/// Pick the API root: `--base-url`, then `GOOGLE_MAPS_BASE_URL`, then the config file
pub fn resolve_base_url(
    cli_value: Option<&str>,
    env_value: Option<&str>,
    config: &Config,
) -> Option<String> {
    cli_value
        .or(env_value)
        .or(config.base_url.as_deref())
        .filter(|url| !url.trim().is_empty())
        .map(|url| url.trim().to_string())
}

pub fn places_config(cli: &Cli, cli_config: &CliConfig) -> Result<PlacesConfig> {
    let env_key = std::env::var(API_KEY_ENV).ok();
    let (api_key, source) = resolve_api_key(
        cli.api_key.as_deref(),
        env_key.as_deref(),
        &cli_config.config,
    )
    .with_context(|| {
        format!(
            "No API key found. Pass --api-key, set {API_KEY_ENV}, or run `places key set`"
        )
    })?;
    tracing::debug!("using API key from {source}");

    let env_base_url = std::env::var(BASE_URL_ENV).ok();
    let mut config =
        PlacesConfig::new(api_key).with_timeout(cli_config.config.timeout_seconds);
    if let Some(base_url) = resolve_base_url(
        cli.base_url.as_deref(),
        env_base_url.as_deref(),
        &cli_config.config,
    ) {
        config = config.with_base_url(base_url);
    }

    Ok(config)
}

/// Build the transport used by every command
pub fn from_cli(cli: &Cli, cli_config: &CliConfig) -> Result<LoggingTransport<PlacesClient>> {
    let config = places_config(cli, cli_config)?;
    let client = PlacesClient::new(config)?;
    Ok(LoggingTransport::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: &str) -> Config {
        Config {
            api_key: Some(key.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_flag_wins_over_config() {
        let resolved = resolve_api_key(Some("flag"), None, &config_with_key("stored"));
        assert_eq!(resolved, Some(("flag".to_string(), KeySource::Flag)));
    }

    #[test]
    fn test_env_source_detected() {
        let resolved = resolve_api_key(Some("envkey"), Some("envkey"), &config_with_key("stored"));
        assert_eq!(resolved, Some(("envkey".to_string(), KeySource::Env)));
    }

    #[test]
    fn test_config_fallback() {
        let resolved = resolve_api_key(None, None, &config_with_key("stored"));
        assert_eq!(resolved, Some(("stored".to_string(), KeySource::Config)));

        // blank values count as missing
        assert_eq!(resolve_api_key(Some("  "), None, &config_with_key("")), None);
    }

    #[test]
    fn test_base_url_precedence() {
        let config = Config {
            base_url: Some("http://from-config".to_string()),
            ..Default::default()
        };

        assert_eq!(
            resolve_base_url(Some("http://flag"), Some("http://env"), &config).as_deref(),
            Some("http://flag")
        );
        assert_eq!(
            resolve_base_url(None, Some("http://env"), &config).as_deref(),
            Some("http://env")
        );
        assert_eq!(
            resolve_base_url(None, None, &config).as_deref(),
            Some("http://from-config")
        );
        assert_eq!(resolve_base_url(None, None, &Config::default()), None);
    }

    #[test]
    fn test_key_source_display() {
        assert_eq!(KeySource::Config.to_string(), "config file");
        assert!(KeySource::Env.to_string().contains("GOOGLE_MAPS_API_KEY"));
    }
}
