use anyhow::Result;
use clap::Args;

use crate::{
    args::{Cli, CliConfig},
    client::{resolve_api_key, resolve_base_url},
    commands::env_var_status,
    constants::*,
    output::OutputLevel,
};

#[derive(Args)]
pub struct InfoArgs {
    // Info command has no arguments
}

impl InfoArgs {
    pub async fn run(
        &self,
        output_level: OutputLevel,
        cli_config: &CliConfig,
        cli: &Cli,
    ) -> Result<()> {
        let config_path = cli_config.config_base_path.join(CONFIG_FILE_NAME);
        crate::output::note(
            &format!("config file: {}", config_path.display()),
            output_level,
        );

        crate::output::heading("\nEnv Vars:", output_level);
        for var in [API_KEY_ENV, BASE_URL_ENV] {
            crate::output::note(&format!("{var} = {}", env_var_status(var)), output_level);
        }

        crate::output::heading("\nResolved:", output_level);
        let env_key = std::env::var(API_KEY_ENV).ok();
        let key_source = resolve_api_key(
            cli.api_key.as_deref(),
            env_key.as_deref(),
            &cli_config.config,
        )
        .map(|(_, source)| source.to_string())
        .unwrap_or_else(|| "None".to_string());
        crate::output::note(&format!("api key: {key_source}"), output_level);

        let env_base_url = std::env::var(BASE_URL_ENV).ok();
        let base_url = resolve_base_url(
            cli.base_url.as_deref(),
            env_base_url.as_deref(),
            &cli_config.config,
        )
        .unwrap_or_else(|| places_core::config::DEFAULT_BASE_URL.to_string());
        crate::output::note(&format!("base url: {base_url}"), output_level);
        crate::output::note(
            &format!("timeout: {}s", cli_config.config.timeout_seconds),
            output_level,
        );
        if let Some(language) = &cli_config.config.language {
            crate::output::note(&format!("language: {language}"), output_level);
        }

        crate::output::heading("\nVersion info:", output_level);
        crate::output::note(
            &format!("version: {}", env!("CARGO_PKG_VERSION")),
            output_level,
        );

        Ok(())
    }
}
