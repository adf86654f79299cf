use anyhow::Result;
use clap::{Args, Subcommand};

use crate::args::{Cli, CliConfig};
use crate::client::resolve_api_key;
use crate::constants::API_KEY_ENV;
use crate::output::OutputLevel;

#[derive(Args)]
pub struct KeyArgs {
    #[command(subcommand)]
    pub action: KeyAction,
}

#[derive(Subcommand)]
pub enum KeyAction {
    /// Store an API key in the config file
    Set {
        /// API key (if not provided, will read from stdin)
        #[arg(short, long)]
        key: Option<String>,
    },
    /// Remove the stored API key
    Delete,
    /// Show which API key would be used
    Status,
}

impl KeyArgs {
    pub async fn run(
        &self,
        output_level: OutputLevel,
        cli_config: &mut CliConfig,
        cli: &Cli,
    ) -> Result<()> {
        match &self.action {
            KeyAction::Set { key } => {
                let api_key = match key {
                    Some(key) => key.trim().to_string(),
                    None => prompt_for_key()?,
                };

                if api_key.is_empty() {
                    anyhow::bail!("API key cannot be empty");
                }

                cli_config.config.api_key = Some(api_key);
                cli_config.save()?;
                crate::output::success("API key has been saved", output_level);
            }
            KeyAction::Delete => {
                if cli_config.config.api_key.take().is_none() {
                    crate::output::note("No stored API key", output_level);
                    return Ok(());
                }
                cli_config.save()?;
                crate::output::success("API key has been deleted", output_level);
            }
            KeyAction::Status => {
                let env_key = std::env::var(API_KEY_ENV).ok();
                match resolve_api_key(cli.api_key.as_deref(), env_key.as_deref(), &cli_config.config)
                {
                    Some((key, source)) => crate::output::note(
                        &format!(
                            "{}: {}",
                            crate::output::format_label(&source.to_string()),
                            mask_key(&key)
                        ),
                        output_level,
                    ),
                    None => {
                        crate::output::error("No API key configured");
                        crate::output::hint(&format!(
                            "Run {} or set {API_KEY_ENV}",
                            crate::output::format_command("places key set")
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

fn prompt_for_key() -> Result<String> {
    use std::io::{self, Write};

    eprint!("Enter Google Maps API key: ");
    io::stderr().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Show only the last four characters of a key
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{tail}", "*".repeat(chars.len() - 4))
}
