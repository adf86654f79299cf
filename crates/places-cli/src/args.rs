use anyhow::Context;
use clap::Parser;
use etcetera::BaseStrategy;
use places_core::Location;
use std::path::PathBuf;

use crate::commands::Commands;
use crate::config::Config;
use crate::constants::{API_KEY_ENV, BINARY_NAME};

// Example strings for after_long_help
const CLI_EXAMPLES: &str = r#"EXAMPLES:
  places search "restaurants in Sydney"                 # Text search
  places search pizza -l 40.7128,-74.0060 -r 1500       # Search biased to a location
  places search museum --open-now --max-price 2         # Filter by opening hours and price
  places details ChIJN1t_tDeuEmsRUsoyG83frY4            # Place details
  places photo CnRvAAAA... --max-width 800 -o photo.jpg # Download a photo
  places autocomplete "pizza near New Y"                # Query predictions
  places key set                                        # Store an API key (prompted)
  places info                                           # Show config path and key source"#;

/// Parse a `lat,lng` command-line value into a validated [`Location`]
pub fn parse_location(s: &str) -> Result<Location, String> {
    s.parse::<Location>().map_err(|e| e.to_string())
}

pub struct CliConfig {
    pub config_base_path: PathBuf,
    pub config: Config,
}

impl CliConfig {
    pub fn load() -> anyhow::Result<Self> {
        let strategy =
            etcetera::choose_base_strategy().context("Could not determine config directory")?;
        let config_base_path = strategy.config_dir().join(BINARY_NAME);
        let config = Config::load(&config_base_path).with_context(|| {
            format!(
                "Failed to load config from {}",
                config_base_path.display()
            )
        })?;

        Ok(Self {
            config_base_path,
            config,
        })
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.config.save(&self.config_base_path)
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "A CLI tool for the Google Places API")]
#[command(name = BINARY_NAME)]
#[command(after_long_help = CLI_EXAMPLES)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API key (overrides the stored key)
    #[arg(long, env = API_KEY_ENV, hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// API root URL (defaults to https://maps.googleapis.com)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Verbose output (debug logging)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Quiet output (only show errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}
