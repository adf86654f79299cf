use anyhow::Result;
use clap::Args;
use places_core::{Location, PlacesApi, TextSearchRequest};

use crate::args::{Cli, CliConfig, parse_location};
use crate::output::OutputLevel;

#[derive(Args)]
pub struct SearchArgs {
    /// Text query, e.g. "restaurants in Sydney"
    #[arg(required_unless_present = "page_token")]
    pub query: Option<String>,

    /// Bias results around this point ("lat,lng")
    #[arg(short, long, value_parser = parse_location)]
    pub location: Option<Location>,

    /// Bias radius in meters
    #[arg(short, long)]
    pub radius: Option<u32>,

    /// Response language code
    #[arg(long)]
    pub language: Option<String>,

    /// Lowest price level (0 most affordable, 4 most expensive)
    #[arg(long)]
    pub min_price: Option<u8>,

    /// Highest price level (0 most affordable, 4 most expensive)
    #[arg(long)]
    pub max_price: Option<u8>,

    /// Only places open right now
    #[arg(long)]
    pub open_now: bool,

    /// Restrict to a place type (repeatable)
    #[arg(long = "type", value_name = "TYPE")]
    pub types: Vec<String>,

    /// Fetch the next page of a previous search
    #[arg(long)]
    pub page_token: Option<String>,
}

impl SearchArgs {
    pub fn to_request(&self, default_language: Option<&str>) -> TextSearchRequest {
        TextSearchRequest {
            query: self.query.clone().unwrap_or_default(),
            location: self.location.clone(),
            radius: self.radius,
            language: self
                .language
                .clone()
                .or_else(|| default_language.map(str::to_string)),
            min_price: self.min_price,
            max_price: self.max_price,
            open_now: self.open_now,
            types: self.types.clone(),
            page_token: self.page_token.clone(),
        }
    }

    pub async fn run(
        &self,
        output_level: OutputLevel,
        cli_config: &CliConfig,
        cli: &Cli,
    ) -> Result<()> {
        let client = crate::client::from_cli(cli, cli_config)?;
        let request = self.to_request(cli_config.config.language.as_deref());

        let spinner = super::spinner_for("Searching", output_level);
        spinner.start();
        let result = client.places(&request).await;
        spinner.stop();

        let envelope = result?;
        crate::output::json(&envelope)?;

        if let Some(token) = envelope.get("next_page_token").and_then(|t| t.as_str()) {
            crate::output::note(
                &format!(
                    "More results available: {}",
                    crate::output::format_command(&format!("places search --page-token {token}"))
                ),
                output_level,
            );
        }
        Ok(())
    }
}
