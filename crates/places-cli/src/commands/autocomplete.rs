use anyhow::Result;
use clap::Args;
use places_core::{AutocompleteRequest, Location, PlacesApi};
use serde_json::Value;

use crate::args::{Cli, CliConfig, parse_location};
use crate::output::OutputLevel;

#[derive(Args)]
pub struct AutocompleteArgs {
    /// Partial text to complete
    pub input: String,

    /// Character position in the input the service should complete from
    #[arg(long)]
    pub offset: Option<u32>,

    /// Bias predictions around this point ("lat,lng")
    #[arg(short, long, value_parser = parse_location)]
    pub location: Option<Location>,

    /// Bias radius in meters
    #[arg(short, long)]
    pub radius: Option<u32>,

    /// Response language code
    #[arg(long)]
    pub language: Option<String>,

    /// Print the full prediction objects as JSON
    #[arg(long)]
    pub json: bool,
}

impl AutocompleteArgs {
    pub fn to_request(&self, default_language: Option<&str>) -> AutocompleteRequest {
        AutocompleteRequest {
            input: self.input.clone(),
            offset: self.offset,
            location: self.location.clone(),
            radius: self.radius,
            language: self
                .language
                .clone()
                .or_else(|| default_language.map(str::to_string)),
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

        let spinner = super::spinner_for("Completing", output_level);
        spinner.start();
        let result = client.places_autocomplete(&request).await;
        spinner.stop();

        let predictions = result?;
        if self.json {
            return crate::output::json(&Value::Array(predictions));
        }

        if predictions.is_empty() {
            crate::output::note("No predictions", output_level);
        }
        for description in descriptions(&predictions) {
            println!("{description}");
        }
        Ok(())
    }
}

/// The human-readable `description` of each prediction, skipping any without one
fn descriptions(predictions: &[Value]) -> impl Iterator<Item = &str> {
    predictions
        .iter()
        .filter_map(|p| p.get("description").and_then(Value::as_str))
}
