use anyhow::Result;
use clap::Args;
use places_core::{PlaceDetailsRequest, PlacesApi};

use crate::args::{Cli, CliConfig};
use crate::output::OutputLevel;

#[derive(Args)]
pub struct DetailsArgs {
    /// Place ID as returned by search or autocomplete
    pub place_id: String,

    /// Response language code
    #[arg(long)]
    pub language: Option<String>,
}

impl DetailsArgs {
    pub fn to_request(&self, default_language: Option<&str>) -> PlaceDetailsRequest {
        PlaceDetailsRequest {
            place_id: self.place_id.clone(),
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

        let spinner = super::spinner_for("Fetching place details", output_level);
        spinner.start();
        let result = client.place(&request).await;
        spinner.stop();

        crate::output::json(&result?)
    }
}
