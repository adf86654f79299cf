// Binary entry point for the places CLI

mod args;
mod client;
mod commands;
mod config;
mod constants;
mod output;
mod spinner;

use anyhow::Result;
use args::{Cli, CliConfig};
use clap::{CommandFactory, Parser};
use commands::Commands;
use output::OutputLevel;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        output::error(&format!("{e:#}"));
        if let Some(hint) = output::error_hint(&e) {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}

/// Parse CLI arguments, load configuration and dispatch to the requested
/// sub-command.
pub async fn run() -> Result<()> {
    // Enable shell completion generation when the user sets COMPLETE=fish etc.
    clap_complete::CompleteEnv::with_factory(Cli::command).complete();
    let cli = Cli::parse();

    let output_level = OutputLevel::from_flags(cli.quiet, cli.verbose);
    output::init_logging(output_level);

    let mut cli_config = CliConfig::load()?;

    match &cli.command {
        Commands::Search(args) => args.run(output_level, &cli_config, &cli).await?,
        Commands::Details(args) => args.run(output_level, &cli_config, &cli).await?,
        Commands::Photo(args) => args.run(output_level, &cli_config, &cli).await?,
        Commands::Autocomplete(args) => args.run(output_level, &cli_config, &cli).await?,
        Commands::Key(args) => args.run(output_level, &mut cli_config, &cli).await?,
        Commands::Info(args) => args.run(output_level, &cli_config, &cli).await?,
        Commands::Completions(args) => args.run().await?,
    }

    Ok(())
}
