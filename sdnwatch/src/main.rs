mod commands;
mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use logging::init_logging;

#[derive(clap::Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub(crate) struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(long, short, default_value = "/etc/sdnwatch.yaml", env = "SDNWATCH_CONFIG")]
    config: PathBuf,
}

#[derive(clap::Subcommand)]
pub(crate) enum Commands {
    /// Validate config file
    Check,
    /// Feed a JSON-lines event log through the observer, one session per copy
    Replay { events: PathBuf },
    /// Parse a passive-mode descriptor (host:[ip]:port)
    ParseEndpoint { descriptor: String },
    /// Parse a batch item description (source => destination)
    ParsePair { description: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();

    match &cli.command {
        Commands::Check => crate::commands::check::command(&cli).await,
        Commands::Replay { events } => crate::commands::replay::command(&cli, events).await,
        Commands::ParseEndpoint { descriptor } => {
            crate::commands::parse::endpoint_command(descriptor)
        }
        Commands::ParsePair { description } => crate::commands::parse::pair_command(description),
    }
}
