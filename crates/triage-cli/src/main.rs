mod catalog;
mod process;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::catalog::CatalogCommands;

#[derive(Debug, Parser)]
#[command(name = "triage-cli")]
#[command(about = "Emergency message triage command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Triage one message and print the result as JSON
    Process {
        /// Message text (read from --file or stdin when omitted)
        #[arg(conflicts_with = "file")]
        text: Option<String>,
        /// Read the message text from a file
        #[arg(long)]
        file: Option<PathBuf>,
        /// Message identifier echoed in the result
        #[arg(long)]
        id: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List lexicon keywords, heaviest first
    Lexicon,
    /// Inspect triage catalog files
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = std::env::var("TRIAGE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries command output; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    run(cli.command).await
}

/// Dispatch one command. Environment config is loaded only by commands that
/// read it.
async fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Process {
            text,
            file,
            id,
            pretty,
        } => {
            let config = triage_core::load_app_config()?;
            let input = process::MessageInput::from_args(text, file);
            process::run_process(&config, input, id, pretty).await?;
        }
        Commands::Lexicon => catalog::run_lexicon(&triage_core::load_app_config()?)?,
        Commands::Catalog { command } => match command {
            CatalogCommands::Validate { path } => {
                let path = catalog::resolve_validate_path(path)?;
                catalog::run_validate(&path)?;
            }
            CatalogCommands::Export => catalog::run_export(&triage_core::load_app_config()?)?,
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests;
