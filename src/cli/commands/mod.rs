//! CLI parser and command dispatch.

mod config_cmd;
mod crawl;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "logocrawl")]
#[command(about = "Tournament logo acquisition tool")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output directory (overrides config file)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl the configured root pages and download tournament logos
    Crawl,

    /// Print the resolved configuration
    Config,
}

/// Parse arguments and run the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(output) = cli.output {
        settings.output_dir = output.to_string_lossy().into_owned();
    }

    match cli.command {
        Commands::Crawl => crawl::cmd_crawl(&settings).await,
        Commands::Config => config_cmd::cmd_config(&settings),
    }
}
