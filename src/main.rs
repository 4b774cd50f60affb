use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod cli;
mod commands;

use commands::Commands;

#[derive(Parser)]
#[command(name = "voxact")]
#[command(about = "Keyword-triggered voice commands for a small voice assistant")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.voxact/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr, so spoken output on stdout stays clean)
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Run { words }) => {
            cli::run::run_command(config_path, &words.join(" "))?;
        }
        Some(Commands::List) => {
            cli::list::list_command(config_path)?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(config_path, force)?;
        }
        Some(Commands::Listen) | None => {
            cli::listen::listen_command(config_path)?;
        }
    }

    Ok(())
}
