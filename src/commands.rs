//! CLI command definitions for voxact.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Read transcripts from stdin, one per line, and carry them out (default)
    Listen,

    /// Carry out a single transcript
    Run {
        /// The recognized words, e.g. `voxact run what is your purpose`
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// List registered phrases in the order they are tried
    List,

    /// Write a default config.toml and a sample cmd-config
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}
