//! Run command implementation

use std::path::Path;

use anyhow::Result;

/// Dispatch one transcript
pub fn run_command(config_path: Option<&Path>, transcript: &str) -> Result<()> {
    let actor = super::assemble(config_path)?;
    let summary = actor.dispatch(&transcript.trim().to_lowercase());

    if summary.matched == 0 {
        eprintln!("No command matched.");
    }
    Ok(())
}
