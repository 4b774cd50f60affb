//! Listen command implementation

use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Feed stdin lines to the dispatcher until EOF.
///
/// Lines are lower-cased the way a recognizer delivers them.
pub fn listen_command(config_path: Option<&Path>) -> Result<()> {
    let actor = super::assemble(config_path)?;
    info!("Listening for transcripts on stdin");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read transcript")?;
        let transcript = line.trim().to_lowercase();
        if transcript.is_empty() {
            continue;
        }
        actor.dispatch(&transcript);
    }

    Ok(())
}
