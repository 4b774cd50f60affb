//! List command implementation

use std::path::Path;

use anyhow::Result;

/// Print every registered phrase with its action type
pub fn list_command(config_path: Option<&Path>) -> Result<()> {
    let actor = super::assemble(config_path)?;

    println!("Commands ({}):\n", actor.len());
    for entry in actor.entries() {
        println!("  {:<30} {}", entry.phrase, entry.action.name());
    }

    Ok(())
}
