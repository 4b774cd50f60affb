//! Init command implementation

use std::path::Path;

use anyhow::Result;

use voxact::config::Config;

/// Write the default config (and sample command file)
pub fn init_command(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    let config = Config::write_default(&path, force)?;

    println!("Created {}", path.display());
    println!("Commands are read from {}", config.settings.cmd_config.display());
    if config.tvdb.api_key.is_empty() {
        println!("Set [tvdb] api_key to enable episode suggestions.");
    }

    Ok(())
}
