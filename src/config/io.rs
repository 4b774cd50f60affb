//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::Config;

/// Sample command file written by `voxact init`
pub const SAMPLE_COMMANDS: &str = "\
# Extra voice commands, one per line:
#
#   PHRASE=ActionType,keyword[,extra]
#
# e.g.
#   parrot=SpeakAction,Norwegian Blue
#   moon men=WavChance,moonmen,10
#   ding=PlayWav,/usr/share/sounds/alsa/Front_Center.wav
#   uptime=SpeakShellCommandOutput,uptime -p,I do not know
#   quieter=VolumeControl,-5
#   say=RepeatAfterMe,say
#   tv time=EpisodeRandom,episode
#
# Lines starting with # are ignored.
";

impl Config {
    /// Get the global config directory path (~/.voxact/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".voxact")
    }

    /// Get the global config file path (~/.voxact/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load `path`, or the global config when `None`.
    ///
    /// A missing file is not an error: defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::global_config_path);

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    /// Save configuration with an atomic write (temp file + rename).
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        write_atomic(path, &content)
    }

    /// Write a default config to `path`, plus a sample command file next to
    /// the configured `cmd_config` if none exists yet.
    ///
    /// Refuses to overwrite an existing config unless `force` is set.
    pub fn write_default(path: &Path, force: bool) -> Result<Self> {
        if path.exists() && !force {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                path.display()
            );
        }

        let config = Self::default();
        config.save_to_file(path)?;
        tracing::info!("Created {}", path.display());

        let commands = &config.settings.cmd_config;
        if !commands.exists() {
            write_atomic(commands, SAMPLE_COMMANDS)?;
            tracing::info!("Created {}", commands.display());
        }

        Ok(config)
    }
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let temp_path = path.with_extension("tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    temp_file
        .sync_all()
        .with_context(|| format!("Failed to sync {}", path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename {}", temp_path.display()))?;

    Ok(())
}
