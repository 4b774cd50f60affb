//! Configuration loading and management
//!
//! Two files configure the assistant:
//! - `config.toml` ([`Config`]): paths, speech output, catalogue access, favorite shows
//! - `cmd-config` ([`load_commands`]): extra voice commands, one per line

mod commands;
mod i18n;
mod io;
mod settings;

pub use commands::{
    CommandLine, CommandLineError, LoadFailure, LoadReport, load_commands, load_commands_from_str,
    parse_line,
};
pub use i18n::Translator;
pub use settings::{Settings, TvdbSettings};

use serde::{Deserialize, Serialize};

use crate::catalogue::Show;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,

    /// Catalogue access for episode suggestions
    #[serde(default)]
    pub tvdb: TvdbSettings,

    /// Shows picked from by "random episode"
    #[serde(default = "default_favorites")]
    pub favorites: Vec<Show>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            tvdb: TvdbSettings::default(),
            favorites: default_favorites(),
        }
    }
}

fn default_favorites() -> Vec<Show> {
    vec![
        Show::new("Futurama", 73871),
        Show::new("Rick and Morty", 275274),
    ]
}
