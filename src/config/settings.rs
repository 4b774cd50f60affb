//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalogue::DEFAULT_TVDB_URL;

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Line-oriented command file (`PHRASE=ActionType,keyword[,extra]`)
    #[serde(default = "default_cmd_config")]
    pub cmd_config: PathBuf,

    /// Where chance counters and episode caches are kept
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,

    /// Directory of the decaying-odds wavs (`<name>.wav`, `<name>-full.wav`)
    #[serde(default = "default_wav_dir")]
    pub wav_dir: PathBuf,

    /// TTS program and arguments; the text is passed as the last argument.
    /// Empty prints responses to stdout instead.
    #[serde(default)]
    pub speech_command: String,

    /// Program used to play audio files
    #[serde(default = "default_audio_player")]
    pub audio_player: String,

    /// Register the small-talk commands (jokes, greetings, the time)
    #[serde(default = "default_true")]
    pub cloud_speech_commands: bool,

    /// Optional TOML table of `"english phrase" = "translation"`
    #[serde(default)]
    pub translations: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cmd_config: default_cmd_config(),
            state_dir: default_state_dir(),
            wav_dir: default_wav_dir(),
            speech_command: String::new(),
            audio_player: default_audio_player(),
            cloud_speech_commands: true,
            translations: None,
        }
    }
}

fn default_cmd_config() -> PathBuf {
    PathBuf::from("cmd-config")
}

fn default_state_dir() -> PathBuf {
    super::Config::global_config_dir().join("state")
}

fn default_wav_dir() -> PathBuf {
    PathBuf::from("wavs/chance")
}

fn default_audio_player() -> String {
    "aplay".to_string()
}

fn default_true() -> bool {
    true
}

/// TV catalogue access
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TvdbSettings {
    /// API key from thetvdb.com; episode suggestions apologise without one
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_tvdb_url")]
    pub base_url: String,
}

impl Default for TvdbSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_tvdb_url(),
        }
    }
}

fn default_tvdb_url() -> String {
    DEFAULT_TVDB_URL.to_string()
}
