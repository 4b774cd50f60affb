//! System volume control.

use once_cell::sync::Lazy;
use regex::Regex;

use super::shell::{ShellError, run_shell};

/// Reads and sets the master output volume.
pub trait Mixer: Send + Sync {
    /// Current volume as reported by the mixer, unparsed.
    fn read_level(&self) -> Result<String, ShellError>;

    /// Set the volume to `percent` (0-100).
    fn set_level(&self, percent: u8) -> Result<(), ShellError>;
}

static FRONT_LEFT: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"Front Left:.*\[(\d+)%\]").ok());

/// ALSA `amixer` on the `Master` control
#[derive(Debug, Default, Clone, Copy)]
pub struct AmixerMixer;

impl AmixerMixer {
    /// Extract the front-left percentage from `amixer get` output.
    ///
    /// Falls back to the raw (trimmed) output when the line is missing, which
    /// the caller will then fail to parse as a number.
    pub fn extract_level(output: &str) -> String {
        FRONT_LEFT
            .as_ref()
            .and_then(|re| re.captures(output))
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| output.trim().to_string())
    }
}

impl Mixer for AmixerMixer {
    fn read_level(&self) -> Result<String, ShellError> {
        let output = run_shell("amixer get Master")?;
        Ok(Self::extract_level(&output))
    }

    fn set_level(&self, percent: u8) -> Result<(), ShellError> {
        run_shell(&format!("amixer -q set Master {}%", percent)).map(|_| ())
    }
}
