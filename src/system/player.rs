//! Audio file playback.

use std::path::Path;
use std::process::{Command, Stdio};

use super::shell::ShellError;

/// Plays an audio file to completion.
pub trait AudioPlayer: Send + Sync {
    fn play(&self, path: &Path) -> Result<(), ShellError>;
}

/// Plays through an external player program (`aplay` by default).
#[derive(Debug, Clone)]
pub struct AplayPlayer {
    program: String,
}

impl Default for AplayPlayer {
    fn default() -> Self {
        Self::new("aplay")
    }
}

impl AplayPlayer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl AudioPlayer for AplayPlayer {
    fn play(&self, path: &Path) -> Result<(), ShellError> {
        let command = format!("{} {}", self.program, path.display());
        let output = Command::new(&self.program)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .output()
            .map_err(|source| ShellError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ShellError::Status {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
