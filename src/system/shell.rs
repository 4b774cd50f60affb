//! Shell command execution.

use std::process::{Command, ExitStatus, Stdio};

/// Failure of an external process
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    Status {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Run `command` through `sh -c` and return its trimmed stdout.
///
/// A non-zero exit status is an error; stderr is captured for the message.
pub fn run_shell(command: &str) -> Result<String, ShellError> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| ShellError::Spawn {
            command: command.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(ShellError::Status {
            command: command.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
