//! Speech output boundary.
//!
//! The host speech pipeline owns the text-to-speech engine. The core only
//! ever hands it a finished sentence through [`Responder::say`].

use std::process::{Command, Stdio};
use std::sync::Arc;

/// Something that turns text into audible (or at least visible) output.
pub trait Responder: Send + Sync {
    /// Speak `text`. Output failures are the responder's own business.
    fn say(&self, text: &str);
}

/// Prints every response to stdout. Used when no TTS program is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleResponder;

impl Responder for ConsoleResponder {
    fn say(&self, text: &str) {
        println!("{}", text);
    }
}

/// Runs an external TTS program with the text appended as the last argument
///
/// e.g. `["espeak", "-s", "140"]` speaks via `espeak -s 140 "<text>"`.
#[derive(Debug, Clone)]
pub struct CommandResponder {
    program: String,
    args: Vec<String>,
}

impl CommandResponder {
    /// Build from a command line split on whitespace. Returns `None` when empty.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(String::from);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Responder for CommandResponder {
    fn say(&self, text: &str) {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status();

        match status {
            Ok(s) if s.success() => {}
            Ok(s) => tracing::warn!("{} exited with {} while speaking", self.program, s),
            Err(e) => tracing::warn!("Failed to run {}: {}", self.program, e),
        }
    }
}

/// Pick the responder for a configured speech command (empty = console).
pub fn responder_for(speech_command: &str) -> Arc<dyn Responder> {
    match CommandResponder::from_command_line(speech_command) {
        Some(r) => Arc::new(r),
        None => Arc::new(ConsoleResponder),
    }
}
