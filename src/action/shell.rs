//! Speaking the output of a shell command.

use std::sync::Arc;

use super::{Action, ActionError};
use crate::responder::Responder;
use crate::system::run_shell;

/// Runs a shell command and speaks what it printed.
///
/// Empty output speaks the fallback phrase, if there is one. A non-zero exit
/// aborts without speaking.
pub struct SpeakShellOutput {
    responder: Arc<dyn Responder>,
    command: String,
    fallback: Option<String>,
}

impl SpeakShellOutput {
    pub fn new(
        responder: Arc<dyn Responder>,
        command: impl Into<String>,
        fallback: Option<String>,
    ) -> Self {
        Self {
            responder,
            command: command.into(),
            fallback: fallback.filter(|f| !f.is_empty()),
        }
    }
}

impl Action for SpeakShellOutput {
    fn name(&self) -> &'static str {
        "SpeakShellOutput"
    }

    fn run(&self, _transcript: &str) -> Result<(), ActionError> {
        let output = run_shell(&self.command)?;

        if !output.is_empty() {
            self.responder.say(&output);
        } else if let Some(ref fallback) = self.fallback {
            self.responder.say(fallback);
        }

        Ok(())
    }
}
