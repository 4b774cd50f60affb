//! Actions that speak text taken from their parameters or the transcript.

use std::sync::Arc;

use super::{Action, ActionError};
use crate::responder::Responder;

/// Says a fixed response, whatever was said to trigger it
pub struct SpeakFixedText {
    responder: Arc<dyn Responder>,
    words: String,
}

impl SpeakFixedText {
    pub fn new(responder: Arc<dyn Responder>, words: impl Into<String>) -> Self {
        Self {
            responder,
            words: words.into(),
        }
    }
}

impl Action for SpeakFixedText {
    fn name(&self) -> &'static str {
        "SpeakFixedText"
    }

    fn run(&self, _transcript: &str) -> Result<(), ActionError> {
        self.responder.say(&self.words);
        Ok(())
    }
}

/// Repeats the transcript with the triggering keyword taken out.
///
/// Only the first occurrence of the keyword is removed and nothing is
/// trimmed, so "repeat after me hello" speaks " hello".
pub struct EchoTranscript {
    responder: Arc<dyn Responder>,
    keyword: String,
}

impl EchoTranscript {
    pub fn new(responder: Arc<dyn Responder>, keyword: impl Into<String>) -> Self {
        Self {
            responder,
            keyword: keyword.into(),
        }
    }
}

impl Action for EchoTranscript {
    fn name(&self) -> &'static str {
        "EchoTranscript"
    }

    fn run(&self, transcript: &str) -> Result<(), ActionError> {
        let to_repeat = transcript.replacen(&self.keyword, "", 1);
        self.responder.say(&to_repeat);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingResponder;

    #[test]
    fn test_fixed_text_ignores_transcript() {
        let responder = Arc::new(RecordingResponder::default());
        let action = SpeakFixedText::new(responder.clone(), "I pass butter");

        action.run("what is your purpose").unwrap();
        action.run("anything at all").unwrap();

        assert_eq!(responder.said(), vec!["I pass butter", "I pass butter"]);
    }

    #[test]
    fn test_echo_removes_first_keyword_only() {
        let responder = Arc::new(RecordingResponder::default());
        let action = EchoTranscript::new(responder.clone(), "repeat after me");

        action
            .run("repeat after me say repeat after me twice")
            .unwrap();

        assert_eq!(responder.said(), vec![" say repeat after me twice"]);
    }

    #[test]
    fn test_echo_without_keyword_repeats_everything() {
        let responder = Arc::new(RecordingResponder::default());
        let action = EchoTranscript::new(responder.clone(), "repeat after me");

        action.run("hello there").unwrap();

        assert_eq!(responder.said(), vec!["hello there"]);
    }
}
