//! Dispatcher - keyword phrases to actions
//!
//! Holds `(phrase, action)` entries in registration order. A transcript runs
//! **every** entry whose phrase it contains, so overlapping phrases such as
//! "after me" and "repeat after me" both fire. Matching is plain,
//! case-sensitive substring containment; callers lower-case transcripts.
//!
//! The dispatcher is the failure boundary for actions: errors are logged
//! here (with a spoken apology where the error carries one) and panics are
//! contained, so one action can never stop the ones after it.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use crate::action::Action;
use crate::responder::Responder;

/// One registered phrase
pub struct KeywordEntry {
    pub phrase: String,
    pub action: Box<dyn Action>,
}

/// Outcome of one dispatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Entries whose phrase matched
    pub matched: usize,
    /// Of those, how many failed
    pub failed: usize,
}

pub struct Dispatcher {
    entries: Vec<KeywordEntry>,
    responder: Arc<dyn Responder>,
}

impl Dispatcher {
    /// `responder` is used to speak apologies for failed actions.
    pub fn new(responder: Arc<dyn Responder>) -> Self {
        Self {
            entries: Vec::new(),
            responder,
        }
    }

    /// Add an entry after all existing ones
    pub fn register(&mut self, phrase: impl Into<String>, action: Box<dyn Action>) {
        let phrase = phrase.into();
        tracing::debug!("Registered {:?} -> {}", phrase, action.name());
        self.entries.push(KeywordEntry { phrase, action });
    }

    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that `transcript` would trigger, in registration order
    pub fn matching<'a>(&'a self, transcript: &'a str) -> impl Iterator<Item = &'a KeywordEntry> {
        self.entries
            .iter()
            .filter(move |e| transcript.contains(e.phrase.as_str()))
    }

    /// Run every matching action in registration order.
    ///
    /// Never fails: each action's error or panic is logged and the scan goes on.
    pub fn dispatch(&self, transcript: &str) -> DispatchSummary {
        let mut summary = DispatchSummary::default();

        for entry in self.matching(transcript) {
            summary.matched += 1;
            tracing::debug!("{:?} matched {}", entry.phrase, entry.action.name());

            match catch_unwind(AssertUnwindSafe(|| entry.action.run(transcript))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    summary.failed += 1;
                    tracing::error!(
                        "{} ({:?}) failed [{}]: {}",
                        entry.action.name(),
                        entry.phrase,
                        e.kind(),
                        e
                    );
                    if let Some(apology) = e.apology() {
                        self.responder.say(apology);
                    }
                }
                Err(panic) => {
                    summary.failed += 1;
                    let message = panic
                        .downcast_ref::<&str>()
                        .map(|s| s.to_string())
                        .or_else(|| panic.downcast_ref::<String>().cloned())
                        .unwrap_or_else(|| "unknown panic".to_string());
                    tracing::error!(
                        "{} ({:?}) panicked: {}",
                        entry.action.name(),
                        entry.phrase,
                        message
                    );
                }
            }
        }

        if summary.matched == 0 {
            tracing::debug!("No command matched {:?}", transcript);
        }
        summary
    }
}
