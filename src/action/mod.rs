//! Actions - what happens when a keyword phrase is heard
//!
//! Every action is built once at startup with its parameters and the
//! collaborators it needs, then run any number of times with the transcript
//! that triggered it. Actions report failures as [`ActionError`]; logging
//! and apologising happen at the dispatcher.
//!
//! Available actions:
//! - [`SpeakFixedText`]: always says the same thing
//! - [`SpeakCurrentTime`]: "It is twenty past four."
//! - [`SpeakShellOutput`]: says what a shell command printed
//! - [`AdjustVolume`]: nudges the master volume and says the new level
//! - [`EchoTranscript`]: "repeat after me ..."
//! - [`PlayAudioFile`]: plays a wav
//! - [`PlayAudioFileWithDecayingOdds`]: plays a wav, with a growing chance of the long version
//! - [`SuggestRandomEpisode`]: picks a random TV episode

mod audio;
mod episode;
mod error;
mod registry;
mod services;
mod shell;
mod speak;
mod time;
mod volume;

pub use audio::{PlayAudioFile, PlayAudioFileWithDecayingOdds};
pub use episode::{
    CACHE_TTL_SECS, EpisodeCache, EpisodeSource, SuggestRandomEpisode, load_or_refresh,
    requested_show,
};
pub use error::{ActionError, FailureKind};
pub use registry::{ActionFactory, ActionRegistry, DEFAULT_CHANCE, VOLUME_CONFIRMATION};
pub use services::Services;
pub use shell::SpeakShellOutput;
pub use speak::{EchoTranscript, SpeakFixedText};
pub use time::{SpeakCurrentTime, time_to_words};
pub use volume::{AdjustVolume, adjusted_level};

/// A unit of behavior bound to one or more keyword phrases.
pub trait Action {
    /// Short type name for logs and listings
    fn name(&self) -> &'static str;

    /// Carry out the action for the transcript that triggered it.
    fn run(&self, transcript: &str) -> Result<(), ActionError>;
}
