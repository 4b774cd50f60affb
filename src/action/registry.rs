//! ActionRegistry - action constructors by type name
//!
//! The command file names actions by type (`VolumeControl`, `WavChance`, ...).
//! This registry maps those names to constructor functions; an unknown name
//! is a plain lookup miss.

use std::collections::HashMap;

use super::{
    Action, ActionError, AdjustVolume, EchoTranscript, EpisodeSource, PlayAudioFile,
    PlayAudioFileWithDecayingOdds, Services, SpeakCurrentTime, SpeakFixedText, SpeakShellOutput,
    SuggestRandomEpisode,
};

/// Builds an action from `(services, keyword, extra)`
pub type ActionFactory =
    fn(&Services, &str, Option<&str>) -> Result<Box<dyn Action>, ActionError>;

/// Default initial chance for decaying-odds audio
pub const DEFAULT_CHANCE: u32 = 10;

/// Confirmation spoken after a volume change
pub const VOLUME_CONFIRMATION: &str = "Volume at {volume} %.";

/// Registry of action constructors
#[derive(Clone)]
pub struct ActionRegistry {
    factories: HashMap<String, ActionFactory>,
}

impl Default for ActionRegistry {
    /// Every built-in action, under its command-file name and its descriptive name
    fn default() -> Self {
        let mut registry = Self::new();
        let builtins: [(&str, &str, ActionFactory); 8] = [
            ("SpeakAction", "SpeakFixedText", speak_fixed_text),
            ("SpeakTime", "SpeakCurrentTime", speak_current_time),
            ("SpeakShellCommandOutput", "SpeakShellOutput", speak_shell_output),
            ("VolumeControl", "AdjustVolume", adjust_volume),
            ("RepeatAfterMe", "EchoTranscript", echo_transcript),
            ("PlayWav", "PlayAudioFile", play_audio_file),
            ("WavChance", "PlayAudioFileWithDecayingOdds", play_decaying_odds),
            ("EpisodeRandom", "SuggestRandomEpisode", suggest_random_episode),
        ];
        for (legacy, name, factory) in builtins {
            registry.register(legacy, factory);
            registry.register(name, factory);
        }
        registry
    }
}

impl ActionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Add (or replace) a constructor
    pub fn register(&mut self, type_name: impl Into<String>, factory: ActionFactory) {
        self.factories.insert(type_name.into(), factory);
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// All known type names, sorted
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Construct an action of type `type_name`
    pub fn create(
        &self,
        type_name: &str,
        services: &Services,
        keyword: &str,
        extra: Option<&str>,
    ) -> Result<Box<dyn Action>, ActionError> {
        let factory = self
            .factories
            .get(type_name)
            .ok_or_else(|| ActionError::UnknownAction(type_name.to_string()))?;
        factory(services, keyword, extra)
    }
}

fn speak_fixed_text(
    s: &Services,
    keyword: &str,
    _extra: Option<&str>,
) -> Result<Box<dyn Action>, ActionError> {
    Ok(Box::new(SpeakFixedText::new(s.responder.clone(), s.tr(keyword))))
}

fn speak_current_time(
    s: &Services,
    _keyword: &str,
    _extra: Option<&str>,
) -> Result<Box<dyn Action>, ActionError> {
    Ok(Box::new(SpeakCurrentTime::new(
        s.responder.clone(),
        s.clock.clone(),
    )))
}

fn speak_shell_output(
    s: &Services,
    keyword: &str,
    extra: Option<&str>,
) -> Result<Box<dyn Action>, ActionError> {
    if keyword.is_empty() {
        return Err(ActionError::invalid("SpeakShellOutput", "empty shell command"));
    }
    Ok(Box::new(SpeakShellOutput::new(
        s.responder.clone(),
        keyword,
        extra.map(|f| s.tr(f)),
    )))
}

fn adjust_volume(
    s: &Services,
    keyword: &str,
    _extra: Option<&str>,
) -> Result<Box<dyn Action>, ActionError> {
    let delta: i32 = keyword.trim().parse().map_err(|_| {
        ActionError::invalid("AdjustVolume", format!("{:?} is not a volume change", keyword))
    })?;
    Ok(Box::new(AdjustVolume::new(
        s.responder.clone(),
        s.mixer.clone(),
        delta,
        s.tr(VOLUME_CONFIRMATION),
    )))
}

fn echo_transcript(
    s: &Services,
    keyword: &str,
    _extra: Option<&str>,
) -> Result<Box<dyn Action>, ActionError> {
    Ok(Box::new(EchoTranscript::new(s.responder.clone(), s.tr(keyword))))
}

fn play_audio_file(
    s: &Services,
    keyword: &str,
    _extra: Option<&str>,
) -> Result<Box<dyn Action>, ActionError> {
    if keyword.is_empty() {
        return Err(ActionError::invalid("PlayAudioFile", "empty audio path"));
    }
    Ok(Box::new(PlayAudioFile::new(s.player.clone(), keyword)))
}

fn play_decaying_odds(
    s: &Services,
    keyword: &str,
    extra: Option<&str>,
) -> Result<Box<dyn Action>, ActionError> {
    if keyword.is_empty() {
        return Err(ActionError::invalid(
            "PlayAudioFileWithDecayingOdds",
            "empty audio name",
        ));
    }
    let initial = match extra {
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(n) if n >= 1 => n,
            _ => {
                return Err(ActionError::invalid(
                    "PlayAudioFileWithDecayingOdds",
                    format!("chance must be a whole number of at least 1, got {:?}", raw),
                ));
            }
        },
        None => DEFAULT_CHANCE,
    };
    Ok(Box::new(PlayAudioFileWithDecayingOdds::new(
        s.player.clone(),
        s.store.clone(),
        s.dice.clone(),
        s.wav_dir.join(keyword),
        initial,
    )))
}

fn suggest_random_episode(
    s: &Services,
    keyword: &str,
    _extra: Option<&str>,
) -> Result<Box<dyn Action>, ActionError> {
    Ok(Box::new(SuggestRandomEpisode::new(
        s,
        EpisodeSource::from_keyword(keyword),
    )))
}
