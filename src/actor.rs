//! Assembling the dispatcher at startup
//!
//! Built-in commands come first, then the user's command file, then the
//! late built-ins. Order matters: every matching entry runs, in this order.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::action::{
    ActionRegistry, AdjustVolume, EchoTranscript, EpisodeSource, Services, SpeakCurrentTime,
    SpeakFixedText, SpeakShellOutput, SuggestRandomEpisode, VOLUME_CONFIRMATION,
};
use crate::catalogue::TvdbClient;
use crate::config::{Config, Translator, load_commands};
use crate::dispatcher::Dispatcher;
use crate::responder::Responder;
use crate::store::FileStore;
use crate::system::{AmixerMixer, AplayPlayer, SystemClock, ThreadDice};

const IP_ADDRESS_COMMAND: &str = "ip -4 route get 1 | head -1 | cut -d' ' -f8";

const SMALL_TALK: [(&str, &str); 9] = [
    ("alexa", "We've been friends since we were both starter projects"),
    (
        "beatbox",
        "pv zk pv pv zk pv zk kz zk pv pv pv zk pv zk zk pzk pzk pvzkpkzvpvzk kkkkkk bsch",
    ),
    ("clap", "clap clap"),
    ("google home", "She taught me everything I know."),
    ("hello", "hello to you too"),
    (
        "tell me a joke",
        "What do you call an alligator in a vest? An investigator.",
    ),
    (
        "three laws of robotics",
        "The laws of robotics are
0: A robot may not injure a human being or, through inaction, allow a human
being to come to harm.
1: A robot must obey orders given it by human beings except where such orders
would conflict with the First Law.
2: A robot must protect its own existence as long as such protection does not
conflict with the First or Second Law.",
    ),
    (
        "where are you from",
        "A galaxy far, far, just kidding. I'm from Seattle.",
    ),
    ("your name", "A machine has no name"),
];

/// Real collaborators for `config`, speaking through `responder`
pub fn build_services(config: &Config, responder: Arc<dyn Responder>) -> Result<Services> {
    let translator = match config.settings.translations {
        Some(ref path) => Translator::from_file(path)?,
        None => Translator::default(),
    };

    Ok(Services {
        responder,
        store: Arc::new(FileStore::new(config.settings.state_dir.clone())),
        catalogue: Arc::new(TvdbClient::with_url(
            config.tvdb.base_url.clone(),
            config.tvdb.api_key.clone(),
        )),
        mixer: Arc::new(AmixerMixer),
        player: Arc::new(AplayPlayer::new(config.settings.audio_player.clone())),
        dice: Arc::new(ThreadDice),
        clock: Arc::new(SystemClock),
        translator: Arc::new(translator),
        wav_dir: config.settings.wav_dir.clone(),
        favorites: config.favorites.clone(),
    })
}

/// Create the dispatcher that carries out the user's commands.
///
/// `commands` is the command file; a missing or unreadable one is logged
/// and skipped.
pub fn make_actor(
    services: &Services,
    registry: &ActionRegistry,
    commands: Option<PathBuf>,
    small_talk: bool,
) -> Dispatcher {
    let s = services;
    let mut actor = Dispatcher::new(s.responder.clone());

    actor.register(
        s.tr("ip address"),
        Box::new(SpeakShellOutput::new(
            s.responder.clone(),
            IP_ADDRESS_COMMAND,
            Some(s.tr("I do not have an ip address assigned to me.")),
        )),
    );

    let confirmation = s.tr(VOLUME_CONFIRMATION);
    for (phrase, delta) in [("volume up", 10), ("volume down", -10), ("max volume", 100)] {
        actor.register(
            s.tr(phrase),
            Box::new(AdjustVolume::new(
                s.responder.clone(),
                s.mixer.clone(),
                delta,
                confirmation.clone(),
            )),
        );
    }

    actor.register(
        s.tr("repeat after me"),
        Box::new(EchoTranscript::new(s.responder.clone(), s.tr("repeat after me"))),
    );

    if let Some(path) = commands {
        if let Err(e) = load_commands(&path, &mut actor, registry, s) {
            tracing::warn!("Skipping command file: {:#}", e);
        }
    }

    actor.register(
        s.tr("what is your purpose"),
        Box::new(SpeakFixedText::new(s.responder.clone(), s.tr("I pass butter"))),
    );

    for (phrase, source) in [
        ("suggest random episode of", EpisodeSource::Named),
        ("random episode", EpisodeSource::Favorites),
        ("random episode of", EpisodeSource::Named),
    ] {
        actor.register(s.tr(phrase), Box::new(SuggestRandomEpisode::new(s, source)));
    }

    if small_talk {
        add_small_talk(&mut actor, s);
    }

    tracing::info!("{} voice commands registered", actor.len());
    actor
}

/// Canned replies plus the time, for recognisers that hear free-form speech
pub fn add_small_talk(actor: &mut Dispatcher, s: &Services) {
    for (phrase, response) in SMALL_TALK {
        actor.register(
            s.tr(phrase),
            Box::new(SpeakFixedText::new(s.responder.clone(), s.tr(response))),
        );
    }

    actor.register(
        s.tr("time"),
        Box::new(SpeakCurrentTime::new(s.responder.clone(), s.clock.clone())),
    );
}
