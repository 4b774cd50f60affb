//! Audio playback actions.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{Action, ActionError};
use crate::store::KeyValueStore;
use crate::system::{AudioPlayer, Dice};

/// Plays one audio file. Says nothing.
pub struct PlayAudioFile {
    player: Arc<dyn AudioPlayer>,
    path: PathBuf,
}

impl PlayAudioFile {
    pub fn new(player: Arc<dyn AudioPlayer>, path: impl Into<PathBuf>) -> Self {
        Self {
            player,
            path: path.into(),
        }
    }
}

impl Action for PlayAudioFile {
    fn name(&self) -> &'static str {
        "PlayAudioFile"
    }

    fn run(&self, _transcript: &str) -> Result<(), ActionError> {
        self.player.play(&self.path)?;
        Ok(())
    }
}

/// Plays `<base>.wav`, or with odds of 1 in `counter` the jackpot `<base>-full.wav`.
///
/// Each miss lowers the persisted counter by one, so the jackpot gets more
/// likely with every use; a hit resets it to the initial chance. A counter
/// of 1 always hits.
pub struct PlayAudioFileWithDecayingOdds {
    player: Arc<dyn AudioPlayer>,
    store: Arc<dyn KeyValueStore>,
    dice: Arc<dyn Dice>,
    base: PathBuf,
    initial: u32,
}

impl PlayAudioFileWithDecayingOdds {
    pub fn new(
        player: Arc<dyn AudioPlayer>,
        store: Arc<dyn KeyValueStore>,
        dice: Arc<dyn Dice>,
        base: impl Into<PathBuf>,
        initial: u32,
    ) -> Self {
        Self {
            player,
            store,
            dice,
            base: base.into(),
            initial: initial.max(1),
        }
    }

    /// Store key of the chance counter, derived from the base file name
    pub fn counter_key(&self) -> String {
        let name = self
            .base
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("chance-{}", name)
    }

    pub fn regular_path(&self) -> PathBuf {
        with_suffix(&self.base, ".wav")
    }

    pub fn jackpot_path(&self) -> PathBuf {
        with_suffix(&self.base, "-full.wav")
    }

    /// Persisted counter, initialising it on first use
    fn load_counter(&self, key: &str) -> Result<i64, ActionError> {
        let stored = self.store.get(key)?.and_then(|raw| match raw.trim().parse::<i64>() {
            Ok(n) => Some(n),
            Err(_) => {
                tracing::warn!("Ignoring unreadable chance counter {:?}: {:?}", key, raw);
                None
            }
        });

        match stored {
            Some(n) => Ok(n),
            None => {
                self.store.set(key, &self.initial.to_string())?;
                Ok(i64::from(self.initial))
            }
        }
    }
}

impl Action for PlayAudioFileWithDecayingOdds {
    fn name(&self) -> &'static str {
        "PlayAudioFileWithDecayingOdds"
    }

    fn run(&self, _transcript: &str) -> Result<(), ActionError> {
        let key = self.counter_key();
        let counter = self.load_counter(&key)?;
        tracing::debug!("Current chance: {}", counter);

        // A counter at or below zero behaves like 1: a guaranteed hit
        let sides = counter.clamp(1, i64::from(u32::MAX)) as u32;
        let roll = self.dice.roll(sides);
        tracing::debug!("1/{}, rolled a {}", sides, roll);

        let path = if roll == 1 {
            self.store.set(&key, &self.initial.to_string())?;
            self.jackpot_path()
        } else {
            self.store.set(&key, &(sides - 1).to_string())?;
            self.regular_path()
        };

        self.player.play(&path)?;
        Ok(())
    }
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
