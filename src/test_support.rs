//! Test doubles for the external collaborators.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeZone};

use crate::action::Services;
use crate::catalogue::{
    Catalogue, CatalogueError, Episode, EpisodePage, PageLinks, SeriesHit, Show,
};
use crate::config::Translator;
use crate::responder::Responder;
use crate::store::MemoryStore;
use crate::system::{AudioPlayer, Clock, Dice, Mixer, ShellError};

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|p| p.into_inner())
}

#[derive(Default)]
pub struct RecordingResponder {
    said: Mutex<Vec<String>>,
}

impl RecordingResponder {
    pub fn said(&self) -> Vec<String> {
        lock(&self.said).clone()
    }
}

impl Responder for RecordingResponder {
    fn say(&self, text: &str) {
        lock(&self.said).push(text.to_string());
    }
}

/// Returns queued values, then falls back to "never 1" rolls and index 0.
#[derive(Default)]
pub struct ScriptedDice {
    rolls: Mutex<VecDeque<u32>>,
    picks: Mutex<VecDeque<usize>>,
    sides_seen: Mutex<Vec<u32>>,
}

impl ScriptedDice {
    pub fn push_roll(&self, roll: u32) {
        lock(&self.rolls).push_back(roll);
    }

    pub fn push_pick(&self, pick: usize) {
        lock(&self.picks).push_back(pick);
    }

    pub fn sides_seen(&self) -> Vec<u32> {
        lock(&self.sides_seen).clone()
    }
}

impl Dice for ScriptedDice {
    fn roll(&self, sides: u32) -> u32 {
        let sides = sides.max(1);
        lock(&self.sides_seen).push(sides);
        lock(&self.rolls)
            .pop_front()
            .map(|r| r.clamp(1, sides))
            .unwrap_or(sides)
    }

    fn pick(&self, len: usize) -> usize {
        lock(&self.picks).pop_front().unwrap_or(0).min(len.saturating_sub(1))
    }
}

pub struct FixedClock {
    unix: Mutex<i64>,
}

impl FixedClock {
    pub fn at(unix: i64) -> Self {
        Self {
            unix: Mutex::new(unix),
        }
    }

    pub fn set(&self, unix: i64) {
        *lock(&self.unix) = unix;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        let unix = *lock(&self.unix);
        Local
            .timestamp_opt(unix, 0)
            .single()
            .unwrap_or_else(Local::now)
    }

    fn unix_now(&self) -> i64 {
        *lock(&self.unix)
    }
}

pub struct FakeMixer {
    pub level: Mutex<String>,
    pub applied: Mutex<Vec<u8>>,
    pub fail_set: bool,
}

impl FakeMixer {
    pub fn at(level: &str) -> Self {
        Self {
            level: Mutex::new(level.to_string()),
            applied: Mutex::new(Vec::new()),
            fail_set: false,
        }
    }

    pub fn applied(&self) -> Vec<u8> {
        lock(&self.applied).clone()
    }
}

impl Mixer for FakeMixer {
    fn read_level(&self) -> Result<String, ShellError> {
        Ok(lock(&self.level).clone())
    }

    fn set_level(&self, percent: u8) -> Result<(), ShellError> {
        if self.fail_set {
            return Err(ShellError::Spawn {
                command: "amixer".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no amixer"),
            });
        }
        lock(&self.applied).push(percent);
        *lock(&self.level) = percent.to_string();
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingPlayer {
    played: Mutex<Vec<PathBuf>>,
}

impl RecordingPlayer {
    pub fn played(&self) -> Vec<PathBuf> {
        lock(&self.played).clone()
    }
}

impl AudioPlayer for RecordingPlayer {
    fn play(&self, path: &Path) -> Result<(), ShellError> {
        lock(&self.played).push(path.to_path_buf());
        Ok(())
    }
}

/// Serves a fixed set of shows, each with pre-paged episodes.
#[derive(Default)]
pub struct FakeCatalogue {
    shows: Mutex<Vec<(SeriesHit, Vec<Vec<Episode>>)>>,
    pub offline: bool,
    page_requests: Mutex<Vec<(u64, u32)>>,
}

impl FakeCatalogue {
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn add_show(&self, show: &Show, pages: Vec<Vec<Episode>>) {
        lock(&self.shows).push((
            SeriesHit {
                id: show.id,
                series_name: show.name.clone(),
            },
            pages,
        ));
    }

    pub fn page_requests(&self) -> Vec<(u64, u32)> {
        lock(&self.page_requests).clone()
    }

    fn unreachable(&self) -> CatalogueError {
        CatalogueError::Transport {
            url: "https://catalogue.test".to_string(),
            message: "connection refused".to_string(),
        }
    }
}

impl Catalogue for FakeCatalogue {
    fn search_series(&self, name: &str) -> Result<SeriesHit, CatalogueError> {
        if self.offline {
            return Err(self.unreachable());
        }
        let needle = name.to_lowercase();
        lock(&self.shows)
            .iter()
            .find(|(hit, _)| hit.series_name.to_lowercase().contains(&needle))
            .map(|(hit, _)| hit.clone())
            .ok_or_else(|| CatalogueError::NoResults(name.to_string()))
    }

    fn episodes_page(&self, series_id: u64, page: u32) -> Result<EpisodePage, CatalogueError> {
        lock(&self.page_requests).push((series_id, page));
        if self.offline {
            return Err(self.unreachable());
        }
        let shows = lock(&self.shows);
        let (_, pages) = shows
            .iter()
            .find(|(hit, _)| hit.id == series_id)
            .ok_or_else(|| CatalogueError::Status {
                url: format!("series/{}/episodes", series_id),
                status: 404,
            })?;
        let data = pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default();
        Ok(EpisodePage {
            data,
            links: PageLinks {
                last: Some(pages.len().max(1) as u32),
            },
        })
    }
}

/// All fakes wired together, with handles kept for assertions.
pub struct Fakes {
    pub responder: Arc<RecordingResponder>,
    pub store: Arc<MemoryStore>,
    pub catalogue: Arc<FakeCatalogue>,
    pub mixer: Arc<FakeMixer>,
    pub player: Arc<RecordingPlayer>,
    pub dice: Arc<ScriptedDice>,
    pub clock: Arc<FixedClock>,
}

impl Default for Fakes {
    fn default() -> Self {
        Self::with_catalogue(FakeCatalogue::default())
    }
}

impl Fakes {
    pub fn with_catalogue(catalogue: FakeCatalogue) -> Self {
        Self {
            responder: Arc::new(RecordingResponder::default()),
            store: Arc::new(MemoryStore::new()),
            catalogue: Arc::new(catalogue),
            mixer: Arc::new(FakeMixer::at("50")),
            player: Arc::new(RecordingPlayer::default()),
            dice: Arc::new(ScriptedDice::default()),
            clock: Arc::new(FixedClock::at(1_700_000_000)),
        }
    }

    pub fn services(&self) -> Services {
        Services {
            responder: self.responder.clone(),
            store: self.store.clone(),
            catalogue: self.catalogue.clone(),
            mixer: self.mixer.clone(),
            player: self.player.clone(),
            dice: self.dice.clone(),
            clock: self.clock.clone(),
            translator: Arc::new(Translator::default()),
            wav_dir: PathBuf::from("wavs/chance"),
            favorites: vec![Show::new("Futurama", 73871)],
        }
    }
}
