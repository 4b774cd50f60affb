//! Shared test doubles for integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeZone};

use voxact::action::Services;
use voxact::catalogue::{
    Catalogue, CatalogueError, Episode, EpisodePage, PageLinks, SeriesHit, Show,
};
use voxact::config::Translator;
use voxact::responder::Responder;
use voxact::store::KeyValueStore;
use voxact::system::{AudioPlayer, Clock, Dice, Mixer, ShellError};

#[derive(Default)]
pub struct Recorder {
    said: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn said(&self) -> Vec<String> {
        self.said.lock().unwrap().clone()
    }
}

impl Responder for Recorder {
    fn say(&self, text: &str) {
        self.said.lock().unwrap().push(text.to_string());
    }
}

/// Never rolls a 1 unless forced to; always picks the first item
pub struct NoLuck;

impl Dice for NoLuck {
    fn roll(&self, sides: u32) -> u32 {
        sides.max(1)
    }

    fn pick(&self, _len: usize) -> usize {
        0
    }
}

pub struct Frozen(pub Mutex<i64>);

impl Clock for Frozen {
    fn now(&self) -> DateTime<Local> {
        Local.timestamp_opt(*self.0.lock().unwrap(), 0).single().unwrap()
    }

    fn unix_now(&self) -> i64 {
        *self.0.lock().unwrap()
    }
}

pub struct StaticMixer(pub Mutex<u8>);

impl Mixer for StaticMixer {
    fn read_level(&self) -> Result<String, ShellError> {
        Ok(self.0.lock().unwrap().to_string())
    }

    fn set_level(&self, percent: u8) -> Result<(), ShellError> {
        *self.0.lock().unwrap() = percent;
        Ok(())
    }
}

#[derive(Default)]
pub struct Jukebox {
    pub played: Mutex<Vec<PathBuf>>,
}

impl AudioPlayer for Jukebox {
    fn play(&self, path: &Path) -> Result<(), ShellError> {
        self.played.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

/// One show with a fixed episode list split over pages; counts page requests
pub struct OneShow {
    pub show: Show,
    pub pages: Vec<Vec<Episode>>,
    pub requests: Mutex<u32>,
}

impl OneShow {
    pub fn new(show: Show, pages: Vec<Vec<Episode>>) -> Self {
        Self {
            show,
            pages,
            requests: Mutex::new(0),
        }
    }

    pub fn requests(&self) -> u32 {
        *self.requests.lock().unwrap()
    }
}

impl Catalogue for OneShow {
    fn search_series(&self, name: &str) -> Result<SeriesHit, CatalogueError> {
        if self.show.name.eq_ignore_ascii_case(name) {
            Ok(SeriesHit {
                id: self.show.id,
                series_name: self.show.name.clone(),
            })
        } else {
            Err(CatalogueError::NoResults(name.to_string()))
        }
    }

    fn episodes_page(&self, _series_id: u64, page: u32) -> Result<EpisodePage, CatalogueError> {
        *self.requests.lock().unwrap() += 1;
        Ok(EpisodePage {
            data: self.pages[page as usize - 1].clone(),
            links: PageLinks {
                last: Some(self.pages.len() as u32),
            },
        })
    }
}

pub struct Harness {
    pub responder: Arc<Recorder>,
    pub catalogue: Arc<OneShow>,
    pub player: Arc<Jukebox>,
    pub mixer: Arc<StaticMixer>,
    pub clock: Arc<Frozen>,
    pub services: Services,
}

impl Harness {
    pub fn new(store: Arc<dyn KeyValueStore>, wav_dir: &Path) -> Self {
        let responder = Arc::new(Recorder::default());
        let show = Show::new("Futurama", 73871);
        let catalogue = Arc::new(OneShow::new(
            show.clone(),
            vec![
                vec![Episode::new(0, 1, "Special"), Episode::new(1, 1, "Space Pilot 3000")],
                vec![Episode::new(1, 2, "The Series Has Landed")],
            ],
        ));
        let player = Arc::new(Jukebox::default());
        let mixer = Arc::new(StaticMixer(Mutex::new(50)));
        let clock = Arc::new(Frozen(Mutex::new(1_700_000_000)));

        let services = Services {
            responder: responder.clone(),
            store,
            catalogue: catalogue.clone(),
            mixer: mixer.clone(),
            player: player.clone(),
            dice: Arc::new(NoLuck),
            clock: clock.clone(),
            translator: Arc::new(Translator::default()),
            wav_dir: wav_dir.to_path_buf(),
            favorites: vec![show],
        };

        Self {
            responder,
            catalogue,
            player,
            mixer,
            clock,
            services,
        }
    }
}
