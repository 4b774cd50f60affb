//! Random TV episode suggestions
//!
//! Picks a show (a random favorite, or whatever show the user named), makes
//! sure its episode list is cached locally, and suggests one random regular
//! episode.

mod cache;

pub use cache::{CACHE_TTL_SECS, EpisodeCache, load_or_refresh};

use std::sync::Arc;

use super::{Action, ActionError, Services};
use crate::catalogue::{Catalogue, Episode, Show};
use crate::responder::Responder;
use crate::store::KeyValueStore;
use crate::system::{Clock, Dice};

/// Phrases stripped from the transcript to leave the show name
const TRIGGERS: [&str; 2] = ["suggest random episode of", "random episode of"];

const LEAD_INS: [&str; 5] = [
    "How about",
    "Try",
    "You should watch",
    "Have a look at",
    "You may like",
];

/// Where the show comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeSource {
    /// A random pick from the configured favorites
    Favorites,
    /// The show named in the transcript, looked up in the catalogue
    Named,
}

impl EpisodeSource {
    /// `episodeof` selects named-show mode; anything else means favorites.
    pub fn from_keyword(keyword: &str) -> Self {
        if keyword.trim() == "episodeof" {
            EpisodeSource::Named
        } else {
            EpisodeSource::Favorites
        }
    }
}

/// The show name left after removing the trigger phrases
pub fn requested_show(transcript: &str) -> String {
    TRIGGERS
        .iter()
        .fold(transcript.to_string(), |text, trigger| {
            text.replace(trigger, "").trim().to_string()
        })
}

pub struct SuggestRandomEpisode {
    responder: Arc<dyn Responder>,
    catalogue: Arc<dyn Catalogue>,
    store: Arc<dyn KeyValueStore>,
    dice: Arc<dyn Dice>,
    clock: Arc<dyn Clock>,
    favorites: Vec<Show>,
    source: EpisodeSource,
}

impl SuggestRandomEpisode {
    pub fn new(services: &Services, source: EpisodeSource) -> Self {
        Self {
            responder: services.responder.clone(),
            catalogue: services.catalogue.clone(),
            store: services.store.clone(),
            dice: services.dice.clone(),
            clock: services.clock.clone(),
            favorites: services.favorites.clone(),
            source,
        }
    }

    fn pick_show(&self, transcript: &str) -> Result<Show, ActionError> {
        match self.source {
            EpisodeSource::Favorites => {
                if self.favorites.is_empty() {
                    return Err(ActionError::invalid(
                        "SuggestRandomEpisode",
                        "no favorite shows configured",
                    ));
                }
                let idx = self.dice.pick(self.favorites.len());
                Ok(self.favorites[idx].clone())
            }
            EpisodeSource::Named => {
                let name = requested_show(transcript);
                self.catalogue
                    .search_series(&name)
                    .map(Show::from)
                    .map_err(|source| ActionError::Remote {
                        apology: format!(
                            "Sorry, I can't seem to find {} on the TV database",
                            name
                        ),
                        source,
                    })
            }
        }
    }
}

/// "How about Futurama, season 2 episode 5: Raging Bender"
fn describe(lead_in: &str, show: &Show, episode: &Episode) -> String {
    let mut text = format!(
        "{} {}, season {} episode {}",
        lead_in,
        show.name,
        episode.aired_season.unwrap_or_default(),
        episode.aired_episode_number.unwrap_or_default()
    );
    if let Some(name) = episode.episode_name.as_deref().filter(|n| !n.is_empty()) {
        text.push_str(": ");
        text.push_str(name);
    }
    text
}

impl Action for SuggestRandomEpisode {
    fn name(&self) -> &'static str {
        "SuggestRandomEpisode"
    }

    fn run(&self, transcript: &str) -> Result<(), ActionError> {
        let show = self.pick_show(transcript)?;
        tracing::debug!("Suggesting an episode of {} ({})", show.name, show.id);

        let cache = load_or_refresh(
            self.store.as_ref(),
            self.catalogue.as_ref(),
            show.id,
            self.clock.unix_now(),
        )?;

        // Specials (season 0) are never suggested
        let regular: Vec<&Episode> = cache.episodes.iter().filter(|e| e.is_regular()).collect();
        if regular.is_empty() {
            return Err(ActionError::NoEpisodes {
                apology: format!("Sorry, I couldn't find any episodes of {}", show.name),
                show: show.name,
            });
        }

        let episode = regular[self.dice.pick(regular.len())];
        let lead_in = LEAD_INS[self.dice.pick(LEAD_INS.len())];
        self.responder.say(&describe(lead_in, &show, episode));
        Ok(())
    }
}
