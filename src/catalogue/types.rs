//! Catalogue data types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A show the user can be offered, by display name and catalogue id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub name: String,
    pub id: u64,
}

impl Show {
    pub fn new(name: impl Into<String>, id: u64) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

/// One search result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesHit {
    pub id: u64,
    pub series_name: String,
}

impl From<SeriesHit> for Show {
    fn from(hit: SeriesHit) -> Self {
        Show::new(hit.series_name, hit.id)
    }
}

/// One episode record.
///
/// Only the fields the suggestion needs are typed; everything else the API
/// returned is kept in `extra` so the cache holds the full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Season 0 holds specials
    #[serde(default)]
    pub aired_season: Option<u32>,

    #[serde(default)]
    pub aired_episode_number: Option<u32>,

    #[serde(default)]
    pub episode_name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Episode {
    pub fn new(season: u32, number: u32, name: impl Into<String>) -> Self {
        Self {
            aired_season: Some(season),
            aired_episode_number: Some(number),
            episode_name: Some(name.into()),
            extra: Map::new(),
        }
    }

    /// Specials and records without a season are never suggested.
    pub fn is_regular(&self) -> bool {
        matches!(self.aired_season, Some(s) if s != 0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub last: Option<u32>,
}

/// One page of `series/{id}/episodes`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EpisodePage {
    #[serde(default)]
    pub data: Vec<Episode>,

    #[serde(default)]
    pub links: PageLinks,
}

impl EpisodePage {
    /// Index of the final page; a missing `links.last` means this is the only page.
    pub fn last_page(&self) -> u32 {
        self.links.last.unwrap_or(1).max(1)
    }
}
