//! Per-show episode list cache
//!
//! Stored as `{"episodes": [...], "updated": <unix seconds>}` under
//! `tvdb_cache/tvdb_<id>.json`. A cache younger than seven days is used as
//! is; an older, missing or unreadable one is replaced by a full refetch.

use serde::{Deserialize, Deserializer, Serialize};

use crate::action::ActionError;
use crate::catalogue::{Catalogue, Episode};
use crate::store::KeyValueStore;

const CONNECT_APOLOGY: &str =
    "I couldn't connect to the TV database. Have you set your API key correctly?";

/// Seven days
pub const CACHE_TTL_SECS: i64 = 604_800;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeCache {
    pub episodes: Vec<Episode>,

    /// Fetch time, seconds since the epoch
    #[serde(deserialize_with = "epoch_seconds")]
    pub updated: i64,
}

// Older caches wrote fractional seconds
fn epoch_seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let secs = f64::deserialize(deserializer)?;
    Ok(secs as i64)
}

impl EpisodeCache {
    pub fn key(series_id: u64) -> String {
        format!("tvdb_cache/tvdb_{}.json", series_id)
    }

    pub fn is_fresh(&self, now: i64) -> bool {
        self.updated.saturating_add(CACHE_TTL_SECS) >= now
    }
}

/// Cached episode list for a show, refetching everything when stale.
///
/// Catalogue failures come back as [`ActionError::Remote`].
pub fn load_or_refresh(
    store: &dyn KeyValueStore,
    catalogue: &dyn Catalogue,
    series_id: u64,
    now: i64,
) -> Result<EpisodeCache, ActionError> {
    let key = EpisodeCache::key(series_id);

    if let Some(raw) = store.get(&key)? {
        match serde_json::from_str::<EpisodeCache>(&raw) {
            Ok(cache) if cache.is_fresh(now) => {
                tracing::debug!("Using cached episodes for {} ({})", series_id, cache.updated);
                return Ok(cache);
            }
            Ok(cache) => {
                tracing::debug!("Episode cache for {} is stale ({})", series_id, cache.updated)
            }
            Err(e) => tracing::warn!("Discarding unreadable episode cache {}: {}", key, e),
        }
    }

    let episodes = catalogue
        .all_episodes(series_id)
        .map_err(|source| ActionError::Remote {
            apology: CONNECT_APOLOGY.to_string(),
            source,
        })?;
    tracing::debug!("Fetched {} episodes for {}", episodes.len(), series_id);

    let cache = EpisodeCache {
        episodes,
        updated: now,
    };
    store.set(&key, &serde_json::to_string(&cache)?)?;
    Ok(cache)
}
