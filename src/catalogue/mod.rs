//! Remote TV catalogue
//!
//! The episode suggestion action needs two things from a catalogue: resolve a
//! free-text show name to an id, and list a show's episodes page by page.

mod tvdb;
mod types;

pub use tvdb::{DEFAULT_TVDB_URL, TvdbClient};
pub use types::{Episode, EpisodePage, PageLinks, SeriesHit, Show};

/// Error type for catalogue requests
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("No catalogue API key configured")]
    MissingApiKey,

    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("No results for {0:?}")]
    NoResults(String),
}

/// A paginated show catalogue.
pub trait Catalogue: Send + Sync {
    /// Best match for a free-text show name.
    fn search_series(&self, name: &str) -> Result<SeriesHit, CatalogueError>;

    /// One page (1-based) of a show's episode list.
    fn episodes_page(&self, series_id: u64, page: u32) -> Result<EpisodePage, CatalogueError>;

    /// Every episode of a show, following pages until the last one.
    fn all_episodes(&self, series_id: u64) -> Result<Vec<Episode>, CatalogueError> {
        let first = self.episodes_page(series_id, 1)?;
        let last = first.last_page();
        let mut episodes = first.data;

        for page in 2..=last {
            episodes.extend(self.episodes_page(series_id, page)?.data);
        }

        Ok(episodes)
    }
}
