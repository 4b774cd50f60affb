//! TheTVDB (v2 JSON API) client

use std::sync::Mutex;
use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::types::{EpisodePage, SeriesHit};
use super::{Catalogue, CatalogueError};

/// Default catalogue API URL
pub const DEFAULT_TVDB_URL: &str = "https://api.thetvdb.com";

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<SeriesHit>,
}

/// Blocking client. Logs in on first use and reuses the token until the
/// API rejects it, then logs in again.
pub struct TvdbClient {
    base_url: String,
    api_key: String,
    client: ureq::Agent,
    token: Mutex<Option<String>>,
}

impl TvdbClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_url(DEFAULT_TVDB_URL, api_key)
    }

    pub fn with_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout_read(Duration::from_secs(30))
            .user_agent(concat!("voxact/", env!("CARGO_PKG_VERSION")))
            .build();

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
            token: Mutex::new(None),
        }
    }

    fn token(&self) -> Result<String, CatalogueError> {
        if self.api_key.trim().is_empty() {
            return Err(CatalogueError::MissingApiKey);
        }

        let mut cached = self.token.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(token) = cached.as_ref() {
            return Ok(token.clone());
        }

        let url = format!("{}/login", self.base_url);
        tracing::debug!("Logging in to {}", url);
        let response = self
            .client
            .post(&url)
            .send_json(serde_json::json!({ "apikey": self.api_key }))
            .map_err(|e| request_error(&url, e))?;
        let login: LoginResponse = decode(&url, response)?;

        *cached = Some(login.token.clone());
        Ok(login.token)
    }

    fn forget_token(&self) {
        self.token.lock().unwrap_or_else(|p| p.into_inner()).take();
    }

    /// GET with the current token; a 401 means it expired, so log in again
    /// and retry once.
    fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CatalogueError> {
        match self.get_with_token(path, query) {
            Err(CatalogueError::Status { status: 401, .. }) => {
                tracing::debug!("Token rejected for {}, logging in again", path);
                self.forget_token();
                self.get_with_token(path, query)
            }
            other => other,
        }
    }

    fn get_with_token<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CatalogueError> {
        let token = self.token()?;
        let url = format!("{}/{}", self.base_url, path);

        let mut request = self
            .client
            .get(&url)
            .set("Authorization", &format!("Bearer {}", token))
            .set("Accept", "application/json");
        for (key, value) in query {
            request = request.query(key, value);
        }

        let response = request.call().map_err(|e| request_error(&url, e))?;
        decode(&url, response)
    }
}

impl Catalogue for TvdbClient {
    fn search_series(&self, name: &str) -> Result<SeriesHit, CatalogueError> {
        let result: Result<SearchResponse, _> = self.get("search/series", &[("name", name)]);
        match result {
            Ok(found) => found
                .data
                .into_iter()
                .next()
                .ok_or_else(|| CatalogueError::NoResults(name.to_string())),
            // The API answers 404 when nothing matches
            Err(CatalogueError::Status { status: 404, .. }) => {
                Err(CatalogueError::NoResults(name.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    fn episodes_page(&self, series_id: u64, page: u32) -> Result<EpisodePage, CatalogueError> {
        let page = page.to_string();
        self.get(
            &format!("series/{}/episodes", series_id),
            &[("page", page.as_str())],
        )
    }
}

fn request_error(url: &str, err: ureq::Error) -> CatalogueError {
    match err {
        ureq::Error::Status(status, _) => CatalogueError::Status {
            url: url.to_string(),
            status,
        },
        ureq::Error::Transport(t) => CatalogueError::Transport {
            url: url.to_string(),
            message: t.to_string(),
        },
    }
}

fn decode<T: DeserializeOwned>(url: &str, response: ureq::Response) -> Result<T, CatalogueError> {
    response
        .into_json()
        .map_err(|e| CatalogueError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
}
