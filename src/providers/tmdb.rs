use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::core::{CrewMember, MovieListing, RawMovie};
use crate::error::{RecEngineError, Result};
use crate::providers::MetadataProvider;

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB API provider
pub struct TmdbProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PopularResponse {
    #[serde(default)]
    results: Vec<PopularEntry>,
}

#[derive(Debug, Deserialize)]
struct PopularEntry {
    id: Option<u64>,
    #[serde(default)]
    title: String,
}

#[derive(Debug, Deserialize)]
struct MovieDetails {
    id: Option<u64>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    genres: Vec<NamedEntry>,
    #[serde(default)]
    keywords: KeywordsBlock,
    #[serde(default)]
    credits: CreditsBlock,
}

#[derive(Debug, Deserialize)]
struct NamedEntry {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize, Default)]
struct KeywordsBlock {
    #[serde(default)]
    keywords: Vec<NamedEntry>,
}

#[derive(Debug, Deserialize, Default)]
struct CreditsBlock {
    #[serde(default)]
    cast: Vec<NamedEntry>,
    #[serde(default)]
    crew: Vec<CrewEntry>,
}

#[derive(Debug, Deserialize)]
struct CrewEntry {
    #[serde(default)]
    name: String,
    #[serde(default)]
    job: String,
}

impl TmdbProvider {
    /// Create new TMDB provider with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a provider pointed at a non-default base URL (used in tests)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    fn provider_error(message: impl Into<String>) -> RecEngineError {
        RecEngineError::Provider {
            provider: "tmdb".to_string(),
            message: message.into(),
        }
    }

    /// Convert a details payload to a RawMovie; payloads without a numeric id
    /// are rejected.
    fn details_to_raw_movie(details: MovieDetails) -> Result<RawMovie> {
        let id = details
            .id
            .ok_or_else(|| Self::provider_error("Details payload has no numeric id"))?;

        Ok(RawMovie {
            id,
            title: details.title,
            overview: details.overview.unwrap_or_default(),
            genres: details.genres.into_iter().map(|g| g.name).collect(),
            keywords: details.keywords.keywords.into_iter().map(|k| k.name).collect(),
            cast: details.credits.cast.into_iter().map(|c| c.name).collect(),
            crew: details
                .credits
                .crew
                .into_iter()
                .map(|c| CrewMember::new(c.name, c.job))
                .collect(),
        })
    }
}

#[async_trait]
impl MetadataProvider for TmdbProvider {
    async fn popular(&self, page: u32) -> Result<Vec<MovieListing>> {
        let url = format!("{}/movie/popular", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("page", &page.to_string())])
            .send()
            .await
            .map_err(|e| Self::provider_error(format!("Popular page {} request failed: {}", page, e)))?;

        if !response.status().is_success() {
            return Err(Self::provider_error(format!(
                "Popular page {}: HTTP {}",
                page,
                response.status()
            )));
        }

        let popular: PopularResponse = response
            .json()
            .await
            .map_err(|e| Self::provider_error(format!("Popular page {}: invalid JSON: {}", page, e)))?;

        // Listings without an id cannot be fetched in detail; drop them here
        let listings = popular
            .results
            .into_iter()
            .filter_map(|entry| {
                if entry.id.is_none() {
                    tracing::warn!("Skipping popular entry without id: '{}'", entry.title);
                }
                entry.id.map(|id| MovieListing {
                    id,
                    title: entry.title,
                })
            })
            .collect();

        Ok(listings)
    }

    async fn details(&self, id: u64) -> Result<RawMovie> {
        let url = format!("{}/movie/{}", self.base_url, id);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("append_to_response", "credits,keywords"),
            ])
            .send()
            .await
            .map_err(|e| Self::provider_error(format!("Details request for {} failed: {}", id, e)))?;

        if !response.status().is_success() {
            return Err(Self::provider_error(format!(
                "Details for {}: HTTP {}",
                id,
                response.status()
            )));
        }

        let details: MovieDetails = response
            .json()
            .await
            .map_err(|e| Self::provider_error(format!("Details for {}: invalid JSON: {}", id, e)))?;

        Self::details_to_raw_movie(details)
    }

    fn name(&self) -> &str {
        "tmdb"
    }
}
