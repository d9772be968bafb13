use std::sync::Arc;
use std::time::Duration;

use crate::core::{MovieRecord, RawMovie};
use crate::engine::RecEngine;
use crate::error::{RecEngineError, Result};
use crate::features;
use crate::providers::MetadataProvider;
use crate::similarity::{similarity_from_tags, DEFAULT_MAX_FEATURES};

/// Offline build configuration
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Popular-listing pages to fetch
    pub pages: u32,

    /// Vocabulary cap for the count vectorizer
    pub max_features: usize,

    /// Delay between provider requests, to respect external rate limits
    pub request_delay: Duration,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            pages: 150,
            max_features: DEFAULT_MAX_FEATURES,
            request_delay: Duration::from_millis(100),
        }
    }
}

/// Offline pipeline orchestrator: fetch, normalize, vectorize, persist.
///
/// One run rebuilds the whole model from scratch; there is no incremental
/// update path. Fetching is sequential and throttled, which keeps the arrival
/// order stable and that order becomes the row order shared by the movie
/// table and the similarity matrix.
pub struct ModelBuilder {
    provider: Arc<dyn MetadataProvider>,
    options: BuildOptions,
}

impl ModelBuilder {
    /// Create a builder with default options
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self {
            provider,
            options: BuildOptions::default(),
        }
    }

    /// Override the build options
    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Fetch raw metadata for the popular catalog.
    ///
    /// A failed listing page logs a warning and stops pagination; a failed
    /// detail fetch logs a warning and skips that movie. Neither aborts the
    /// build.
    pub async fn fetch_catalog(&self) -> Result<Vec<RawMovie>> {
        let mut ids = Vec::new();

        for page in 1..=self.options.pages {
            match self.provider.popular(page).await {
                Ok(listings) => {
                    tracing::debug!(
                        "Provider {} page {}/{}: {} listings",
                        self.provider.name(),
                        page,
                        self.options.pages,
                        listings.len()
                    );
                    ids.extend(listings.into_iter().map(|l| l.id));
                }
                Err(e) => {
                    tracing::warn!("Stopping pagination at page {}: {}", page, e);
                    break;
                }
            }

            tokio::time::sleep(self.options.request_delay).await;
        }

        let mut raw_movies = Vec::with_capacity(ids.len());
        let total = ids.len();

        for (fetched, id) in ids.into_iter().enumerate() {
            match self.provider.details(id).await {
                Ok(raw) => raw_movies.push(raw),
                Err(e) => {
                    tracing::warn!("Skipping movie {} ({}/{}): {}", id, fetched + 1, total, e);
                }
            }

            tokio::time::sleep(self.options.request_delay).await;
        }

        tracing::info!("Fetched {}/{} movies from {}", raw_movies.len(), total, self.provider.name());

        Ok(raw_movies)
    }

    /// Pure offline training stage: normalize and compute the similarity
    /// matrix for an already-fetched catalog.
    pub fn train(&self, raw_movies: &[RawMovie]) -> Result<RecEngine> {
        if raw_movies.is_empty() {
            return Err(RecEngineError::EmptyCatalog);
        }

        let records: Vec<MovieRecord> = raw_movies.iter().map(features::normalize).collect();
        let tags: Vec<&str> = records.iter().map(|r| r.tags.as_str()).collect();

        let similarity = similarity_from_tags(&tags, self.options.max_features);
        tracing::info!(
            "Trained similarity model: {} movies, vocabulary cap {}",
            records.len(),
            self.options.max_features
        );

        RecEngine::from_parts(records, similarity)
    }

    /// Full offline run: fetch the catalog and train the model.
    ///
    /// Fails with [`RecEngineError::EmptyCatalog`] when nothing could be
    /// fetched, before any artifact is written.
    pub async fn build(&self) -> Result<RecEngine> {
        let raw_movies = self.fetch_catalog().await?;
        self.train(&raw_movies)
    }

    /// Full offline run plus artifact persistence
    pub async fn build_and_save(&self, dir: impl AsRef<std::path::Path>) -> Result<RecEngine> {
        let engine = self.build().await?;
        engine.save(dir)?;
        Ok(engine)
    }
}
