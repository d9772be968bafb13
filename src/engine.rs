use std::cmp::Ordering;
use std::path::Path;

use crate::artifacts;
use crate::core::{MovieRecord, Recommendation, RecommendResponse};
use crate::error::{RecEngineError, Result};
use crate::similarity::SimilarityMatrix;

/// Default number of recommendations per lookup
pub const DEFAULT_K: usize = 5;

/// Serve-time recommendation engine.
///
/// Holds the movie table and similarity matrix loaded once at startup. Both
/// are immutable for the process lifetime, so concurrent read-only lookups
/// need no synchronization.
#[derive(Debug)]
pub struct RecEngine {
    movies: Vec<MovieRecord>,
    similarity: SimilarityMatrix,
}

impl RecEngine {
    /// Load the engine from persisted artifacts.
    ///
    /// Returns [`RecEngineError::ModelUnavailable`] when the artifacts are
    /// missing, so the serving layer can answer service-unavailable instead
    /// of crashing.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let (movies, similarity) = artifacts::load(dir)?;
        Self::from_parts(movies, similarity)
    }

    /// Assemble an engine from an in-memory table and matrix
    pub fn from_parts(movies: Vec<MovieRecord>, similarity: SimilarityMatrix) -> Result<Self> {
        if movies.len() != similarity.len() {
            return Err(RecEngineError::Artifact(format!(
                "Movie table has {} rows but similarity matrix is {}x{}",
                movies.len(),
                similarity.len(),
                similarity.len()
            )));
        }

        Ok(Self { movies, similarity })
    }

    /// Persist the engine's table and matrix as the two model artifacts
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<()> {
        artifacts::save(dir, &self.movies, &self.similarity)
    }

    /// Number of movies in the catalog
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// The movie table, in matrix row order
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Top-k most similar other movies for an exact title match.
    ///
    /// Matching is case-sensitive; on duplicate titles the first row wins.
    /// The query movie itself is never part of the result. Fewer than `k`
    /// results are returned when the catalog is small; that is not an error.
    pub fn recommend_by_title(&self, title: &str, k: usize) -> Result<Vec<Recommendation>> {
        let query_index = self
            .movies
            .iter()
            .position(|m| m.title == title)
            .ok_or_else(|| RecEngineError::TitleNotFound(title.to_string()))?;

        let mut ranked: Vec<(usize, f64)> = self
            .similarity
            .row(query_index)
            .iter()
            .copied()
            .enumerate()
            .collect();

        // Similarity descending; ties break by ascending row index for
        // deterministic output
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        let recommendations = ranked
            .into_iter()
            .filter(|&(index, _)| index != query_index)
            .take(k)
            .map(|(index, _)| Recommendation::from(&self.movies[index]))
            .collect();

        Ok(recommendations)
    }

    /// Recommendations for a watchlist: titles are tried in the given order
    /// and the first one present in the catalog anchors the result.
    ///
    /// Callers pass titles most-recently-added first, so the lookup follows
    /// the freshest watchlist entry that the model knows about.
    pub fn recommend_for_watchlist<S: AsRef<str>>(
        &self,
        ranked_titles: &[S],
        k: usize,
    ) -> Result<RecommendResponse> {
        for title in ranked_titles {
            let title = title.as_ref();
            match self.recommend_by_title(title, k) {
                Ok(recommendations) => {
                    return Ok(RecommendResponse {
                        source_title: title.to_string(),
                        recommendations,
                    })
                }
                Err(RecEngineError::TitleNotFound(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(RecEngineError::WatchlistNoMatch)
    }
}
