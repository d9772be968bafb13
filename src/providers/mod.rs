pub mod tmdb;

use async_trait::async_trait;

use crate::core::{MovieListing, RawMovie};
use crate::error::Result;

pub use tmdb::TmdbProvider;

/// Trait for movie metadata providers (TMDB, or a mock in tests)
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch one page of the popular-movies listing (pages start at 1)
    async fn popular(&self, page: u32) -> Result<Vec<MovieListing>>;

    /// Fetch full metadata for one movie, including credits and keywords
    async fn details(&self, id: u64) -> Result<RawMovie>;

    /// Get provider name
    fn name(&self) -> &str;
}
