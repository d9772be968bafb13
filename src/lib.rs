//! # WatchWorthy Recommendation Engine
//!
//! Content-based movie recommendation engine with:
//! - TMDB metadata ingestion (popular listings + per-movie details)
//! - Deterministic tag extraction (overview, genres, keywords, cast, director)
//! - Count vectorization over a capped vocabulary with English stop words
//! - Precomputed dense cosine similarity matrix
//! - Fast nearest-neighbor title lookup over persisted artifacts
//!
//! The engine runs in two strictly separate phases: an offline build
//! ([`ModelBuilder`]) that produces the movie table + similarity matrix
//! artifacts, and a serve phase ([`RecEngine`]) that loads them once and
//! answers read-only lookups.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use watchworthy_rec_engine::RecEngine;
//!
//! fn main() -> anyhow::Result<()> {
//!     let engine = RecEngine::load("model")?;
//!
//!     for rec in engine.recommend_by_title("Inception", 5)? {
//!         println!("{} ({})", rec.title, rec.id);
//!     }
//!     Ok(())
//! }
//! ```

pub mod artifacts;
pub mod builder;
pub mod core;
pub mod engine;
pub mod error;
pub mod features;
pub mod providers;
pub mod similarity;

// Re-export primary types
pub use builder::{BuildOptions, ModelBuilder};
pub use core::{MovieListing, MovieRecord, RawMovie, Recommendation, RecommendResponse};
pub use engine::RecEngine;
pub use error::{RecEngineError, Result};
pub use similarity::{SimilarityMatrix, Vocabulary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
