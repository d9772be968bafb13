//! Similarity engine: vocabulary fitting, count vectorization, and the dense
//! pairwise cosine similarity matrix.
//!
//! Memory for the similarity matrix is O(n²) in the number of movies. That is
//! fine for catalogs in the low thousands and is the accepted scaling limit of
//! this design.

pub mod matrix;
pub mod stopwords;
pub mod vocabulary;

pub use matrix::{CountMatrix, SimilarityMatrix};
pub use stopwords::ENGLISH_STOP_WORDS;
pub use vocabulary::Vocabulary;

/// Default vocabulary cap, matching the reference pipeline
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Full offline similarity pass: fit the vocabulary on the tag corpus,
/// vectorize, and compute the pairwise cosine matrix.
pub fn similarity_from_tags<S: AsRef<str>>(tags: &[S], max_features: usize) -> SimilarityMatrix {
    let vocabulary = Vocabulary::build(tags, max_features, ENGLISH_STOP_WORDS);
    let counts = vocabulary.transform(tags);
    SimilarityMatrix::from_counts(&counts)
}
