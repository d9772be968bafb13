use std::collections::{HashMap, HashSet};

use crate::similarity::matrix::CountMatrix;

/// Fixed token -> column mapping fitted once over the whole tag corpus.
///
/// Tokens are whitespace-split (tags are already lower-cased upstream), stop
/// words are dropped, and the `max_features` tokens with the highest total
/// occurrence count are kept. Ties at the cap boundary break by higher count
/// first, then lexicographically smaller token first, so the fit is
/// deterministic for a given corpus.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Fit a vocabulary on a tag corpus. An empty corpus yields an empty
    /// vocabulary rather than an error.
    pub fn build<S: AsRef<str>>(docs: &[S], max_features: usize, stop_words: &[&str]) -> Self {
        let stop_set: HashSet<&str> = stop_words.iter().copied().collect();

        let mut term_counts: HashMap<String, u64> = HashMap::new();
        for doc in docs {
            for token in doc.as_ref().split_whitespace() {
                if stop_set.contains(token) {
                    continue;
                }
                *term_counts.entry(token.to_string()).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(String, u64)> = term_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(max_features);

        let index = ranked
            .into_iter()
            .enumerate()
            .map(|(column, (token, _))| (token, column))
            .collect();

        Self { index }
    }

    /// Column index for a token, if it survived the cap
    pub fn column(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Number of tokens in the vocabulary
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Vectorize a tag corpus into per-movie token counts aligned to this
    /// vocabulary's columns. Out-of-vocabulary tokens contribute nothing.
    pub fn transform<S: AsRef<str>>(&self, docs: &[S]) -> CountMatrix {
        let n_cols = self.index.len();
        let mut counts = CountMatrix::zeros(docs.len(), n_cols);

        for (row, doc) in docs.iter().enumerate() {
            for token in doc.as_ref().split_whitespace() {
                if let Some(column) = self.column(token) {
                    counts.increment(row, column);
                }
            }
        }

        counts
    }
}
