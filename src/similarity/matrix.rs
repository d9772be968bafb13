/// Dense integer count matrix (movies × vocabulary columns)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMatrix {
    n_rows: usize,
    n_cols: usize,
    data: Vec<u32>,
}

impl CountMatrix {
    /// All-zero matrix of the given shape
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            data: vec![0; n_rows * n_cols],
        }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn row(&self, row: usize) -> &[u32] {
        &self.data[row * self.n_cols..(row + 1) * self.n_cols]
    }

    pub fn increment(&mut self, row: usize, column: usize) {
        self.data[row * self.n_cols + column] += 1;
    }
}

/// Dense symmetric pairwise cosine similarity matrix.
///
/// Entry (i, j) is the cosine similarity of count vectors i and j. The upper
/// triangle is computed once and mirrored, so (i, j) and (j, i) are the same
/// f64 bit for bit. Rows with a zero vector get 0.0 everywhere, including the
/// diagonal, to avoid division by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute the pairwise cosine matrix from count vectors.
    ///
    /// Counts are exact integers; dot products and norms accumulate in f64.
    pub fn from_counts(counts: &CountMatrix) -> Self {
        let n = counts.n_rows();
        let mut data = vec![0.0; n * n];

        let norms: Vec<f64> = (0..n)
            .map(|i| {
                counts
                    .row(i)
                    .iter()
                    .map(|&c| {
                        let c = f64::from(c);
                        c * c
                    })
                    .sum::<f64>()
                    .sqrt()
            })
            .collect();

        for i in 0..n {
            data[i * n + i] = if norms[i] == 0.0 { 0.0 } else { 1.0 };

            for j in (i + 1)..n {
                let sim = if norms[i] == 0.0 || norms[j] == 0.0 {
                    0.0
                } else {
                    let dot: f64 = counts
                        .row(i)
                        .iter()
                        .zip(counts.row(j))
                        .map(|(&a, &b)| f64::from(a) * f64::from(b))
                        .sum();
                    // Counts are non-negative, so the true cosine lies in
                    // [0, 1]; the clamp absorbs float drift at the top end
                    (dot / (norms[i] * norms[j])).clamp(0.0, 1.0)
                };

                data[i * n + j] = sim;
                data[j * n + i] = sim;
            }
        }

        Self { n, data }
    }

    /// Reassemble a matrix from its raw parts (used by artifact loading)
    pub fn from_raw(n: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != n * n {
            return None;
        }
        Some(Self { n, data })
    }

    /// Number of rows (== columns)
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Similarity of every movie to movie `i`
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Row-major cell storage
    pub fn cells(&self) -> &[f64] {
        &self.data
    }
}
