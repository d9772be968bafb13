//! Persisted model artifacts.
//!
//! One offline run produces exactly two files in the model directory:
//! `movies.json` (the movie table, with a build timestamp) and
//! `similarity.bin` (the dense cosine matrix as little-endian f64 cells).
//! Row i of the table corresponds to row/column i of the matrix; save/load
//! preserves that correspondence exactly, and matrix cells round-trip bit
//! for bit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use crate::core::MovieRecord;
use crate::error::{RecEngineError, Result};
use crate::similarity::SimilarityMatrix;

/// Movie table artifact file name
pub const MOVIES_FILE: &str = "movies.json";
/// Similarity matrix artifact file name
pub const SIMILARITY_FILE: &str = "similarity.bin";

/// File magic for the similarity blob, followed by a format version byte
const SIMILARITY_MAGIC: &[u8; 8] = b"WWRECSIM";
const SIMILARITY_VERSION: u8 = 1;

/// Movie table as serialized to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MovieTable {
    built_at: DateTime<Utc>,
    movies: Vec<MovieRecord>,
}

/// Write both artifacts to `dir`, creating it if needed.
///
/// The table and matrix must already agree on row count; that invariant is
/// established by the builder and re-checked on load.
pub fn save(dir: impl AsRef<Path>, movies: &[MovieRecord], similarity: &SimilarityMatrix) -> Result<()> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let table = MovieTable {
        built_at: Utc::now(),
        movies: movies.to_vec(),
    };
    let table_file = File::create(dir.join(MOVIES_FILE))?;
    serde_json::to_writer(BufWriter::new(table_file), &table)?;

    let matrix_file = File::create(dir.join(SIMILARITY_FILE))?;
    let mut writer = BufWriter::new(matrix_file);
    writer.write_all(SIMILARITY_MAGIC)?;
    writer.write_all(&[SIMILARITY_VERSION])?;
    writer.write_all(&(similarity.len() as u64).to_le_bytes())?;
    for cell in similarity.cells() {
        writer.write_all(&cell.to_le_bytes())?;
    }
    writer.flush()?;

    tracing::info!(
        "Saved {} movies and a {}x{} similarity matrix to {}",
        movies.len(),
        similarity.len(),
        similarity.len(),
        dir.display()
    );

    Ok(())
}

/// Load both artifacts from `dir`.
///
/// Missing files map to [`RecEngineError::ModelUnavailable`]; corrupt files
/// or a row-count mismatch between the two map to
/// [`RecEngineError::Artifact`].
pub fn load(dir: impl AsRef<Path>) -> Result<(Vec<MovieRecord>, SimilarityMatrix)> {
    let dir = dir.as_ref();

    let table_file = open_artifact(&dir.join(MOVIES_FILE))?;
    let table: MovieTable = serde_json::from_reader(BufReader::new(table_file))?;

    let matrix_file = open_artifact(&dir.join(SIMILARITY_FILE))?;
    let matrix_len = matrix_file.metadata()?.len();
    let similarity = read_similarity(BufReader::new(matrix_file), matrix_len)?;

    if table.movies.len() != similarity.len() {
        return Err(RecEngineError::Artifact(format!(
            "Movie table has {} rows but similarity matrix is {}x{}",
            table.movies.len(),
            similarity.len(),
            similarity.len()
        )));
    }

    Ok((table.movies, similarity))
}

fn open_artifact(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            RecEngineError::ModelUnavailable
        } else {
            RecEngineError::Io(e)
        }
    })
}

/// Header size: magic + version byte + row count
const SIMILARITY_HEADER_LEN: u64 = 8 + 1 + 8;

fn read_similarity(mut reader: impl Read, file_len: u64) -> Result<SimilarityMatrix> {
    let mut magic = [0u8; 8];
    reader.read_exact(&mut magic)?;
    if &magic != SIMILARITY_MAGIC {
        return Err(RecEngineError::Artifact(
            "Similarity file has wrong magic bytes".to_string(),
        ));
    }

    let mut version = [0u8; 1];
    reader.read_exact(&mut version)?;
    if version[0] != SIMILARITY_VERSION {
        return Err(RecEngineError::Artifact(format!(
            "Unsupported similarity format version {}",
            version[0]
        )));
    }

    let mut n_bytes = [0u8; 8];
    reader.read_exact(&mut n_bytes)?;
    let n = u64::from_le_bytes(n_bytes);

    // The header-declared row count is untrusted input: it must agree with
    // the actual file size before any allocation happens
    let n_cells = n
        .checked_mul(n)
        .and_then(|cells| cells.checked_mul(8))
        .and_then(|bytes| bytes.checked_add(SIMILARITY_HEADER_LEN))
        .filter(|&expected| expected == file_len)
        .map(|_| (n * n) as usize)
        .ok_or_else(|| {
            RecEngineError::Artifact(format!(
                "Similarity file claims {} rows but is {} bytes",
                n, file_len
            ))
        })?;

    let mut cells = Vec::with_capacity(n_cells);
    let mut cell_bytes = [0u8; 8];
    for _ in 0..n_cells {
        reader.read_exact(&mut cell_bytes)?;
        cells.push(f64::from_le_bytes(cell_bytes));
    }

    SimilarityMatrix::from_raw(n as usize, cells)
        .ok_or_else(|| RecEngineError::Artifact("Similarity cell count mismatch".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::{similarity_from_tags, DEFAULT_MAX_FEATURES};

    fn sample_model() -> (Vec<MovieRecord>, SimilarityMatrix) {
        let movies = vec![
            MovieRecord::new(1, "Heat", "action heist crime"),
            MovieRecord::new(2, "Ronin", "action chase crime"),
            MovieRecord::new(3, "Amelie", "romance whimsy paris"),
        ];
        let tags: Vec<&str> = movies.iter().map(|m| m.tags.as_str()).collect();
        let similarity = similarity_from_tags(&tags, DEFAULT_MAX_FEATURES);
        (movies, similarity)
    }

    #[test]
    fn test_round_trip_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let (movies, similarity) = sample_model();

        save(dir.path(), &movies, &similarity).unwrap();
        let (loaded_movies, loaded_similarity) = load(dir.path()).unwrap();

        assert_eq!(movies, loaded_movies);
        assert_eq!(similarity.len(), loaded_similarity.len());
        for (a, b) in similarity.cells().iter().zip(loaded_similarity.cells()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_missing_artifacts_is_model_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, RecEngineError::ModelUnavailable));
    }

    #[test]
    fn test_missing_matrix_is_model_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let (movies, similarity) = sample_model();
        save(dir.path(), &movies, &similarity).unwrap();
        std::fs::remove_file(dir.path().join(SIMILARITY_FILE)).unwrap();

        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, RecEngineError::ModelUnavailable));
    }

    #[test]
    fn test_bad_magic_is_artifact_error() {
        let dir = tempfile::tempdir().unwrap();
        let (movies, similarity) = sample_model();
        save(dir.path(), &movies, &similarity).unwrap();
        std::fs::write(dir.path().join(SIMILARITY_FILE), b"not a similarity file").unwrap();

        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, RecEngineError::Artifact(_)));
    }

    #[test]
    fn test_oversized_row_count_is_artifact_error() {
        // Valid magic and version, but a row count no file could back
        let dir = tempfile::tempdir().unwrap();
        let (movies, similarity) = sample_model();
        save(dir.path(), &movies, &similarity).unwrap();

        let mut blob = Vec::new();
        blob.extend_from_slice(SIMILARITY_MAGIC);
        blob.push(SIMILARITY_VERSION);
        blob.extend_from_slice(&u64::MAX.to_le_bytes());
        std::fs::write(dir.path().join(SIMILARITY_FILE), blob).unwrap();

        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, RecEngineError::Artifact(_)));
    }

    #[test]
    fn test_truncated_matrix_is_artifact_error() {
        let dir = tempfile::tempdir().unwrap();
        let (movies, similarity) = sample_model();
        save(dir.path(), &movies, &similarity).unwrap();

        // Claim 3 rows but supply only one cell
        let mut blob = Vec::new();
        blob.extend_from_slice(SIMILARITY_MAGIC);
        blob.push(SIMILARITY_VERSION);
        blob.extend_from_slice(&3u64.to_le_bytes());
        blob.extend_from_slice(&1.0f64.to_le_bytes());
        std::fs::write(dir.path().join(SIMILARITY_FILE), blob).unwrap();

        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, RecEngineError::Artifact(_)));
    }

    #[test]
    fn test_trailing_bytes_are_artifact_error() {
        let dir = tempfile::tempdir().unwrap();
        let (movies, similarity) = sample_model();
        save(dir.path(), &movies, &similarity).unwrap();

        let path = dir.path().join(SIMILARITY_FILE);
        let mut blob = std::fs::read(&path).unwrap();
        blob.extend_from_slice(&0.0f64.to_le_bytes());
        std::fs::write(&path, blob).unwrap();

        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, RecEngineError::Artifact(_)));
    }

    #[test]
    fn test_row_count_mismatch_is_artifact_error() {
        let dir = tempfile::tempdir().unwrap();
        let (mut movies, similarity) = sample_model();
        movies.pop();
        save(dir.path(), &movies, &similarity).unwrap();

        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, RecEngineError::Artifact(_)));
    }
}
