use serde::{Deserialize, Serialize};

use crate::core::MovieRecord;

/// One recommended movie: the (id, title) pair exposed to the serving layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: u64,
    pub title: String,
}

impl Recommendation {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

impl From<&MovieRecord> for Recommendation {
    fn from(record: &MovieRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
        }
    }
}

/// Watchlist lookup response: which title anchored the recommendations,
/// plus the ranked neighbors themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendResponse {
    /// The first watchlist title that was found in the catalog
    pub source_title: String,

    /// Top-k most similar other movies, best first
    pub recommendations: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_from_record() {
        let record = MovieRecord::new(27205, "Inception", "dream heist");
        let rec = Recommendation::from(&record);
        assert_eq!(rec.id, 27205);
        assert_eq!(rec.title, "Inception");
    }

    #[test]
    fn test_response_serialization() {
        let response = RecommendResponse {
            source_title: "Inception".to_string(),
            recommendations: vec![Recommendation::new(155, "The Dark Knight")],
        };
        let json = serde_json::to_string(&response).unwrap();
        let back: RecommendResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response, back);
    }
}
