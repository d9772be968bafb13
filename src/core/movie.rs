use serde::{Deserialize, Serialize};

/// One entry of a paginated popular listing: just enough to fetch details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieListing {
    pub id: u64,
    #[serde(default)]
    pub title: String,
}

/// Crew credit with the person's name and job role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub job: String,
}

impl CrewMember {
    pub fn new(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job: job.into(),
        }
    }
}

/// Raw movie metadata as fetched from a provider, before tag extraction.
///
/// Transient: never persisted in this form. Every field except `id` degrades
/// to empty when the source payload omits it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawMovie {
    /// Unique ID from provider
    pub id: u64,

    /// Movie title
    #[serde(default)]
    pub title: String,

    /// Free-text plot overview
    #[serde(default)]
    pub overview: String,

    /// Genre names
    #[serde(default)]
    pub genres: Vec<String>,

    /// Keyword names
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Cast member names, in billing order
    #[serde(default)]
    pub cast: Vec<String>,

    /// Crew credits (name + job)
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

impl RawMovie {
    /// Create a new RawMovie with required fields
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ..Default::default()
        }
    }
}

/// One row of the persisted movie table: id, title, and the lower-cased
/// space-joined tag stream derived from the raw metadata.
///
/// Immutable after the build; row order is significant because it matches the
/// similarity matrix row/column indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: u64,
    pub title: String,
    pub tags: String,
}

impl MovieRecord {
    pub fn new(id: u64, title: impl Into<String>, tags: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            tags: tags.into(),
        }
    }
}
