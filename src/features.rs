//! Feature builder: turns raw movie metadata into the canonical tag stream.
//!
//! Each movie is reduced to a single lower-cased, space-joined bag of tokens
//! built from five groups in a fixed order: overview words, genres, keywords,
//! lead cast, director(s). The transform is pure and per-movie; nothing here
//! depends on the rest of the catalog.

use crate::core::{MovieRecord, RawMovie};

/// How many genre names contribute to the tags
pub const MAX_GENRES: usize = 3;
/// How many keyword names contribute to the tags
pub const MAX_KEYWORDS: usize = 3;
/// How many lead cast names contribute to the tags
pub const MAX_CAST: usize = 3;
/// Crew job whose members count as directors
pub const DIRECTOR_JOB: &str = "Director";

/// Collapse internal whitespace so a multi-word name becomes one token
/// ("Tom Hanks" -> "TomHanks"), keeping it distinct from common words.
fn fuse_name(name: &str) -> String {
    name.split_whitespace().collect()
}

/// Build the tag stream for one movie.
///
/// Group order is fixed: overview words, then up to [`MAX_GENRES`] genres,
/// up to [`MAX_KEYWORDS`] keywords, up to [`MAX_CAST`] cast names (all in
/// source order), then every crew member whose job is exactly
/// [`DIRECTOR_JOB`]. Missing fields contribute nothing; the result is always
/// a valid (possibly empty) string.
pub fn build_tags(raw: &RawMovie) -> String {
    let mut tokens: Vec<String> = raw
        .overview
        .split_whitespace()
        .map(str::to_string)
        .collect();

    tokens.extend(raw.genres.iter().take(MAX_GENRES).map(|g| fuse_name(g)));
    tokens.extend(raw.keywords.iter().take(MAX_KEYWORDS).map(|k| fuse_name(k)));
    tokens.extend(raw.cast.iter().take(MAX_CAST).map(|c| fuse_name(c)));
    tokens.extend(
        raw.crew
            .iter()
            .filter(|member| member.job == DIRECTOR_JOB)
            .map(|member| fuse_name(&member.name)),
    );

    tokens.join(" ").to_lowercase()
}

/// Normalize one raw movie into a movie table row
pub fn normalize(raw: &RawMovie) -> MovieRecord {
    MovieRecord {
        id: raw.id,
        title: raw.title.clone(),
        tags: build_tags(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CrewMember;

    #[test]
    fn test_tags_group_order_and_lowercasing() {
        let raw = RawMovie {
            id: 1,
            title: "Test".to_string(),
            overview: "A Bank Heist".to_string(),
            genres: vec!["Action".to_string(), "Crime".to_string()],
            keywords: vec!["bank robbery".to_string()],
            cast: vec!["Tom Hanks".to_string()],
            crew: vec![CrewMember::new("Jane Doe", "Director")],
        };

        assert_eq!(
            build_tags(&raw),
            "a bank heist action crime bankrobbery tomhanks janedoe"
        );
    }

    #[test]
    fn test_tags_caps_at_three_per_group() {
        let raw = RawMovie {
            id: 1,
            genres: (1..=5).map(|i| format!("G{}", i)).collect(),
            keywords: (1..=5).map(|i| format!("K{}", i)).collect(),
            cast: (1..=5).map(|i| format!("C{}", i)).collect(),
            ..Default::default()
        };

        assert_eq!(build_tags(&raw), "g1 g2 g3 k1 k2 k3 c1 c2 c3");
    }

    #[test]
    fn test_tags_all_directors_included() {
        let raw = RawMovie {
            id: 1,
            crew: vec![
                CrewMember::new("Lana Wachowski", "Director"),
                CrewMember::new("Bill Pope", "Director of Photography"),
                CrewMember::new("Lilly Wachowski", "Director"),
            ],
            ..Default::default()
        };

        assert_eq!(build_tags(&raw), "lanawachowski lillywachowski");
    }

    #[test]
    fn test_empty_metadata_yields_overview_only() {
        let raw = RawMovie {
            id: 1,
            title: "Quiet".to_string(),
            overview: "A quiet story".to_string(),
            ..Default::default()
        };

        assert_eq!(build_tags(&raw), "a quiet story");
    }

    #[test]
    fn test_fully_empty_movie_yields_empty_tags() {
        let raw = RawMovie::new(1, "Empty");
        assert_eq!(build_tags(&raw), "");
    }

    #[test]
    fn test_name_whitespace_collapsed() {
        let raw = RawMovie {
            id: 1,
            cast: vec!["Daniel  Day Lewis".to_string()],
            ..Default::default()
        };

        assert_eq!(build_tags(&raw), "danieldaylewis");
    }

    #[test]
    fn test_normalize_carries_id_and_title() {
        let raw = RawMovie {
            id: 603,
            title: "The Matrix".to_string(),
            overview: "Welcome to the real world".to_string(),
            ..Default::default()
        };

        let record = normalize(&raw);
        assert_eq!(record.id, 603);
        assert_eq!(record.title, "The Matrix");
        assert_eq!(record.tags, "welcome to the real world");
    }
}
