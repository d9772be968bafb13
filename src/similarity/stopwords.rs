//! English stop words removed from the tag corpus before vocabulary fitting.
//!
//! Common function words carry no signal for content similarity and would
//! otherwise crowd the capped vocabulary. The list follows the usual
//! NLTK/scikit-learn sets.

/// Common English function words excluded from the vocabulary
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    // Articles
    "a", "an", "the",
    // Pronouns
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    // Question words
    "what", "which", "who", "whom", "whose", "why", "when", "where", "how",
    // Prepositions
    "about", "above", "across", "after", "against", "along", "among", "around", "at",
    "before", "behind", "below", "beneath", "beside", "between", "beyond", "by", "down",
    "during", "for", "from", "in", "inside", "into", "near", "of", "off", "on", "onto",
    "out", "outside", "over", "through", "throughout", "to", "toward", "under",
    "underneath", "until", "up", "upon", "with", "within", "without",
    // Conjunctions
    "and", "as", "because", "but", "if", "or", "since", "so", "than", "that", "though",
    "unless", "while",
    // Auxiliary and modal verbs
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "would", "should", "could", "ought", "can",
    "may", "might", "must", "will", "shall",
    // Quantifiers and determiners
    "all", "any", "both", "each", "every", "few", "more", "most", "much", "neither",
    "no", "none", "not", "one", "other", "same", "several", "some", "such", "very",
    "too", "only", "own", "then", "there", "these", "this", "those", "just", "now",
    "here",
    // Other high-frequency words
    "again", "also", "another", "back", "even", "ever", "get", "give", "go", "got",
    "made", "make", "say", "see", "take", "way",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_words_present() {
        assert!(ENGLISH_STOP_WORDS.contains(&"the"));
        assert!(ENGLISH_STOP_WORDS.contains(&"and"));
        assert!(ENGLISH_STOP_WORDS.contains(&"with"));
    }

    #[test]
    fn test_content_words_absent() {
        assert!(!ENGLISH_STOP_WORDS.contains(&"action"));
        assert!(!ENGLISH_STOP_WORDS.contains(&"heist"));
    }

    #[test]
    fn test_list_is_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for word in ENGLISH_STOP_WORDS {
            assert_eq!(*word, word.to_lowercase());
            assert!(seen.insert(*word), "duplicate stop word: {}", word);
        }
    }
}
