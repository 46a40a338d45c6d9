//! Stopword filtering
//!
//! Each consumer of the crate carries its own stopword list: the
//! summarization, key-note, and analysis profiles differ deliberately, and
//! unifying them would change observable output. The profile lists ship as
//! built-in constructors; language lists for callers composing their own
//! pipelines come from the `stop-words` crate.
//!
//! Lists are lowercase. Callers pass already-lowercased tokens, which keeps
//! membership checks allocation-free on the scoring hot path.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Function words excluded when building the summarization frequency table.
const SUMMARIZATION: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "will", "with", "this", "but", "they", "have",
    "had", "what", "when", "where", "who", "which", "why", "how",
];

/// Function words excluded by the key-note frequency table and scorer. A
/// superset of the summarization list.
const KEY_NOTES: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "will", "with", "this", "but", "they", "have",
    "had", "what", "when", "where", "who", "which", "why", "how", "all", "each", "every", "both",
    "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same",
    "so", "than", "too", "very", "can", "just", "should", "now",
];

/// Function words excluded by topic extraction and subject identification.
const ANALYSIS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
];

/// A set of lowercase words excluded from frequency and scoring computations.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// A filter that removes nothing.
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// The summarization profile's list (36 words).
    pub fn summarization() -> Self {
        Self::from_list(SUMMARIZATION)
    }

    /// The key-note profile's list (60 words).
    pub fn key_notes() -> Self {
        Self::from_list(KEY_NOTES)
    }

    /// The document-analysis profile's list (39 words).
    pub fn analysis() -> Self {
        Self::from_list(ANALYSIS)
    }

    /// Build a filter from a custom word list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// An ecosystem stopword list for `language` (e.g. `"en"`, `"german"`).
    ///
    /// Unknown languages fall back to English. Intended for downstream
    /// consumers building their own pipelines on the shared primitives; the
    /// crate's own operations use the fixed profile lists above.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            _ => LANGUAGE::English,
        };
        Self {
            stopwords: get(lang).into_iter().collect(),
        }
    }

    /// Add extra words to the filter.
    pub fn add(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Membership check. Expects a lowercase token.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_are_distinct() {
        let summary = StopwordFilter::summarization();
        let key_notes = StopwordFilter::key_notes();
        let analysis = StopwordFilter::analysis();

        assert_eq!(summary.len(), 36);
        assert_eq!(key_notes.len(), 60);
        assert_eq!(analysis.len(), 39);

        // "should" only matters to the key-note path.
        assert!(key_notes.is_stopword("should"));
        assert!(!summary.is_stopword("should"));

        // "would" only matters to the analysis path.
        assert!(analysis.is_stopword("would"));
        assert!(!summary.is_stopword("would"));

        // "how" is a question word in two profiles but not the third.
        assert!(summary.is_stopword("how"));
        assert!(key_notes.is_stopword("how"));
        assert!(!analysis.is_stopword("how"));
    }

    #[test]
    fn test_content_words_pass() {
        let filter = StopwordFilter::summarization();
        assert!(!filter.is_stopword("machine"));
        assert!(!filter.is_stopword("climate"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();
        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_custom_list() {
        let mut filter = StopwordFilter::from_list(&["Custom", "words"]);
        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add(&["extra"]);
        assert!(filter.is_stopword("extra"));
    }

    #[test]
    fn test_language_lists_load() {
        let en = StopwordFilter::for_language("en");
        assert!(!en.is_empty());
        assert!(en.is_stopword("the"));

        let de = StopwordFilter::for_language("german");
        assert!(de.is_stopword("und"));

        // Unknown language falls back to English.
        let fallback = StopwordFilter::for_language("klingon");
        assert!(fallback.is_stopword("the"));
    }
}
