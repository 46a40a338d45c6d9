//! Topic extraction
//!
//! Ranks frequent content words into a relevance-tiered topic list.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer;

/// Relevance tier for an extracted topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relevance {
    High,
    Medium,
    Low,
}

/// A frequent content word and its relevance tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub topic: String,
    pub relevance: Relevance,
}

/// Configuration for topic extraction.
#[derive(Debug, Clone)]
pub struct TopicExtractorConfig {
    /// Maximum number of topics returned.
    pub max_topics: usize,
    /// Tokens must be strictly longer than this many characters.
    pub min_token_len: usize,
    /// Occurrence counts above this are high relevance.
    pub high_threshold: u32,
    /// Occurrence counts above this (but not high) are medium relevance.
    pub medium_threshold: u32,
}

impl Default for TopicExtractorConfig {
    fn default() -> Self {
        Self {
            max_topics: 8,
            min_token_len: 4,
            high_threshold: 5,
            medium_threshold: 2,
        }
    }
}

/// Extracts the most frequent content words of a document.
#[derive(Debug, Clone)]
pub struct TopicExtractor {
    config: TopicExtractorConfig,
    stopwords: StopwordFilter,
}

impl Default for TopicExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicExtractor {
    pub fn new() -> Self {
        Self::with_config(TopicExtractorConfig::default())
    }

    pub fn with_config(config: TopicExtractorConfig) -> Self {
        Self {
            config,
            stopwords: StopwordFilter::analysis(),
        }
    }

    /// Rank the frequent content words of `text` by descending count.
    ///
    /// Ties keep first-encountered order (stable sort over the insertion
    /// sequence), so output is deterministic.
    pub fn extract(&self, text: &str) -> Vec<Topic> {
        let lowered = text.to_lowercase();
        let mut counts: FxHashMap<&str, u32> = FxHashMap::default();
        let mut order: Vec<&str> = Vec::new();
        for word in tokenizer::words(&lowered) {
            if word.len() > self.config.min_token_len && !self.stopwords.is_stopword(word) {
                let entry = counts.entry(word).or_insert(0);
                if *entry == 0 {
                    order.push(word);
                }
                *entry += 1;
            }
        }

        order.sort_by_key(|w| std::cmp::Reverse(counts[w]));
        order
            .iter()
            .take(self.config.max_topics)
            .map(|w| Topic {
                topic: (*w).to_owned(),
                relevance: self.tier(counts[w]),
            })
            .collect()
    }

    fn tier(&self, count: u32) -> Relevance {
        if count > self.config.high_threshold {
            Relevance::High
        } else if count > self.config.medium_threshold {
            Relevance::Medium
        } else {
            Relevance::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_word_ranks_first_with_high_relevance() {
        let text = "Climate shifts. Climate research tracks climate data, and climate \
                    policy follows climate economics through climate cycles.";
        let topics = TopicExtractor::new().extract(text);
        assert_eq!(topics[0].topic, "climate");
        assert_eq!(topics[0].relevance, Relevance::High);
    }

    #[test]
    fn test_at_most_eight_topics() {
        let text = "alpha bravo charlie delta echoes foxtrot golfs hotel indigo juliet";
        let topics = TopicExtractor::new().extract(text);
        assert_eq!(topics.len(), 8);
    }

    #[test]
    fn test_descending_order_with_stable_ties() {
        let topics = TopicExtractor::new()
            .extract("mango mango mango papaya papaya guava lychee");
        let names: Vec<&str> = topics.iter().map(|t| t.topic.as_str()).collect();
        // guava and lychee tie at one occurrence and keep document order.
        assert_eq!(names, vec!["mango", "papaya", "guava", "lychee"]);
    }

    #[test]
    fn test_tier_thresholds() {
        let extractor = TopicExtractor::new();
        assert_eq!(extractor.tier(6), Relevance::High);
        assert_eq!(extractor.tier(5), Relevance::Medium);
        assert_eq!(extractor.tier(3), Relevance::Medium);
        assert_eq!(extractor.tier(2), Relevance::Low);
        assert_eq!(extractor.tier(1), Relevance::Low);
    }

    #[test]
    fn test_short_words_and_stopwords_excluded() {
        // "data" has exactly four characters and "there" is an analysis
        // stopword: neither can become a topic.
        let topics = TopicExtractor::new().extract("data data data there there weather");
        let names: Vec<&str> = topics.iter().map(|t| t.topic.as_str()).collect();
        assert_eq!(names, vec!["weather"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(TopicExtractor::new().extract("").is_empty());
    }
}
