//! Normalized term-frequency tables
//!
//! A [`FrequencyTable`] maps lowercase tokens to weights in `[0, 1]`,
//! normalized so the most frequent token weighs exactly 1.0. Stopwords and
//! short tokens never enter the table; which stopword list applies is the
//! caller's profile decision.

use rustc_hash::FxHashMap;

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer;

/// Builds [`FrequencyTable`]s for a fixed stopword configuration.
#[derive(Debug, Clone)]
pub struct FrequencyAnalyzer {
    stopwords: StopwordFilter,
    /// Tokens must be strictly longer than this many characters.
    min_token_len: usize,
}

impl FrequencyAnalyzer {
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self {
            stopwords,
            min_token_len: 3,
        }
    }

    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len;
        self
    }

    /// Build the normalized frequency table for `text`.
    ///
    /// Lowercases the text, counts qualifying tokens in one linear pass, then
    /// divides every count by the maximum. Returns an empty table when no
    /// token qualifies, so callers never see a division by zero.
    pub fn analyze(&self, text: &str) -> FrequencyTable {
        let lowered = text.to_lowercase();
        let mut counts: FxHashMap<&str, u32> = FxHashMap::default();
        for word in tokenizer::words(&lowered) {
            if word.len() > self.min_token_len && !self.stopwords.is_stopword(word) {
                *counts.entry(word).or_insert(0) += 1;
            }
        }

        let max = counts.values().copied().max().unwrap_or(0);
        if max == 0 {
            return FrequencyTable::default();
        }

        let weights = counts
            .into_iter()
            .map(|(word, count)| (word.to_owned(), f64::from(count) / f64::from(max)))
            .collect();
        FrequencyTable { weights }
    }
}

/// Lowercase token → normalized weight in `[0, 1]`.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    weights: FxHashMap<String, f64>,
}

impl FrequencyTable {
    /// Weight of `token`, 0.0 when absent. Expects a lowercase token.
    pub fn weight(&self, token: &str) -> f64 {
        self.weights.get(token).copied().unwrap_or(0.0)
    }

    /// Largest weight in the table; 0.0 when empty. Exactly 1.0 whenever at
    /// least one token qualified.
    pub fn max_weight(&self) -> f64 {
        self.weights.values().fold(0.0, |acc, &w| acc.max(w))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(w, &weight)| (w.as_str(), weight))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
