//! Frequency-based sentence scoring
//!
//! A sentence's base score is the mean table weight of its qualifying
//! tokens; dividing by the token count avoids biasing toward long
//! sentences. The profile's position and length multipliers are applied on
//! top. Scoring a whole document fans out across a rayon pool; each score
//! depends only on (sentence, table, index, total), so results are
//! deterministic regardless of thread count.

use rayon::prelude::*;
use serde::Serialize;

use crate::nlp::frequency::FrequencyTable;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer;
use crate::scoring::profile::ScoringProfile;

/// Tokens must be strictly longer than this to count toward a score.
const MIN_TOKEN_LEN: usize = 3;

/// A sentence with its score and original document position.
///
/// Borrows the sentence text; selection happens before any output is
/// materialized.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredSentence<'a> {
    pub text: &'a str,
    pub score: f64,
    pub index: usize,
}

/// Scores sentences against a frequency table.
#[derive(Debug, Clone)]
pub struct SentenceScorer {
    profile: ScoringProfile,
    stopwords: StopwordFilter,
}

impl SentenceScorer {
    /// Create a scorer from a profile and the stopword filter applied to
    /// sentence tokens (pass [`StopwordFilter::empty`] to count stopwords).
    pub fn new(profile: ScoringProfile, stopwords: StopwordFilter) -> Self {
        Self { profile, stopwords }
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    /// Score one sentence at `index` out of `total` document sentences.
    ///
    /// A sentence with no qualifying tokens scores 0. Scores are always
    /// non-negative; ties are left for the caller's stable sort to resolve
    /// in original document order.
    pub fn score(&self, sentence: &str, table: &FrequencyTable, index: usize, total: usize) -> f64 {
        let lowered = sentence.to_lowercase();
        let mut token_count = 0usize;
        let mut sum = 0.0;
        for word in tokenizer::words(&lowered) {
            if word.len() > MIN_TOKEN_LEN && !self.stopwords.is_stopword(word) {
                token_count += 1;
                sum += table.weight(word);
            }
        }
        if token_count == 0 {
            return 0.0;
        }

        let mut score = sum / token_count as f64;

        let position = index as f64;
        let n = total as f64;
        if position < n * self.profile.opening_fraction {
            score *= self.profile.opening_boost;
        }
        if position > n * self.profile.closing_fraction {
            score *= self.profile.closing_boost;
        }

        let in_range = token_count >= self.profile.length_min
            && self.profile.length_max.map_or(true, |max| token_count <= max);
        if in_range {
            score *= self.profile.length_boost;
        }

        score
    }

    /// Score every sentence of a document.
    pub fn score_all<'a>(
        &self,
        sentences: &'a [String],
        table: &FrequencyTable,
    ) -> Vec<ScoredSentence<'a>> {
        let total = sentences.len();
        sentences
            .par_iter()
            .enumerate()
            .map(|(index, sentence)| ScoredSentence {
                text: sentence.as_str(),
                score: self.score(sentence, table, index, total),
                index,
            })
            .collect()
    }
}
