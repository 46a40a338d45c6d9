//! Extractive summarizer
//!
//! Selection works in document order: segment, build the frequency table,
//! score every sentence with the summary profile, keep the top ~30% by
//! score, then restore original order and join. Sentences are never
//! rewritten.

use crate::error::DigestError;
use crate::nlp::frequency::FrequencyAnalyzer;
use crate::nlp::segmenter::{SentenceSegmenter, SUMMARY_MIN_CHARS};
use crate::nlp::stopwords::StopwordFilter;
use crate::scoring::profile::ScoringProfile;
use crate::scoring::scorer::SentenceScorer;

/// Configuration for the extractive summarizer.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Fraction of sentences to keep.
    pub ratio: f64,
    /// Lower bound on the number of selected sentences.
    pub min_sentences: usize,
    /// Documents with at most this many sentences are returned unchanged.
    pub passthrough_max: usize,
    /// Sentence fragments of at most this many characters are dropped.
    pub min_sentence_chars: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            ratio: 0.3,
            min_sentences: 3,
            passthrough_max: 3,
            min_sentence_chars: SUMMARY_MIN_CHARS,
        }
    }
}

/// Frequency-based extractive summarizer.
#[derive(Debug, Clone)]
pub struct ExtractiveSummarizer {
    config: SummarizerConfig,
    segmenter: SentenceSegmenter,
    frequency: FrequencyAnalyzer,
    scorer: SentenceScorer,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractiveSummarizer {
    /// Create a summarizer with default config.
    pub fn new() -> Self {
        Self::with_config(SummarizerConfig::default())
    }

    /// Create with custom config.
    pub fn with_config(config: SummarizerConfig) -> Self {
        let segmenter = SentenceSegmenter::new(config.min_sentence_chars);
        let frequency = FrequencyAnalyzer::new(StopwordFilter::summarization());
        // The summary scorer counts stopword tokens; only the frequency
        // table excludes them.
        let scorer = SentenceScorer::new(ScoringProfile::summary(), StopwordFilter::empty());
        Self {
            config,
            segmenter,
            frequency,
            scorer,
        }
    }

    /// Summarize `text` down to roughly `ratio` of its sentences.
    ///
    /// Documents yielding at most `passthrough_max` sentences (including
    /// none at all) are returned unchanged; there is nothing to shrink.
    /// Fails with a validation error when `text` is empty or whitespace.
    /// The summary's sentence count is at most
    /// `max(min_sentences, ceil(ratio * n))` and its order matches the
    /// source document.
    pub fn summarize(&self, text: &str) -> Result<String, DigestError> {
        trace_op!("summarize");
        if text.trim().is_empty() {
            return Err(DigestError::validation("No text provided for summarization"));
        }

        let sentences = self.segmenter.segment(text);
        if sentences.len() <= self.config.passthrough_max {
            return Ok(text.to_owned());
        }

        let target = (sentences.len() as f64 * self.config.ratio).ceil() as usize;
        let target = target.max(self.config.min_sentences);

        let table = self.frequency.analyze(text);
        let mut scored = self.scorer.score_all(&sentences, &table);

        // Stable sorts: equal scores keep document order.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(target);
        scored.sort_by_key(|s| s.index);

        let mut summary = scored
            .iter()
            .map(|s| s.text)
            .collect::<Vec<_>>()
            .join(". ");
        summary.push('.');
        Ok(summary)
    }
}
