//! Key-note extractor
//!
//! Same machinery as the summarizer (segment, frequency table, score,
//! select, restore order) with its own thresholds: sentences must run
//! longer than 20 characters, the stopword list is wider, and the scorer
//! drops stopwords from sentence tokens before averaging. The result count
//! is clamped to a 5-10 band but never padded past what segmentation
//! produced.

use crate::error::DigestError;
use crate::nlp::frequency::FrequencyAnalyzer;
use crate::nlp::segmenter::{SentenceSegmenter, KEY_NOTE_MIN_CHARS};
use crate::nlp::stopwords::StopwordFilter;
use crate::scoring::profile::ScoringProfile;
use crate::scoring::scorer::SentenceScorer;

/// Notes requested when the caller does not specify a count.
pub const DEFAULT_NOTE_COUNT: usize = 7;

/// Configuration for key-note extraction.
#[derive(Debug, Clone)]
pub struct KeyNoteConfig {
    /// Preferred floor on the returned count. Truncation only: a document
    /// with fewer qualifying sentences returns what it has.
    pub min_notes: usize,
    /// Hard ceiling on the returned count.
    pub max_notes: usize,
    /// Documents with at most this many sentences are returned verbatim.
    pub passthrough_max: usize,
    /// Sentence fragments of at most this many characters are dropped.
    pub min_sentence_chars: usize,
}

impl Default for KeyNoteConfig {
    fn default() -> Self {
        Self {
            min_notes: 5,
            max_notes: 10,
            passthrough_max: 5,
            min_sentence_chars: KEY_NOTE_MIN_CHARS,
        }
    }
}

/// Extracts the key-point sentences of a document.
#[derive(Debug, Clone)]
pub struct KeyNoteExtractor {
    config: KeyNoteConfig,
    segmenter: SentenceSegmenter,
    frequency: FrequencyAnalyzer,
    scorer: SentenceScorer,
}

impl Default for KeyNoteExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyNoteExtractor {
    /// Create an extractor with default config.
    pub fn new() -> Self {
        Self::with_config(KeyNoteConfig::default())
    }

    /// Create with custom config.
    pub fn with_config(config: KeyNoteConfig) -> Self {
        let segmenter = SentenceSegmenter::new(config.min_sentence_chars);
        let frequency = FrequencyAnalyzer::new(StopwordFilter::key_notes());
        let scorer = SentenceScorer::new(ScoringProfile::key_notes(), StopwordFilter::key_notes());
        Self {
            config,
            segmenter,
            frequency,
            scorer,
        }
    }

    /// Extract up to `count` key notes from `text`, in document order.
    ///
    /// Fails with a validation error when `text` is empty or when no
    /// sentence survives segmentation. Documents of at most
    /// `passthrough_max` sentences come back verbatim; otherwise the
    /// `min(count, max_notes)` top-scoring sentences are selected and the
    /// final count clamped to `[min_notes, max_notes]` by truncation.
    pub fn extract(&self, text: &str, count: usize) -> Result<Vec<String>, DigestError> {
        trace_op!("key_notes");
        if text.trim().is_empty() {
            return Err(DigestError::validation(
                "No text provided for key notes generation",
            ));
        }

        let sentences = self.segmenter.segment(text);
        if sentences.is_empty() {
            return Err(DigestError::validation("No sentences found in text"));
        }
        if sentences.len() <= self.config.passthrough_max {
            return Ok(sentences);
        }

        let table = self.frequency.analyze(text);
        let mut scored = self.scorer.score_all(&sentences, &table);

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(count.min(self.config.max_notes));
        scored.sort_by_key(|s| s.index);

        let final_count = scored
            .len()
            .min(self.config.max_notes)
            .max(self.config.min_notes);
        Ok(scored
            .iter()
            .take(final_count)
            .map(|s| s.text.to_owned())
            .collect())
    }
}
