//! Sentence segmentation
//!
//! Splits raw text on runs of sentence-terminating punctuation (`.`, `!`,
//! `?`), trims whitespace, and keeps only fragments strictly longer than a
//! configured character threshold. Order is always preserved.

/// Threshold used by summarization and document analysis.
pub const SUMMARY_MIN_CHARS: usize = 10;

/// Threshold used by key-note extraction.
pub const KEY_NOTE_MIN_CHARS: usize = 20;

/// Splits text into trimmed sentence candidates.
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    /// Trimmed fragments of at most this many characters are dropped.
    min_chars: usize,
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new(SUMMARY_MIN_CHARS)
    }
}

impl SentenceSegmenter {
    /// Create a segmenter that keeps fragments longer than `min_chars`.
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Split `text` into trimmed sentences, preserving document order.
    ///
    /// A document with no qualifying fragments yields an empty list; callers
    /// decide whether that is a validation failure or a passthrough case.
    pub fn segment(&self, text: &str) -> Vec<String> {
        text.split(|c: char| matches!(c, '.' | '!' | '?'))
            .map(str::trim)
            .filter(|s| s.chars().count() > self.min_chars)
            .map(str::to_owned)
            .collect()
    }
}
