//! Extractive summarization, key-note extraction, and rule-based document
//! analysis for plain text.
//!
//! No learned models: everything is built from three primitives (sentence
//! segmentation, normalized term-frequency tables, and position-/length-aware
//! sentence scoring). Output sentences are always selected from the original
//! text, never rewritten.
//!
//! # Quick start
//!
//! ```
//! let text = "Rust is a systems programming language. It focuses on memory \
//!             safety without garbage collection. The compiler enforces \
//!             ownership rules at build time. Many teams adopt it for \
//!             reliability under load. Performance stays close to C.";
//!
//! let summary = docdigest::summarize(text).unwrap();
//! assert!(summary.ends_with('.'));
//!
//! let analysis = docdigest::explain_document(text).unwrap();
//! assert!(analysis.statistics.sentence_count > 0);
//! ```
//!
//! # Entry points
//!
//! | Operation | Returns |
//! |-----------|---------|
//! | [`summarize`] | ~30% of sentences, document order preserved |
//! | [`key_notes`] | 5-10 key-point sentences, document order preserved |
//! | [`explain_document`] | [`DocumentAnalysis`]: meaning, topics, themes, intent, statistics |
//!
//! Every operation is a pure function of its input: no cross-call state, no
//! I/O, safe to invoke from any number of threads. Failures come back as
//! [`DigestError`] values; nothing panics past the crate boundary.
//!
//! The underlying primitives ([`nlp`], [`scoring`]) are public so downstream
//! consumers (e.g., a question-answering layer over the same document) can
//! compose their own selection rules.

// Enter a tracing span for a public operation when the `tracing` feature is
// enabled. When disabled, this expands to nothing.
macro_rules! trace_op {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("digest_op", op = $name).entered();
    };
}

pub mod analysis;
pub mod error;
pub mod keynotes;
pub mod nlp;
pub mod scoring;
pub mod summarizer;

pub use crate::analysis::intent::Intent;
pub use crate::analysis::meaning::{Meaning, Scope};
pub use crate::analysis::themes::{Confidence, Theme, ThemeCategory};
pub use crate::analysis::topics::{Relevance, Topic};
pub use crate::analysis::{DocumentAnalysis, DocumentAnalyzer, DocumentStatistics};
pub use crate::error::{DigestError, ErrorKind};
pub use crate::keynotes::extractor::{KeyNoteConfig, KeyNoteExtractor, DEFAULT_NOTE_COUNT};
pub use crate::summarizer::extractive::{ExtractiveSummarizer, SummarizerConfig};

/// Summarize `text` down to roughly 30% of its sentences.
///
/// Documents with three or fewer sentences come back unchanged. Fails with a
/// validation error on empty input.
pub fn summarize(text: &str) -> Result<String, DigestError> {
    ExtractiveSummarizer::new().summarize(text)
}

/// Extract up to `count` key-point sentences from `text` (capped at 10).
///
/// Fails with a validation error on empty input or when no sentence survives
/// segmentation.
pub fn key_notes(text: &str, count: usize) -> Result<Vec<String>, DigestError> {
    KeyNoteExtractor::new().extract(text, count)
}

/// [`key_notes`] with the default request of [`DEFAULT_NOTE_COUNT`] notes.
pub fn key_notes_default(text: &str) -> Result<Vec<String>, DigestError> {
    KeyNoteExtractor::new().extract(text, DEFAULT_NOTE_COUNT)
}

/// Analyze `text` into a structured [`DocumentAnalysis`] record.
pub fn explain_document(text: &str) -> Result<DocumentAnalysis, DigestError> {
    DocumentAnalyzer::new().explain(text)
}
