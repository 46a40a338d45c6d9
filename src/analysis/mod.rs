//! Rule-based document analysis
//!
//! Composes topic extraction, theme classification, intent detection,
//! meaning synthesis, and basic statistics into one [`DocumentAnalysis`]
//! record. The record is an immutable snapshot, recomputed in full on every
//! call.

pub mod intent;
pub mod meaning;
pub mod themes;
pub mod topics;

use serde::{Deserialize, Serialize};

use crate::error::DigestError;
use crate::nlp::segmenter::SentenceSegmenter;
use crate::nlp::tokenizer;
use self::intent::{Intent, IntentClassifier};
use self::meaning::Meaning;
use self::themes::{Theme, ThemeClassifier};
use self::topics::{Topic, TopicExtractor};

/// Basic size statistics for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStatistics {
    pub word_count: usize,
    pub sentence_count: usize,
    /// Rounded to the nearest whole word; 0 when no sentence qualified.
    pub avg_words_per_sentence: usize,
}

/// Full analysis record for a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub meaning: Meaning,
    pub topics: Vec<Topic>,
    pub themes: Vec<Theme>,
    pub intent: Intent,
    pub statistics: DocumentStatistics,
}

/// Rule-based document analyzer.
#[derive(Debug, Clone)]
pub struct DocumentAnalyzer {
    segmenter: SentenceSegmenter,
    topics: TopicExtractor,
    themes: ThemeClassifier,
    intent: IntentClassifier,
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentAnalyzer {
    pub fn new() -> Self {
        Self {
            segmenter: SentenceSegmenter::default(),
            topics: TopicExtractor::new(),
            themes: ThemeClassifier::new(),
            intent: IntentClassifier::new(),
        }
    }

    /// Swap in a custom theme classifier (e.g., extra categories).
    pub fn with_theme_classifier(mut self, themes: ThemeClassifier) -> Self {
        self.themes = themes;
        self
    }

    /// Swap in a custom intent classifier.
    pub fn with_intent_classifier(mut self, intent: IntentClassifier) -> Self {
        self.intent = intent;
        self
    }

    /// Analyze `text` into meaning, topics, themes, intent, and statistics.
    ///
    /// Fails with a validation error when `text` is empty or whitespace;
    /// every other input produces a record (a document with no qualifying
    /// sentences still gets statistics, a fallback theme, and an intent).
    pub fn explain(&self, text: &str) -> Result<DocumentAnalysis, DigestError> {
        trace_op!("explain_document");
        if text.trim().is_empty() {
            return Err(DigestError::validation("No text provided for analysis"));
        }

        let sentences = self.segmenter.segment(text);
        let word_count = tokenizer::word_count(text);
        let sentence_count = sentences.len();

        let meaning = meaning::synthesize(text, &sentences);
        let topics = self.topics.extract(text);
        let themes = self.themes.classify(text);
        let intent = self.intent.classify(text, sentence_count);

        let avg_words_per_sentence = if sentence_count == 0 {
            0
        } else {
            (word_count as f64 / sentence_count as f64).round() as usize
        };

        Ok(DocumentAnalysis {
            meaning,
            topics,
            themes,
            intent,
            statistics: DocumentStatistics {
                word_count,
                sentence_count,
                avg_words_per_sentence,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_empty_input_is_validation_error() {
        let err = DocumentAnalyzer::new().explain("  \n ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.message(), "No text provided for analysis");
    }

    #[test]
    fn test_statistics() {
        let analysis = DocumentAnalyzer::new()
            .explain("One two three four. Five six seven eight.")
            .unwrap();
        assert_eq!(analysis.statistics.word_count, 8);
        assert_eq!(analysis.statistics.sentence_count, 2);
        assert_eq!(analysis.statistics.avg_words_per_sentence, 4);
    }

    #[test]
    fn test_no_sentences_still_produces_a_record() {
        // "Hi there" trims to eight characters, below the threshold.
        let analysis = DocumentAnalyzer::new().explain("Hi there.").unwrap();
        assert_eq!(analysis.statistics.sentence_count, 0);
        assert_eq!(analysis.statistics.word_count, 2);
        assert_eq!(analysis.statistics.avg_words_per_sentence, 0);
        assert_eq!(analysis.themes[0].theme, "General");
        assert_eq!(analysis.intent.secondary, "General");
        assert_eq!(analysis.meaning.key_message, "");
    }

    #[test]
    fn test_instructional_document() {
        let analysis = DocumentAnalyzer::new()
            .explain("This guide explains how to bake bread at home from scratch.")
            .unwrap();
        assert_eq!(analysis.intent.primary, "Instructional");
        assert_eq!(analysis.intent.secondary, "Educational");
    }

    #[test]
    fn test_record_composes_all_sections() {
        let text = "Climate research shapes energy policy. Climate models predict \
                    warmer decades ahead. Climate adaptation requires sustained funding. \
                    Governments study climate impact on coastal communities.";
        let analysis = DocumentAnalyzer::new().explain(text).unwrap();

        assert_eq!(analysis.topics[0].topic, "climate");
        assert!(analysis
            .themes
            .iter()
            .any(|t| t.theme == "Environment" || t.theme == "Science"));
        // "research" appears, so the research rule fires.
        assert_eq!(analysis.intent.secondary, "Research-based");
        assert!(analysis.meaning.summary.contains("climate"));
        assert_eq!(analysis.statistics.sentence_count, 4);
    }
}
