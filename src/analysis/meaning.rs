//! Meaning synthesis
//!
//! Combines the document's most frequent content words with its opening and
//! closing sentences into a short structured description.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer;

/// Number of top words that make up the subject line.
const SUBJECT_WORDS: usize = 3;

/// Minimum length of a word that can be part of the subject.
const SUBJECT_MIN_LEN: usize = 4;

/// Breadth of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Comprehensive,
    Concise,
}

/// Synthesized meaning of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    /// Templated description leading with the main subject and the opening
    /// sentences.
    pub summary: String,
    /// Closing excerpt, falling back to the opening when the document has no
    /// distinguishable close.
    pub key_message: String,
    /// Comprehensive past ten sentences, concise otherwise.
    pub scope: Scope,
}

/// Build the meaning record from `text` and its segmented sentences.
pub fn synthesize(text: &str, sentences: &[String]) -> Meaning {
    let opening = sentences
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    let closing = sentences[sentences.len().saturating_sub(2)..].join(" ");

    let summary = format!("This document discusses {}. {opening}", main_subject(text));
    let key_message = if closing.is_empty() { opening } else { closing };
    let scope = if sentences.len() > 10 {
        Scope::Comprehensive
    } else {
        Scope::Concise
    };

    Meaning {
        summary,
        key_message,
        scope,
    }
}

/// The document's main subject: its three most frequent alphabetic words of
/// at least four letters, stopwords excluded, joined by commas.
///
/// Only purely alphabetic words qualify; a word attached to digits or
/// underscores is not a subject candidate. Falls back to "various topics"
/// when nothing qualifies.
pub fn main_subject(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stopwords = StopwordFilter::analysis();
    let mut counts: FxHashMap<&str, u32> = FxHashMap::default();
    let mut order: Vec<&str> = Vec::new();
    for word in tokenizer::words(&lowered) {
        if word.len() >= SUBJECT_MIN_LEN
            && word.bytes().all(|b| b.is_ascii_lowercase())
            && !stopwords.is_stopword(word)
        {
            let entry = counts.entry(word).or_insert(0);
            if *entry == 0 {
                order.push(word);
            }
            *entry += 1;
        }
    }

    if order.is_empty() {
        return "various topics".to_owned();
    }
    order.sort_by_key(|w| std::cmp::Reverse(counts[w]));
    order
        .iter()
        .take(SUBJECT_WORDS)
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}
