//! Scoring profiles
//!
//! The summarization and key-note paths weight sentence position and length
//! differently; each ships as a preset here. Profiles are plain data, so a
//! consumer can supply its own multipliers without touching the scorer.

use serde::{Deserialize, Serialize};

/// Multipliers applied on top of a sentence's mean term weight.
///
/// Position boosts fire on the sentence's index relative to the document:
/// strictly below `opening_fraction * total` for the opening boost, strictly
/// above `closing_fraction * total` for the closing one. The length boost
/// fires when the qualifying-token count lands in
/// `[length_min, length_max]` (`length_max: None` leaves the range open).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringProfile {
    pub opening_fraction: f64,
    pub opening_boost: f64,
    pub closing_fraction: f64,
    pub closing_boost: f64,
    pub length_min: usize,
    pub length_max: Option<usize>,
    pub length_boost: f64,
}

impl ScoringProfile {
    /// Profile used by the extractive summarizer.
    ///
    /// Pairs with an empty stopword filter: the summarization scorer counts
    /// every token longer than three characters, stopword or not.
    pub fn summary() -> Self {
        Self {
            opening_fraction: 0.15,
            opening_boost: 1.5,
            closing_fraction: 0.85,
            closing_boost: 1.3,
            length_min: 8,
            length_max: Some(25),
            length_boost: 1.2,
        }
    }

    /// Profile used by the key-note extractor.
    ///
    /// Pairs with the key-note stopword list: its scorer drops stopwords
    /// before counting, a deliberate fork from the summarization path.
    pub fn key_notes() -> Self {
        Self {
            opening_fraction: 0.2,
            opening_boost: 1.3,
            closing_fraction: 0.8,
            closing_boost: 1.2,
            length_min: 11,
            length_max: None,
            length_boost: 1.1,
        }
    }
}
