//! Intent detection
//!
//! An ordered list of keyword rules evaluated first-match-wins over the
//! lowercased document, followed by a length-based fallback. Priority lives
//! in the rule order, not in nested branches, so each rule is testable on
//! its own.

use serde::{Deserialize, Serialize};

/// The document's detected intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub primary: String,
    pub secondary: String,
    pub purpose: String,
}

impl Intent {
    fn new(primary: &str, secondary: &str, purpose: &str) -> Self {
        Self {
            primary: primary.to_owned(),
            secondary: secondary.to_owned(),
            purpose: purpose.to_owned(),
        }
    }
}

/// One keyword rule: fires when any marker appears in the document.
#[derive(Debug, Clone)]
pub struct IntentRule {
    pub markers: Vec<String>,
    pub primary: String,
    pub secondary: String,
    pub purpose: String,
}

impl IntentRule {
    pub fn new(markers: &[&str], primary: &str, secondary: &str, purpose: &str) -> Self {
        Self {
            markers: markers.iter().map(|m| (*m).to_owned()).collect(),
            primary: primary.to_owned(),
            secondary: secondary.to_owned(),
            purpose: purpose.to_owned(),
        }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.markers.iter().any(|m| lowered.contains(m.as_str()))
    }

    fn intent(&self) -> Intent {
        Intent {
            primary: self.primary.clone(),
            secondary: self.secondary.clone(),
            purpose: self.purpose.clone(),
        }
    }
}

fn builtin_rules() -> Vec<IntentRule> {
    vec![
        IntentRule::new(
            &["how to", "guide", "tutorial"],
            "Instructional",
            "Educational",
            "To teach or guide the reader through a process",
        ),
        IntentRule::new(
            &["research", "study", "findings"],
            "Informative",
            "Research-based",
            "To present research findings or analysis",
        ),
        IntentRule::new(
            &["should", "must", "recommend"],
            "Persuasive",
            "Advisory",
            "To convince or recommend a course of action",
        ),
    ]
}

/// Detects a document's intent by ordered rule evaluation.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
    /// Sentence count above which an unmatched document reads as
    /// comprehensive rather than general.
    comprehensive_min: usize,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Classifier with the built-in rule order.
    pub fn new() -> Self {
        Self {
            rules: builtin_rules(),
            comprehensive_min: 20,
        }
    }

    /// Classifier with a custom ordered rule list.
    pub fn with_rules(rules: Vec<IntentRule>) -> Self {
        Self {
            rules,
            comprehensive_min: 20,
        }
    }

    /// Classify `text`; `sentence_count` feeds the length-based fallback.
    ///
    /// Exactly one intent per document: the first matching rule wins.
    pub fn classify(&self, text: &str, sentence_count: usize) -> Intent {
        let lowered = text.to_lowercase();
        for rule in &self.rules {
            if rule.matches(&lowered) {
                return rule.intent();
            }
        }

        if sentence_count > self.comprehensive_min {
            return Intent::new(
                "Informative",
                "Comprehensive",
                "To provide detailed information on a topic",
            );
        }
        Intent::new(
            "Informative",
            "General",
            "To convey information to the reader",
        )
    }
}
