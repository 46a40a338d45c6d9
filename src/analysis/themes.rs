//! Theme classification
//!
//! Matches labeled keyword sets against the lowercased document by substring
//! containment; a keyword counts even inside a longer word. Categories are
//! a data table, so adding one never touches the classifier's control flow.

use serde::{Deserialize, Serialize};

/// Confidence tier for a matched theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
}

/// A theme label with its confidence tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub theme: String,
    pub confidence: Confidence,
}

/// A labeled keyword set the classifier matches against a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeCategory {
    pub label: String,
    pub keywords: Vec<String>,
}

impl ThemeCategory {
    pub fn new(label: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            label: label.into(),
            keywords: keywords.iter().map(|k| (*k).to_owned()).collect(),
        }
    }
}

fn builtin_categories() -> Vec<ThemeCategory> {
    vec![
        ThemeCategory::new(
            "Technology",
            &["technology", "software", "digital", "computer", "system", "data"],
        ),
        ThemeCategory::new(
            "Business",
            &["business", "company", "market", "customer", "revenue", "strategy"],
        ),
        ThemeCategory::new(
            "Education",
            &["education", "learning", "student", "teach", "knowledge", "skill"],
        ),
        ThemeCategory::new(
            "Science",
            &["research", "study", "experiment", "theory", "scientific", "analysis"],
        ),
        ThemeCategory::new(
            "Health",
            &["health", "medical", "patient", "treatment", "disease", "care"],
        ),
        ThemeCategory::new(
            "Environment",
            &["environment", "climate", "nature", "sustainability", "energy"],
        ),
        ThemeCategory::new(
            "Social",
            &["social", "community", "people", "society", "culture", "human"],
        ),
    ]
}

/// Assigns theme labels with confidence tiers.
#[derive(Debug, Clone)]
pub struct ThemeClassifier {
    categories: Vec<ThemeCategory>,
    /// Distinct keywords that must appear for a category to qualify.
    min_matches: usize,
    /// Match counts at or above this earn high confidence.
    high_matches: usize,
}

impl Default for ThemeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeClassifier {
    /// Classifier over the built-in seven-category table.
    pub fn new() -> Self {
        Self::with_categories(builtin_categories())
    }

    /// Classifier over a custom category table.
    pub fn with_categories(categories: Vec<ThemeCategory>) -> Self {
        Self {
            categories,
            min_matches: 2,
            high_matches: 4,
        }
    }

    pub fn with_thresholds(mut self, min_matches: usize, high_matches: usize) -> Self {
        self.min_matches = min_matches;
        self.high_matches = high_matches;
        self
    }

    /// Classify the themes of `text`.
    ///
    /// Never returns an empty list: when no category reaches `min_matches`,
    /// a single ("General", medium) fallback stands in.
    pub fn classify(&self, text: &str) -> Vec<Theme> {
        let lowered = text.to_lowercase();
        let mut themes: Vec<Theme> = Vec::new();
        for category in &self.categories {
            let matches = category
                .keywords
                .iter()
                .filter(|keyword| lowered.contains(keyword.as_str()))
                .count();
            if matches >= self.min_matches {
                themes.push(Theme {
                    theme: category.label.clone(),
                    confidence: if matches >= self.high_matches {
                        Confidence::High
                    } else {
                        Confidence::Medium
                    },
                });
            }
        }

        if themes.is_empty() {
            themes.push(Theme {
                theme: "General".to_owned(),
                confidence: Confidence::Medium,
            });
        }
        themes
    }
}
