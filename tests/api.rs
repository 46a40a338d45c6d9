//! End-to-end tests of the public API: the three entry points, their error
//! contracts, and the crate-level selection properties.

use docdigest::{
    explain_document, key_notes, key_notes_default, summarize, ErrorKind, Relevance,
};
use docdigest::nlp::frequency::FrequencyAnalyzer;
use docdigest::nlp::stopwords::StopwordFilter;

fn numbered_doc(n: usize) -> String {
    (0..n)
        .map(|i| format!("Paragraph {i} continues the running description of the archive"))
        .collect::<Vec<_>>()
        .join(". ")
        + "."
}

// ─── summarize ──────────────────────────────────────────────────────────────

#[test]
fn summarize_respects_ratio_bounds() {
    for n in [4, 7, 12, 30] {
        let doc = numbered_doc(n);
        let summary = summarize(&doc).unwrap();
        let count = summary.trim_end_matches('.').split(". ").count();
        let ceiling = (n as f64 * 0.3).ceil() as usize;
        assert!(count <= ceiling.max(3), "n={n}: {count} > {}", ceiling.max(3));
        assert!(count >= 3, "n={n}: fewer than 3 sentences");
    }
}

#[test]
fn summarize_returns_short_texts_unchanged() {
    let doc = numbered_doc(3);
    assert_eq!(summarize(&doc).unwrap(), doc);
}

#[test]
fn summarize_rejects_empty_input() {
    let err = summarize("").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn summarize_output_is_in_document_order() {
    let doc = numbered_doc(20);
    let summary = summarize(&doc).unwrap();
    let mut last = 0;
    for sentence in summary.trim_end_matches('.').split(". ") {
        let at = doc.find(sentence).expect("sentence not from source");
        assert!(at >= last);
        last = at;
    }
}

// ─── key notes ──────────────────────────────────────────────────────────────

#[test]
fn key_notes_count_stays_in_band() {
    for n in [6, 9, 15, 40] {
        let notes = key_notes_default(&numbered_doc(n)).unwrap();
        assert!(
            (5..=10).contains(&notes.len()),
            "n={n}: {} notes",
            notes.len()
        );
    }
}

#[test]
fn key_notes_returns_few_sentences_verbatim() {
    let notes = key_notes_default(&numbered_doc(5)).unwrap();
    assert_eq!(notes.len(), 5);
    for (i, note) in notes.iter().enumerate() {
        assert!(note.starts_with(&format!("Paragraph {i} ")));
    }
}

#[test]
fn key_notes_rejects_trivial_fragments() {
    // Three sentences, each below the 20-character threshold.
    let err = key_notes("A. B. C.", 7).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.message(), "No sentences found in text");
}

#[test]
fn key_notes_honors_requested_count() {
    let notes = key_notes(&numbered_doc(20), 9).unwrap();
    assert_eq!(notes.len(), 9);
}

// ─── explain ────────────────────────────────────────────────────────────────

#[test]
fn explain_detects_instructional_intent() {
    let analysis = explain_document("A short guide on how to bake bread without a stand mixer.")
        .unwrap();
    assert_eq!(analysis.intent.primary, "Instructional");
}

#[test]
fn explain_ranks_repeated_word_as_high_relevance_topic() {
    let text = "Climate stands apart. Climate returns in climate reports, climate \
                briefs, climate notes, and climate studies about unrelated matters.";
    let analysis = explain_document(text).unwrap();
    assert_eq!(analysis.topics[0].topic, "climate");
    assert_eq!(analysis.topics[0].relevance, Relevance::High);
}

#[test]
fn explain_always_yields_a_theme() {
    let analysis = explain_document("Plain short words with no category anywhere.").unwrap();
    assert!(!analysis.themes.is_empty());
}

#[test]
fn explain_serializes_with_lowercase_tiers() {
    let text = "Climate research shapes energy policy today. Climate models predict \
                warmer decades ahead. Climate adaptation requires sustained funding. \
                Climate budgets keep growing. Governments study climate impact. \
                Climate climate climate.";
    let analysis = explain_document(text).unwrap();
    let json = serde_json::to_value(&analysis).unwrap();

    assert!(json["statistics"]["word_count"].as_u64().unwrap() > 0);
    assert_eq!(json["topics"][0]["topic"], "climate");
    assert_eq!(json["topics"][0]["relevance"], "high");
    assert!(json["themes"][0]["confidence"] == "high" || json["themes"][0]["confidence"] == "medium");
    assert_eq!(json["meaning"]["scope"], "concise");
}

// ─── shared primitives ──────────────────────────────────────────────────────

#[test]
fn frequency_table_max_is_one() {
    let table = FrequencyAnalyzer::new(StopwordFilter::summarization())
        .analyze(&numbered_doc(8));
    assert!((table.max_weight() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn operations_are_pure_across_calls() {
    let doc = numbered_doc(14);
    assert_eq!(summarize(&doc).unwrap(), summarize(&doc).unwrap());
    assert_eq!(
        key_notes_default(&doc).unwrap(),
        key_notes_default(&doc).unwrap()
    );
    assert_eq!(
        explain_document(&doc).unwrap(),
        explain_document(&doc).unwrap()
    );
}
