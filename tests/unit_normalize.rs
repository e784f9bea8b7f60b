// Unit tests for the text normalizer.
//
// Exercises the fixed cleaning pipeline: link/mention/hashtag handling,
// punctuation and digit stripping, stopword and short-token removal,
// and idempotency on already-clean text.

use moodring::text::Normalizer;

// ============================================================
// Pipeline steps
// ============================================================

#[test]
fn removes_links() {
    let normalizer = Normalizer::default();
    let cleaned = normalizer.normalize("charging update https://example.com/post www.example.com/x");
    assert_eq!(cleaned, "charging update");
}

#[test]
fn removes_mentions_entirely() {
    let normalizer = Normalizer::default();
    let cleaned = normalizer.normalize("@somebody @Tesla delivery delayed");
    assert_eq!(cleaned, "delivery delayed");
}

#[test]
fn keeps_hashtag_words_without_the_marker() {
    let normalizer = Normalizer::default();
    let cleaned = normalizer.normalize("#Cybertruck spotted downtown");
    assert_eq!(cleaned, "cybertruck spotted downtown");
}

#[test]
fn strips_punctuation_and_digits() {
    let normalizer = Normalizer::default();
    let cleaned = normalizer.normalize("range: 300 miles!!! (tested)");
    assert_eq!(cleaned, "range miles tested");
}

#[test]
fn lowercases_everything() {
    let normalizer = Normalizer::default();
    let cleaned = normalizer.normalize("BATTERY Degradation REPORT");
    assert_eq!(cleaned, "battery degradation report");
}

#[test]
fn drops_stopwords_and_short_tokens() {
    let normalizer = Normalizer::default();
    // "the", "is", "on" are stopwords; "ok" is too short
    let cleaned = normalizer.normalize("the factory is ok on schedule");
    assert!(!cleaned.contains("the"));
    assert!(!cleaned.split_whitespace().any(|t| t == "ok"));
    assert!(cleaned.contains("factory"));
    assert!(cleaned.contains("schedule"));
}

// ============================================================
// End-to-end examples and properties
// ============================================================

#[test]
fn end_to_end_example() {
    let normalizer = Normalizer::default();
    let cleaned = normalizer.normalize("I LOVE my Tesla!!! https://t.co/x @Tesla #amazing");
    assert_eq!(cleaned, "love tesla amazing");
}

#[test]
fn empty_input_yields_empty_output() {
    let normalizer = Normalizer::default();
    assert_eq!(normalizer.normalize(""), "");
}

#[test]
fn whitespace_only_input_yields_empty_output() {
    let normalizer = Normalizer::default();
    assert_eq!(normalizer.normalize("   \n\t  "), "");
}

#[test]
fn emoji_only_input_yields_empty_output() {
    let normalizer = Normalizer::default();
    assert_eq!(normalizer.normalize("🚀🚀🚀 🔥"), "");
}

#[test]
fn idempotent_on_normalized_output() {
    let normalizer = Normalizer::default();
    let samples = [
        "I LOVE my Tesla!!! https://t.co/x @Tesla #amazing",
        "TSLA stock is crashing again. Overvalued company with production issues.",
        "Tesla delivered 400K vehicles this quarter.",
        "",
    ];
    for sample in samples {
        let once = normalizer.normalize(sample);
        let twice = normalizer.normalize(&once);
        assert_eq!(once, twice, "not idempotent for: {sample}");
    }
}
