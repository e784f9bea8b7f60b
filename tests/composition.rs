// Composition tests — verifying that pure stages chain together correctly.
//
// These exercise the data flow between modules:
//   Normalize -> Features -> Score -> Classify -> Aggregate
// without any network calls or filesystem side effects.

use moodring::sentiment::{PatternScorer, SentimentScorer, VaderScorer};
use moodring::store::Sentiment;
use moodring::text::{extract_features, Normalizer};

// ============================================================
// Chain: normalize -> score -> classify
// ============================================================

#[test]
fn praise_flows_to_a_positive_label() {
    let normalizer = Normalizer::default();
    let scorer = VaderScorer::new();

    let cleaned = normalizer.normalize("I LOVE my Tesla!!! https://t.co/x @Tesla #amazing");
    assert_eq!(cleaned, "love tesla amazing");

    let scores = scorer.score_text(&cleaned);
    let label = Sentiment::from_polarity(scores.polarity);
    assert_eq!(label, Sentiment::Positive);
}

#[test]
fn complaint_flows_to_a_negative_label() {
    let normalizer = Normalizer::default();
    let scorer = VaderScorer::new();

    let cleaned =
        normalizer.normalize("Tesla quality control is terrible. My car is awful. @TeslaService");
    let scores = scorer.score_text(&cleaned);
    assert_eq!(Sentiment::from_polarity(scores.polarity), Sentiment::Negative);
}

#[test]
fn empty_text_flows_to_neutral() {
    let normalizer = Normalizer::default();
    let vader = VaderScorer::new();
    let pattern = PatternScorer::new();

    let cleaned = normalizer.normalize("");
    assert_eq!(cleaned, "");

    // Both scorers default to 0.0 on empty input, which classifies neutral
    assert_eq!(
        Sentiment::from_polarity(vader.score_text(&cleaned).polarity),
        Sentiment::Neutral
    );
    assert_eq!(
        Sentiment::from_polarity(pattern.score_text(&cleaned).polarity),
        Sentiment::Neutral
    );
}

#[test]
fn link_only_post_normalizes_to_empty_and_stays_neutral() {
    let normalizer = Normalizer::default();
    let scorer = VaderScorer::new();

    let cleaned = normalizer.normalize("https://t.co/abc123 @Tesla");
    assert_eq!(cleaned, "");
    assert_eq!(
        Sentiment::from_polarity(scorer.score_text(&cleaned).polarity),
        Sentiment::Neutral
    );
}

// ============================================================
// Features run on the original text, not the cleaned text
// ============================================================

#[test]
fn features_survive_what_normalization_destroys() {
    let normalizer = Normalizer::default();
    let original = "My Model 3 arrived! @Tesla";

    // Digit stripping turns "model 3" into "model" in the cleaned text...
    let cleaned = normalizer.normalize(original);
    assert!(!cleaned.contains("model 3"));

    // ...but the feature extractor sees the original and still matches it
    let features = extract_features(original);
    assert!(features.mentions_model);
    assert_eq!(features.mentioned_models, vec!["model 3"]);
    assert!(features.mentions_company);
}

// ============================================================
// The two scorers disagree in magnitude but rarely in direction
// ============================================================

#[test]
fn scorers_agree_in_direction_on_seed_texts() {
    let normalizer = Normalizer::default();
    let vader = VaderScorer::new();
    let pattern = PatternScorer::new();

    let clearly_positive = "Love my Model S! The build quality is excellent and the range is impressive.";
    let clearly_negative = "Tesla's customer service is awful. Terrible experience, worst purchase.";

    for (text, want) in [
        (clearly_positive, Sentiment::Positive),
        (clearly_negative, Sentiment::Negative),
    ] {
        let cleaned = normalizer.normalize(text);
        let v = Sentiment::from_polarity(vader.score_text(&cleaned).polarity);
        let p = Sentiment::from_polarity(pattern.score_text(&cleaned).polarity);
        assert_eq!(v, want, "vader disagreed on: {text}");
        assert_eq!(p, want, "pattern disagreed on: {text}");
    }
}
