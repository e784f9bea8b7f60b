// Unit tests for classification thresholds and the two lexicon scorers.

use moodring::sentiment::{PatternScorer, SentimentScorer, VaderScorer};
use moodring::store::Sentiment;

// ============================================================
// Sentiment::from_polarity — boundary conditions
// ============================================================

#[test]
fn positive_strictly_above_threshold() {
    assert_eq!(Sentiment::from_polarity(0.11), Sentiment::Positive);
    assert_eq!(Sentiment::from_polarity(1.0), Sentiment::Positive);
}

#[test]
fn negative_strictly_below_threshold() {
    assert_eq!(Sentiment::from_polarity(-0.11), Sentiment::Negative);
    assert_eq!(Sentiment::from_polarity(-1.0), Sentiment::Negative);
}

#[test]
fn exact_boundaries_are_neutral() {
    assert_eq!(Sentiment::from_polarity(0.1), Sentiment::Neutral);
    assert_eq!(Sentiment::from_polarity(-0.1), Sentiment::Neutral);
}

#[test]
fn zero_is_neutral() {
    assert_eq!(Sentiment::from_polarity(0.0), Sentiment::Neutral);
}

#[test]
fn just_inside_the_band_is_neutral() {
    assert_eq!(Sentiment::from_polarity(0.0999), Sentiment::Neutral);
    assert_eq!(Sentiment::from_polarity(-0.0999), Sentiment::Neutral);
}

#[test]
fn just_outside_the_band_is_classified() {
    assert_eq!(Sentiment::from_polarity(0.1001), Sentiment::Positive);
    assert_eq!(Sentiment::from_polarity(-0.1001), Sentiment::Negative);
}

#[test]
fn as_str_round_trip() {
    assert_eq!(Sentiment::Positive.as_str(), "positive");
    assert_eq!(Sentiment::Negative.as_str(), "negative");
    assert_eq!(Sentiment::Neutral.as_str(), "neutral");
    for s in [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral] {
        assert_eq!(s.to_string(), s.as_str());
    }
}

// ============================================================
// VADER scorer
// ============================================================

#[test]
fn vader_classifies_cleaned_praise_positive() {
    let scorer = VaderScorer::new();
    let scores = scorer.score_text("love tesla amazing");
    assert!(
        scores.polarity > 0.1,
        "expected positive compound, got {}",
        scores.polarity
    );
    assert_eq!(
        Sentiment::from_polarity(scores.polarity),
        Sentiment::Positive
    );
}

#[test]
fn vader_breakdown_is_populated() {
    let scorer = VaderScorer::new();
    let scores = scorer.score_text("great car but awful service");
    assert!(scores.breakdown.positive.is_some());
    assert!(scores.breakdown.neutral.is_some());
    assert!(scores.breakdown.negative.is_some());
    assert!(scores.breakdown.subjectivity.is_none());
}

#[test]
fn vader_empty_text_is_zero_and_neutral() {
    let scorer = VaderScorer::new();
    let scores = scorer.score_text("");
    assert_eq!(scores.polarity, 0.0);
    assert_eq!(Sentiment::from_polarity(scores.polarity), Sentiment::Neutral);
}

#[test]
fn vader_batch_preserves_order_and_length() {
    let scorer = VaderScorer::new();
    let texts = vec![
        "love tesla amazing".to_string(),
        "terrible awful broken".to_string(),
        String::new(),
    ];
    let batch = scorer.score_batch(&texts);
    assert_eq!(batch.len(), 3);
    assert!(batch[0].polarity > 0.0);
    assert!(batch[1].polarity < 0.0);
    assert_eq!(batch[2].polarity, 0.0);
}

// ============================================================
// Pattern scorer
// ============================================================

#[test]
fn pattern_polarity_is_bounded() {
    let scorer = PatternScorer::new();
    for text in [
        "amazing incredible perfect wonderful outstanding",
        "terrible horrible awful worst nightmare",
        "the delivery numbers are out",
    ] {
        let scores = scorer.score_text(text);
        assert!(scores.polarity >= -1.0 && scores.polarity <= 1.0);
        let subjectivity = scores.breakdown.subjectivity.unwrap();
        assert!((0.0..=1.0).contains(&subjectivity));
    }
}

#[test]
fn pattern_agrees_with_vader_on_clear_cases() {
    let vader = VaderScorer::new();
    let pattern = PatternScorer::new();

    let praise = "love tesla amazing";
    assert!(vader.score_text(praise).polarity > 0.1);
    assert!(pattern.score_text(praise).polarity > 0.1);

    let complaint = "terrible quality awful service";
    assert!(vader.score_text(complaint).polarity < -0.1);
    assert!(pattern.score_text(complaint).polarity < -0.1);
}

#[test]
fn pattern_empty_text_is_zero() {
    let scorer = PatternScorer::new();
    let scores = scorer.score_text("");
    assert_eq!(scores.polarity, 0.0);
    assert_eq!(scores.breakdown.subjectivity, Some(0.0));
}

#[test]
fn pattern_subjectivity_separates_opinion_from_fact() {
    let scorer = PatternScorer::new();
    let opinion = scorer.score_text("absolutely amazing car, love it");
    let fact = scorer.score_text("the factory opened in texas last year");
    assert!(opinion.breakdown.subjectivity.unwrap() > fact.breakdown.subjectivity.unwrap());
}
