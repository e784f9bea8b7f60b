// Unit tests for keyword-feature extraction.

use moodring::text::extract_features;

#[test]
fn detects_each_model_keyword() {
    for model in [
        "model 3",
        "model y",
        "model s",
        "model x",
        "cybertruck",
        "semi",
        "roadster",
    ] {
        let features = extract_features(&format!("Thoughts on the {model} so far"));
        assert!(features.mentions_model, "missed model keyword: {model}");
        assert_eq!(features.mentioned_models, vec![model.to_string()]);
    }
}

#[test]
fn collects_multiple_matched_models() {
    let features = extract_features("Traded my Model 3 for a Model Y this week");
    assert!(features.mentions_model);
    assert_eq!(features.mentioned_models, vec!["model 3", "model y"]);
}

#[test]
fn detects_company_by_name_and_ticker() {
    assert!(extract_features("Tesla beat delivery estimates").mentions_company);
    assert!(extract_features("TSLA up 4% premarket").mentions_company);
    assert!(!extract_features("Ford earnings tomorrow").mentions_company);
}

#[test]
fn detects_person_by_any_name_variant() {
    assert!(extract_features("Elon said what?").mentions_elon);
    assert!(extract_features("Musk announced a new factory").mentions_elon);
    assert!(extract_features("interview with elon musk").mentions_elon);
}

#[test]
fn matching_is_case_insensitive() {
    let features = extract_features("CYBERTRUCK deliveries start, says ELON");
    assert!(features.mentions_model);
    assert!(features.mentions_elon);
}

#[test]
fn substring_containment_not_word_match() {
    // Pure membership test: "semifinal" contains "semi". Documented behavior,
    // not a bug — disambiguation is out of scope.
    let features = extract_features("watching the semifinal tonight");
    assert!(features.mentions_model);
}

#[test]
fn empty_text_yields_default_features() {
    let features = extract_features("");
    assert!(!features.mentions_model);
    assert!(!features.mentions_company);
    assert!(!features.mentions_elon);
    assert!(features.mentioned_models.is_empty());
}
