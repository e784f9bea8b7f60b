// Keyword-feature extraction — fixed Tesla keyword lists, pure membership.
//
// Features are computed on the original post text (not the cleaned text):
// "model 3" would not survive digit stripping, and "@Tesla" still counts
// as a company mention even though normalization removes it.

/// Vehicle model names, matched as lowercase substrings.
pub const MODEL_KEYWORDS: &[&str] = &[
    "model 3",
    "model y",
    "model s",
    "model x",
    "cybertruck",
    "semi",
    "roadster",
];

/// Company aliases.
pub const COMPANY_KEYWORDS: &[&str] = &["tesla", "tsla"];

/// Name variants for the CEO.
pub const PEOPLE_KEYWORDS: &[&str] = &["elon", "musk", "elon musk"];

/// Boolean keyword flags plus the list of matched model names.
#[derive(Debug, Clone, Default)]
pub struct PostFeatures {
    pub mentions_model: bool,
    pub mentions_company: bool,
    pub mentions_elon: bool,
    pub mentioned_models: Vec<String>,
}

/// Case-insensitive substring containment against the three keyword lists.
/// Empty input yields all-false features; this never fails.
pub fn extract_features(text: &str) -> PostFeatures {
    if text.is_empty() {
        return PostFeatures::default();
    }

    let lower = text.to_lowercase();
    let mut features = PostFeatures::default();

    for model in MODEL_KEYWORDS {
        if lower.contains(model) {
            features.mentions_model = true;
            features.mentioned_models.push(model.to_string());
        }
    }

    features.mentions_company = COMPANY_KEYWORDS.iter().any(|kw| lower.contains(kw));
    features.mentions_elon = PEOPLE_KEYWORDS.iter().any(|kw| lower.contains(kw));

    features
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_model_and_company() {
        let features = extract_features("Just got my Tesla Model Y and I'm in love!");
        assert!(features.mentions_model);
        assert!(features.mentions_company);
        assert!(!features.mentions_elon);
        assert_eq!(features.mentioned_models, vec!["model y"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let features = extract_features("ELON MUSK announced the CYBERTRUCK");
        assert!(features.mentions_elon);
        assert!(features.mentions_model);
    }

    #[test]
    fn empty_text_has_no_features() {
        let features = extract_features("");
        assert!(!features.mentions_model);
        assert!(!features.mentions_company);
        assert!(!features.mentions_elon);
        assert!(features.mentioned_models.is_empty());
    }
}
