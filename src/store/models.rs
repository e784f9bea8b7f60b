// Record types — the rows that flow through the pipeline CSVs.
//
// Each stage has its own row type with a fixed column set: RawPost from the
// collector, CleanPost from the preprocessor, ScoredPost from the analyzer.
// A record is created once and enriched stage by stage, never rewritten.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A collected post, straight from the search API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPost {
    pub id: String,
    pub date: DateTime<Utc>,
    pub text: String,
    pub user: String,
    pub likes: u64,
    pub retweets: u64,
    pub replies: u64,
    pub quotes: u64,
}

/// A post after text normalization and keyword-feature extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanPost {
    pub id: String,
    pub date: DateTime<Utc>,
    pub text: String,
    pub user: String,
    pub likes: u64,
    pub retweets: u64,
    pub replies: u64,
    pub quotes: u64,
    pub text_cleaned: String,
    pub mentions_model: bool,
    pub mentions_company: bool,
    pub mentions_elon: bool,
    /// Matched model keywords, joined with '|' (empty when none matched)
    pub mentioned_models: String,
}

impl CleanPost {
    /// Enrich a raw post with its cleaned text and keyword features.
    pub fn enrich(raw: RawPost, text_cleaned: String, features: crate::text::PostFeatures) -> Self {
        Self {
            id: raw.id,
            date: raw.date,
            text: raw.text,
            user: raw.user,
            likes: raw.likes,
            retweets: raw.retweets,
            replies: raw.replies,
            quotes: raw.quotes,
            text_cleaned,
            mentions_model: features.mentions_model,
            mentions_company: features.mentions_company,
            mentions_elon: features.mentions_elon,
            mentioned_models: features.mentioned_models.join("|"),
        }
    }
}

/// A fully analyzed post with both scorers' output and the final label.
///
/// `polarity` and `sentiment` are the canonical classification columns —
/// copies of the primary (VADER) compound score and its label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPost {
    pub id: String,
    pub date: DateTime<Utc>,
    pub text: String,
    pub user: String,
    pub likes: u64,
    pub retweets: u64,
    pub replies: u64,
    pub quotes: u64,
    pub text_cleaned: String,
    pub mentions_model: bool,
    pub mentions_company: bool,
    pub mentions_elon: bool,
    pub mentioned_models: String,
    pub vader_compound: f64,
    pub vader_pos: f64,
    pub vader_neu: f64,
    pub vader_neg: f64,
    pub sentiment_vader: String,
    pub pattern_polarity: f64,
    pub pattern_subjectivity: f64,
    pub sentiment_pattern: String,
    pub sentiment: String,
    pub polarity: f64,
}

/// Sentiment class — the only decision rule in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Classify a polarity score. The boundaries are deliberately hard:
    /// exactly 0.1 or -0.1 is still neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        match polarity {
            p if p > 0.1 => Sentiment::Positive,
            p if p < -0.1 => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values_are_neutral() {
        assert_eq!(Sentiment::from_polarity(0.1), Sentiment::Neutral);
        assert_eq!(Sentiment::from_polarity(-0.1), Sentiment::Neutral);
    }

    #[test]
    fn nan_is_neutral() {
        // NaN fails both comparisons, so it falls through to the wildcard arm
        assert_eq!(Sentiment::from_polarity(f64::NAN), Sentiment::Neutral);
    }
}
