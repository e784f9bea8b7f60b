// VADER scorer — the primary classifier input.
//
// Wraps the `vader_sentiment` crate (a port of the VADER lexicon, tuned for
// social-media text). The compound score is the canonical polarity; the
// pos/neu/neg proportions are carried along for reporting.

use tracing::debug;

use super::traits::{ScoreBreakdown, SentimentScorer, SentimentScores};

/// Lexicon scorer backed by the VADER social-media lexicon.
pub struct VaderScorer;

impl VaderScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn name(&self) -> &'static str {
        "vader"
    }

    fn score_text(&self, text: &str) -> SentimentScores {
        if text.is_empty() {
            return empty_scores();
        }

        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
        from_polarity_map(&analyzer.polarity_scores(text))
    }

    /// Batch scoring builds the analyzer once — parsing the lexicon per
    /// post would dominate the analyze stage.
    fn score_batch(&self, texts: &[String]) -> Vec<SentimentScores> {
        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();

        debug!(count = texts.len(), "Scoring batch with VADER");

        texts
            .iter()
            .map(|text| {
                if text.is_empty() {
                    empty_scores()
                } else {
                    from_polarity_map(&analyzer.polarity_scores(text))
                }
            })
            .collect()
    }
}

fn empty_scores() -> SentimentScores {
    SentimentScores {
        polarity: 0.0,
        breakdown: ScoreBreakdown {
            positive: Some(0.0),
            neutral: Some(0.0),
            negative: Some(0.0),
            subjectivity: None,
        },
    }
}

fn from_polarity_map<K>(scores: &std::collections::HashMap<K, f64>) -> SentimentScores
where
    K: std::borrow::Borrow<str> + Eq + std::hash::Hash,
{
    let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);

    SentimentScores {
        polarity: get("compound"),
        breakdown: ScoreBreakdown {
            positive: Some(get("pos")),
            neutral: Some(get("neu")),
            negative: Some(get("neg")),
            subjectivity: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn praise_scores_positive() {
        let scorer = VaderScorer::new();
        let scores = scorer.score_text("love tesla amazing");
        assert!(scores.polarity > 0.1, "compound was {}", scores.polarity);
    }

    #[test]
    fn complaint_scores_negative() {
        let scorer = VaderScorer::new();
        let scores = scorer.score_text("terrible quality awful customer service");
        assert!(scores.polarity < -0.1, "compound was {}", scores.polarity);
    }

    #[test]
    fn empty_text_scores_zero() {
        let scorer = VaderScorer::new();
        let scores = scorer.score_text("");
        assert_eq!(scores.polarity, 0.0);
    }

    #[test]
    fn batch_matches_single_scoring() {
        let scorer = VaderScorer::new();
        let texts = vec!["love tesla amazing".to_string(), String::new()];
        let batch = scorer.score_batch(&texts);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].polarity, scorer.score_text(&texts[0]).polarity);
        assert_eq!(batch[1].polarity, 0.0);
    }
}
