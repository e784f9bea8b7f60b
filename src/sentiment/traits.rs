// Sentiment scorer trait — the swap-ready abstraction.
//
// Two implementations ship: VaderScorer (the primary, whose compound score
// drives classification) and PatternScorer (the secondary, which also
// reports subjectivity). Both are local lexicon lookups, so the trait is
// synchronous and infallible: empty or unscorable input yields zeros.

/// The result of scoring a single piece of text.
#[derive(Debug, Clone, Default)]
pub struct SentimentScores {
    /// Canonical polarity from -1.0 (negative) to 1.0 (positive)
    pub polarity: f64,
    /// Provider-specific breakdown (not all scorers populate every field)
    pub breakdown: ScoreBreakdown,
}

/// Detailed score components. VADER fills the positive/neutral/negative
/// proportions; the pattern scorer fills subjectivity.
#[derive(Debug, Clone, Default)]
pub struct ScoreBreakdown {
    pub positive: Option<f64>,
    pub neutral: Option<f64>,
    pub negative: Option<f64>,
    pub subjectivity: Option<f64>,
}

/// Trait for lexicon-based sentiment scoring.
pub trait SentimentScorer {
    /// Short name used in logs and summaries.
    fn name(&self) -> &'static str;

    /// Score a single text. Never fails; empty input scores 0.0.
    fn score_text(&self, text: &str) -> SentimentScores;

    /// Score multiple texts, returning results in the same order.
    /// Default implementation calls score_text per item — scorers with
    /// expensive setup can override to amortize it.
    fn score_batch(&self, texts: &[String]) -> Vec<SentimentScores> {
        texts.iter().map(|text| self.score_text(text)).collect()
    }
}
