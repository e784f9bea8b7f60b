// Analysis stage — score every cleaned post with both lexicons.
//
// The VADER compound score is the canonical polarity: it drives the
// `sentiment` label and the `polarity` column. The pattern scorer's output
// is carried alongside for comparison and subjectivity reporting.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::sentiment::{
    PatternScorer, SentimentScorer, SentimentStats, VaderScorer,
};
use crate::store::{self, ScoredPost, Sentiment};

/// Run the analysis stage. Fails fast when the cleaned CSV is missing.
/// Returns the scored rows and their aggregate statistics.
pub fn run(input: &Path, output: &Path) -> Result<(Vec<ScoredPost>, SentimentStats)> {
    if !input.exists() {
        anyhow::bail!(
            "Input file not found: {}\n\
             Run `moodring preprocess` first.",
            input.display()
        );
    }

    let cleaned = store::load_clean(input)?;
    println!("Scoring sentiment for {} posts...", cleaned.len());

    let texts: Vec<String> = cleaned.iter().map(|p| p.text_cleaned.clone()).collect();

    let vader = VaderScorer::new();
    let pattern = PatternScorer::new();

    let vader_scores = vader.score_batch(&texts);
    let pattern_scores = pattern.score_batch(&texts);

    let scored: Vec<ScoredPost> = cleaned
        .into_iter()
        .zip(vader_scores)
        .zip(pattern_scores)
        .map(|((post, v), p)| {
            let sentiment_vader = Sentiment::from_polarity(v.polarity);
            let sentiment_pattern = Sentiment::from_polarity(p.polarity);

            ScoredPost {
                id: post.id,
                date: post.date,
                text: post.text,
                user: post.user,
                likes: post.likes,
                retweets: post.retweets,
                replies: post.replies,
                quotes: post.quotes,
                text_cleaned: post.text_cleaned,
                mentions_model: post.mentions_model,
                mentions_company: post.mentions_company,
                mentions_elon: post.mentions_elon,
                mentioned_models: post.mentioned_models,
                vader_compound: v.polarity,
                vader_pos: v.breakdown.positive.unwrap_or(0.0),
                vader_neu: v.breakdown.neutral.unwrap_or(0.0),
                vader_neg: v.breakdown.negative.unwrap_or(0.0),
                sentiment_vader: sentiment_vader.as_str().to_string(),
                pattern_polarity: p.polarity,
                pattern_subjectivity: p.breakdown.subjectivity.unwrap_or(0.0),
                sentiment_pattern: sentiment_pattern.as_str().to_string(),
                // VADER is the primary classification — it is tuned for
                // social-media text.
                sentiment: sentiment_vader.as_str().to_string(),
                polarity: v.polarity,
            }
        })
        .collect();

    store::save_results(output, &scored)?;

    let stats = SentimentStats::from_posts(&scored);

    info!(
        total = stats.total,
        positive = stats.positive_count,
        negative = stats.negative_count,
        neutral = stats.neutral_count,
        path = %output.display(),
        "Analysis finished"
    );

    Ok((scored, stats))
}
