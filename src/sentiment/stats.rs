// Aggregation over scored datasets — counts, percentages, rankings.
//
// All functions are total: they return well-defined values (zeros) on the
// empty set instead of dividing by zero.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::store::models::ScoredPost;

/// Aggregate sentiment statistics for a (possibly filtered) dataset.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SentimentStats {
    pub total: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub positive_percent: f64,
    pub negative_percent: f64,
    pub neutral_percent: f64,
    pub mean_polarity: f64,
    pub std_polarity: f64,
    pub mean_subjectivity: f64,
}

impl SentimentStats {
    pub fn from_posts(posts: &[ScoredPost]) -> Self {
        let total = posts.len();
        let positive_count = posts.iter().filter(|p| p.sentiment == "positive").count();
        let negative_count = posts.iter().filter(|p| p.sentiment == "negative").count();
        let neutral_count = posts.iter().filter(|p| p.sentiment == "neutral").count();

        let percent = |count: usize| {
            if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            }
        };

        let mean_polarity = if total > 0 {
            posts.iter().map(|p| p.polarity).sum::<f64>() / total as f64
        } else {
            0.0
        };
        let mean_subjectivity = if total > 0 {
            posts.iter().map(|p| p.pattern_subjectivity).sum::<f64>() / total as f64
        } else {
            0.0
        };

        // Sample standard deviation, matching the analyzer's summary output
        let std_polarity = if total > 1 {
            let variance = posts
                .iter()
                .map(|p| (p.polarity - mean_polarity).powi(2))
                .sum::<f64>()
                / (total - 1) as f64;
            variance.sqrt()
        } else {
            0.0
        };

        Self {
            total,
            positive_count,
            negative_count,
            neutral_count,
            positive_percent: percent(positive_count),
            negative_percent: percent(negative_count),
            neutral_percent: percent(neutral_count),
            mean_polarity,
            std_polarity,
            mean_subjectivity,
        }
    }
}

/// The `n` most negative posts, most negative first.
pub fn top_negative(posts: &[ScoredPost], n: usize) -> Vec<ScoredPost> {
    let mut sorted: Vec<ScoredPost> = posts.to_vec();
    sorted.sort_by(|a, b| {
        a.polarity
            .partial_cmp(&b.polarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

/// Per-day record counts, in date order.
pub fn daily_counts(posts: &[ScoredPost]) -> Vec<(NaiveDate, usize)> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for post in posts {
        *counts.entry(post.date.date_naive()).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}
