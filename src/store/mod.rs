// CSV storage — wholesale read/write of each stage dataset.
//
// Every stage boundary is a UTF-8 CSV with a header row. Files are read and
// written in full; there is no incremental update beyond the collector's
// periodic flush, which also rewrites the whole merged file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub mod models;

pub use models::{CleanPost, RawPost, ScoredPost, Sentiment};

use crate::text::Normalizer;

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row.with_context(|| format!("Malformed row in {}", path.display()))?);
    }
    Ok(records)
}

fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn load_raw(path: &Path) -> Result<Vec<RawPost>> {
    read_records(path)
}

pub fn save_raw(path: &Path, posts: &[RawPost]) -> Result<()> {
    write_records(path, posts)
}

pub fn load_clean(path: &Path) -> Result<Vec<CleanPost>> {
    read_records(path)
}

pub fn save_clean(path: &Path, posts: &[CleanPost]) -> Result<()> {
    write_records(path, posts)
}

pub fn save_results(path: &Path, posts: &[ScoredPost]) -> Result<()> {
    write_records(path, posts)
}

/// Merge two datasets, deduplicating by id.
///
/// First-seen order is preserved; when the same id appears again the later
/// payload replaces the earlier one in place.
pub fn merge_posts(existing: Vec<RawPost>, new: Vec<RawPost>) -> Vec<RawPost> {
    let mut merged: Vec<RawPost> = Vec::with_capacity(existing.len() + new.len());
    let mut index: HashMap<String, usize> = HashMap::new();

    for post in existing.into_iter().chain(new) {
        match index.get(&post.id) {
            Some(&i) => merged[i] = post,
            None => {
                index.insert(post.id.clone(), merged.len());
                merged.push(post);
            }
        }
    }
    merged
}

/// A results row as found on disk — derived columns may be absent or empty
/// when the file was produced by an older run or an external tool.
#[derive(Deserialize)]
struct ResultsRow {
    id: String,
    date: DateTime<Utc>,
    text: String,
    #[serde(default)]
    user: String,
    #[serde(default)]
    likes: u64,
    #[serde(default)]
    retweets: u64,
    #[serde(default)]
    replies: u64,
    #[serde(default)]
    quotes: u64,
    #[serde(default)]
    text_cleaned: String,
    #[serde(default)]
    mentions_model: bool,
    #[serde(default)]
    mentions_company: bool,
    #[serde(default)]
    mentions_elon: bool,
    #[serde(default)]
    mentioned_models: String,
    #[serde(default)]
    vader_compound: f64,
    #[serde(default)]
    vader_pos: f64,
    #[serde(default)]
    vader_neu: f64,
    #[serde(default)]
    vader_neg: f64,
    #[serde(default)]
    sentiment_vader: Option<String>,
    #[serde(default)]
    pattern_polarity: f64,
    #[serde(default)]
    pattern_subjectivity: f64,
    #[serde(default)]
    sentiment_pattern: Option<String>,
    #[serde(default)]
    sentiment: Option<String>,
    #[serde(default)]
    polarity: Option<f64>,
}

/// Load the results CSV, synthesizing derived columns that are missing.
///
/// `polarity` falls back to `vader_compound`, the sentiment labels are
/// re-derived from their polarity when absent, and `text_cleaned` falls back
/// to normalizing `text`. This lets the presentation layer consume files
/// produced before a column existed.
pub fn load_results(path: &Path) -> Result<Vec<ScoredPost>> {
    let rows: Vec<ResultsRow> = read_records(path)?;

    let needs_cleaning = rows.iter().any(|r| r.text_cleaned.is_empty());
    let normalizer = needs_cleaning.then(Normalizer::default);

    let posts = rows
        .into_iter()
        .map(|row| {
            let polarity = row.polarity.unwrap_or(row.vader_compound);
            let label = |stored: Option<String>, p: f64| {
                stored
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| Sentiment::from_polarity(p).as_str().to_string())
            };

            let text_cleaned = if row.text_cleaned.is_empty() {
                normalizer
                    .as_ref()
                    .map(|n| n.normalize(&row.text))
                    .unwrap_or_default()
            } else {
                row.text_cleaned
            };

            ScoredPost {
                id: row.id,
                date: row.date,
                text: row.text,
                user: row.user,
                likes: row.likes,
                retweets: row.retweets,
                replies: row.replies,
                quotes: row.quotes,
                text_cleaned,
                mentions_model: row.mentions_model,
                mentions_company: row.mentions_company,
                mentions_elon: row.mentions_elon,
                mentioned_models: row.mentioned_models,
                vader_compound: row.vader_compound,
                vader_pos: row.vader_pos,
                vader_neu: row.vader_neu,
                vader_neg: row.vader_neg,
                sentiment_vader: label(row.sentiment_vader, row.vader_compound),
                pattern_polarity: row.pattern_polarity,
                pattern_subjectivity: row.pattern_subjectivity,
                sentiment_pattern: label(row.sentiment_pattern, row.pattern_polarity),
                sentiment: label(row.sentiment, polarity),
                polarity,
            }
        })
        .collect();

    Ok(posts)
}
